mod login_form;
mod spinner;

pub use login_form::LoginForm;
pub use spinner::LoadingSpinner as Spinner;
