mod admin;
mod dashboard;
mod home;
mod login;
mod not_found;
mod pos;

pub use admin::AdminHome;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use pos::{Pos, PosManager};

use crate::app::Route;
use tillpoint_core::UserType;

/// Landing route for a logged-in user type
pub const fn home_for(user_type: UserType) -> Route {
    match user_type {
        UserType::SuperAdmin => Route::Admin,
        UserType::Company => Route::Dashboard,
        UserType::Staff => Route::Pos,
    }
}
