use super::dashboard::LogoutButton;
use yew::prelude::*;

/// Super admin area placeholder
#[function_component(AdminHome)]
pub fn admin_home() -> Html {
    html! {
        <div class="p-8">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold">{"Platform administration"}</h1>
                <LogoutButton />
            </div>
            <p class="text-gray-600">{"Companies and store requests are managed here."}</p>
        </div>
    }
}
