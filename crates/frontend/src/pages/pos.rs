use super::dashboard::LogoutButton;
use tillpoint_core::Principal;
use tillpoint_frontend_common::use_auth;
use yew::prelude::*;

fn staff_banner(principal: Option<&Principal>) -> Html {
    match principal {
        Some(Principal::Staff(staff)) => html! {
            <p class="text-gray-600">
                { format!("{} at store {} ({})", staff.name.as_deref().unwrap_or(&staff.staff_id), staff.store_id, staff.role) }
            </p>
        },
        _ => Html::default(),
    }
}

/// Store terminal placeholder
#[function_component(Pos)]
pub fn pos() -> Html {
    let auth = use_auth();
    html! {
        <div class="p-8">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold">{"Point of sale"}</h1>
                <LogoutButton />
            </div>
            { staff_banner(auth.as_ref().and_then(|auth| auth.principal())) }
        </div>
    }
}

/// Manager-only terminal tools placeholder
#[function_component(PosManager)]
pub fn pos_manager() -> Html {
    let auth = use_auth();
    html! {
        <div class="p-8">
            <h1 class="text-2xl font-semibold mb-6">{"Manager tools"}</h1>
            { staff_banner(auth.as_ref().and_then(|auth| auth.principal())) }
            <p class="text-gray-600">{"Stock adjustments and overrides."}</p>
        </div>
    }
}
