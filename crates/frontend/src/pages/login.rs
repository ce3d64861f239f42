use super::home_for;
use crate::app::Route;
use tillpoint_core::access::next_location;
use tillpoint_core::{LoginSurface, Principal};
use tillpoint_frontend_common::LoginForm;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub surface: LoginSurface,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let navigator = use_navigator();
    // Set by the hosting server when it bounced a cold load of a protected page
    let requested = use_location()
        .and_then(|location| next_location(location.query_str()))
        .and_then(|next| Route::recognize(&next))
        .filter(|route| !matches!(route, Route::NotFound | Route::AdminLogin | Route::StaffLogin));

    let on_success = Callback::from(move |principal: Principal| {
        if let Some(navigator) = &navigator {
            let target = requested
                .clone()
                .unwrap_or_else(|| home_for(principal.user_type()));
            navigator.push(&target);
        }
    });

    let switch_surface = match props.surface {
        LoginSurface::Admin => html! {
            <Link<Route> to={Route::StaffLogin} classes="text-sm text-emerald-700">{"Staff login"}</Link<Route>>
        },
        LoginSurface::Staff => html! {
            <Link<Route> to={Route::AdminLogin} classes="text-sm text-emerald-700">{"Company login"}</Link<Route>>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center gap-4 px-4">
            <LoginForm surface={props.surface} {on_success} />
            { switch_surface }
        </div>
    }
}
