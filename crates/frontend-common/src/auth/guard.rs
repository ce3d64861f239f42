//! Client-side route guard

use super::context::use_auth;
use crate::components::Spinner;
use tillpoint_core::access::{Access, GuardDecision, LoginSurface, evaluate};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub access: Access,
    pub children: Children,
}

/// Renders its children only when the current principal satisfies `access`.
///
/// While the stored token is still being checked a spinner is shown instead
/// of redirecting. Rejected visitors are sent to the login route recognised
/// at the surface's path.
#[function_component(RouteGuard)]
pub fn route_guard<R>(props: &RouteGuardProps) -> Html
where
    R: Routable + 'static,
{
    let Some(auth) = use_auth() else {
        tracing::error!("RouteGuard rendered outside AuthProvider");
        return Html::default();
    };

    match evaluate(auth.state(), &props.access) {
        GuardDecision::Loading => html! { <Spinner text="Checking your session..." /> },
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::Redirect(surface) => login_redirect::<R>(surface),
    }
}

fn login_redirect<R: Routable + 'static>(surface: LoginSurface) -> Html {
    match R::recognize(surface.path()) {
        Some(route) => html! { <Redirect<R> to={route} /> },
        None => {
            tracing::warn!(%surface, "No route registered for login surface");
            Html::default()
        }
    }
}
