use super::home_for;
use crate::app::Route;
use tillpoint_frontend_common::{Spinner, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

/// `/` sends visitors on according to their session
#[function_component(Home)]
pub fn home() -> Html {
    let Some(auth) = use_auth() else {
        return html! { <Redirect<Route> to={Route::AdminLogin} /> };
    };

    if auth.is_loading() {
        return html! { <Spinner /> };
    }
    match auth.user_type() {
        Some(user_type) => html! { <Redirect<Route> to={home_for(user_type)} /> },
        None => html! { <Redirect<Route> to={Route::AdminLogin} /> },
    }
}
