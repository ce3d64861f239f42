use crate::pages::{AdminHome, Dashboard, Home, LoginPage, NotFound, Pos, PosManager};
use tillpoint_core::access::Access;
use tillpoint_core::{LoginSurface, StaffRole, UserType};
use tillpoint_frontend_common::{AuthProvider, RouteGuard, auth_context};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    AdminLogin,
    #[at("/pos/login")]
    StaffLogin,
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[at("/pos")]
    Pos,
    #[at("/pos/manager")]
    PosManager,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::AdminLogin => html! { <LoginPage surface={LoginSurface::Admin} /> },
        Route::StaffLogin => html! { <LoginPage surface={LoginSurface::Staff} /> },
        Route::Dashboard => html! {
            <RouteGuard<Route> access={Access::UserType(UserType::Company)}>
                <Dashboard />
            </RouteGuard<Route>>
        },
        Route::Admin => html! {
            <RouteGuard<Route> access={Access::UserType(UserType::SuperAdmin)}>
                <AdminHome />
            </RouteGuard<Route>>
        },
        Route::Pos => html! {
            <RouteGuard<Route> access={Access::UserType(UserType::Staff)}>
                <Pos />
            </RouteGuard<Route>>
        },
        Route::PosManager => html! {
            <RouteGuard<Route> access={Access::role(StaffRole::Manager)}>
                <PosManager />
            </RouteGuard<Route>>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    match auth_context() {
        Ok(context) => html! {
            <AuthProvider {context}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        },
        Err(error) => {
            tracing::error!(%error, "Failed to initialise the session layer");
            html! {
                <div class="min-h-screen flex items-center justify-center">
                    <p class="text-red-600">{ format!("Tillpoint could not start: {error}") }</p>
                </div>
            }
        }
    }
}
