use crate::app::Route;
use tillpoint_frontend_common::services::with_auth_error_handling;
use tillpoint_frontend_common::{AuthHandle, use_auth};
use tillpoint_http::types::Category;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
enum Categories {
    Loading,
    Loaded(Vec<Category>),
    Failed(String),
}

async fn load_categories(auth: &AuthHandle) -> Categories {
    let client = match auth.context().service().authenticated_client() {
        Ok(Some(client)) => client,
        Ok(None) => return Categories::Failed("Not logged in".to_string()),
        Err(error) => return Categories::Failed(error.user_message()),
    };
    match with_auth_error_handling(auth, client.list_categories()).await {
        Ok(categories) => Categories::Loaded(categories),
        Err(error) => Categories::Failed(error.user_message()),
    }
}

/// Company dashboard placeholder
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let categories = use_state(|| Categories::Loading);

    {
        let auth = auth.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            if let Some(auth) = auth {
                spawn_local(async move {
                    categories.set(load_categories(&auth).await);
                });
            }
        });
    }

    let name = auth
        .as_ref()
        .and_then(|auth| auth.principal().and_then(|p| p.name().map(str::to_string)))
        .unwrap_or_else(|| "there".to_string());

    html! {
        <div class="p-8">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold">{ format!("Hello, {name}") }</h1>
                <LogoutButton />
            </div>
            <h2 class="text-lg font-medium mb-2">{"Categories"}</h2>
            {
                match &*categories {
                    Categories::Loading => html! { <p class="text-gray-500">{"Loading..."}</p> },
                    Categories::Failed(message) => html! { <p class="text-red-600">{message}</p> },
                    Categories::Loaded(list) if list.is_empty() => html! { <p>{"No categories yet"}</p> },
                    Categories::Loaded(list) => html! {
                        <ul class="list-disc pl-6">
                            { for list.iter().map(|c| html! { <li key={c.id.clone()}>{ &c.name }</li> }) }
                        </ul>
                    },
                }
            }
        </div>
    }
}

/// Logs out and returns to the login surface whatever the backend says
#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let onclick = Callback::from(move |_: MouseEvent| {
        let auth = auth.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            let target = match auth.as_ref().and_then(AuthHandle::user_type) {
                Some(tillpoint_core::UserType::Staff) => Route::StaffLogin,
                _ => Route::AdminLogin,
            };
            if let Some(auth) = auth {
                auth.logout().await;
            }
            if let Some(navigator) = navigator {
                navigator.push(&target);
            }
        });
    });

    html! {
        <button {onclick} class="px-3 py-1 rounded-md border border-gray-300 text-sm">{"Log out"}</button>
    }
}
