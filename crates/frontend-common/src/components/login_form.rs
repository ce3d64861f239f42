//! Login form for both login surfaces

use crate::auth::use_auth;
use tillpoint_core::{LoginSurface, Principal};
use tillpoint_http::types::Credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub surface: LoginSurface,
    /// Fired with the new principal after a successful login
    pub on_success: Callback<Principal>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let auth = use_auth();
    // Company surface: email + password. Staff surface: staff id, store id, passcode.
    let first = use_node_ref();
    let second = use_node_ref();
    let third = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let surface = props.surface;
        let on_success = props.on_success.clone();
        let (first, second, third) = (first.clone(), second.clone(), third.clone());
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(auth) = auth.clone() else {
                error_message.set(Some("Session service unavailable".to_string()));
                return;
            };

            let credentials = match surface {
                LoginSurface::Admin => {
                    let (email, password) = (input_value(&first), input_value(&second));
                    if email.is_empty() || password.is_empty() {
                        error_message.set(Some("Please fill in all fields".to_string()));
                        return;
                    }
                    Credentials::company(email, password)
                }
                LoginSurface::Staff => {
                    let (staff_id, store_id, passcode) =
                        (input_value(&first), input_value(&second), input_value(&third));
                    if staff_id.is_empty() || store_id.is_empty() || passcode.is_empty() {
                        error_message.set(Some("Please fill in all fields".to_string()));
                        return;
                    }
                    Credentials::staff(staff_id, store_id, passcode)
                }
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            is_loading.set(true);
            error_message.set(None);

            spawn_local(async move {
                match auth.login(&credentials).await {
                    Ok(principal) => on_success.emit(principal),
                    // The backend's message is shown as sent
                    Err(error) => error_message.set(Some(error.user_message())),
                }
                is_loading.set(false);
            });
        })
    };

    let field = |node: &NodeRef, id: &'static str, label: &'static str, kind: &'static str| {
        html! {
            <div class="mb-4">
                <label for={id} class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
                <input
                    id={id}
                    ref={node.clone()}
                    type={kind}
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    disabled={*is_loading}
                />
            </div>
        }
    };

    let (title, fields) = match props.surface {
        LoginSurface::Admin => (
            "Company login",
            html! {
                <>
                    { field(&first, "email", "Email", "email") }
                    { field(&second, "password", "Password", "password") }
                </>
            },
        ),
        LoginSurface::Staff => (
            "Staff login",
            html! {
                <>
                    { field(&first, "staff_id", "Staff ID", "text") }
                    { field(&second, "store_id", "Store ID", "text") }
                    { field(&third, "passcode", "Passcode", "password") }
                </>
            },
        ),
    };

    html! {
        <form {onsubmit} class="max-w-sm w-full bg-white rounded-lg shadow p-6">
            <h1 class="text-xl font-semibold mb-6">{title}</h1>
            { fields }
            if let Some(message) = &*error_message {
                <p class="text-red-600 text-sm mb-4" role="alert">{message}</p>
            }
            <button
                type="submit"
                class="w-full py-2 rounded-md bg-emerald-600 text-white disabled:opacity-50"
                disabled={*is_loading}
            >
                { if *is_loading { "Signing in..." } else { "Sign in" } }
            </button>
        </form>
    }
}
