//! Auth provider mirroring the shared [`AuthContext`] into the Yew tree

use std::rc::Rc;
use tillpoint_core::{AuthState, Principal, UserType};
use tillpoint_http::client::ClientError;
use tillpoint_http::types::Credentials;
use tillpoint_http::{AuthContext, AuthError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Auth state as seen by components
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthContextData {
    pub state: AuthState,
}

pub enum AuthAction {
    /// Replace the mirrored state with the shared context's current state
    Sync(AuthState),
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Sync(state) if state == self.state => self,
            AuthAction::Sync(state) => Rc::new(Self { state }),
        }
    }
}

/// Handle given to components: current state plus the operations on it
#[derive(Clone)]
pub struct AuthHandle {
    context: Rc<AuthContext>,
    data: UseReducerHandle<AuthContextData>,
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context) && self.data == other.data
    }
}

impl AuthHandle {
    pub fn state(&self) -> &AuthState {
        &self.data.state
    }

    pub fn is_loading(&self) -> bool {
        self.data.state.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.state.is_authenticated()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.data.state.user_type()
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.data.state.principal()
    }

    /// The shared context, for typed API calls through its service
    pub fn context(&self) -> &Rc<AuthContext> {
        &self.context
    }

    fn sync(&self) {
        self.data.dispatch(AuthAction::Sync(self.context.state()));
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        let result = self.context.login(credentials).await;
        self.sync();
        result
    }

    pub async fn logout(&self) {
        if let Err(error) = self.context.logout().await {
            tracing::debug!(%error, "Logout finished with a backend error");
        }
        self.sync();
    }

    /// Force a logout when `error` reports the token expired or invalid
    pub fn handle_error(&self, error: &ClientError) -> bool {
        let forced = self.context.handle_error(error);
        if forced {
            self.sync();
        }
        forced
    }
}

#[derive(Properties)]
pub struct AuthProviderProps {
    pub context: Rc<AuthContext>,
    pub children: Children,
}

impl PartialEq for AuthProviderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context) && self.children == other.children
    }
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let data = use_reducer(AuthContextData::default);

    // Check the stored token once, then follow every transition
    {
        let data = data.clone();
        let context = props.context.clone();
        use_effect_with((), move |_| {
            let mut updates = context.subscribe();
            data.dispatch(AuthAction::Sync(context.mount()));
            spawn_local(async move {
                while updates.changed().await.is_ok() {
                    let state = updates.borrow_and_update().clone();
                    data.dispatch(AuthAction::Sync(state));
                }
            });
        });
    }

    let handle = AuthHandle {
        context: props.context.clone(),
        data,
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> Option<AuthHandle> {
    use_context::<AuthHandle>()
}
