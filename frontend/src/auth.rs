use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use shared::SessionDto;

use crate::api::auth as auth_api;
use crate::api::auth::SessionCheckResult;

/// LocalStorage key holding the bearer token issued by the SSO callback.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<SessionDto>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.error == other.error
            && match (&self.session, &other.session) {
                (Some(a), Some(b)) => a.current.id == b.current.id,
                (None, None) => true,
                _ => false,
            }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Check whether the session holds a named access key
    pub fn has_access(&self, key: &str) -> bool {
        self.session
            .as_ref()
            .map(|s| s.has_access(key))
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SessionLoaded(SessionDto),
    SessionMissing,
    SessionError(String),
    Logout,
    LogoutSuccess,
    LogoutError(String),
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SessionLoaded(session) => Rc::new(Self {
                session: Some(session),
                loading: false,
                error: None,
            }),
            AuthAction::SessionMissing => {
                // Stale or rejected token; drop it so the next visit skips
                // the whoami round trip.
                let _ = LocalStorage::delete(TOKEN_STORAGE_KEY);
                Rc::new(Self {
                    session: None,
                    loading: false,
                    error: None,
                })
            }
            AuthAction::SessionError(error) => Rc::new(Self {
                loading: false,
                error: Some(error),
                ..(*self).clone()
            }),
            AuthAction::Logout => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LogoutSuccess => {
                let _ = LocalStorage::delete(TOKEN_STORAGE_KEY);
                Rc::new(Self {
                    session: None,
                    loading: false,
                    error: None,
                })
            }
            AuthAction::LogoutError(error) => Rc::new(Self {
                loading: false,
                error: Some(error),
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub logout: Callback<()>,
    pub refresh: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let has_token = LocalStorage::get::<String>(TOKEN_STORAGE_KEY).is_ok();
    let auth = use_reducer_eq(move || AuthState {
        loading: has_token,
        ..AuthState::default()
    });

    // Resolve the stored token into a session once on mount.
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match auth_api::get_session().await {
                    SessionCheckResult::Ok(session) => {
                        debug!("Session resolved for {}", session.current.name);
                        auth.dispatch(AuthAction::SessionLoaded(session));
                    }
                    SessionCheckResult::LoggedOut => {
                        auth.dispatch(AuthAction::SessionMissing);
                    }
                    SessionCheckResult::Other(e) => {
                        error!("Session check failed: {}", e);
                        auth.dispatch(AuthAction::SessionError(e));
                    }
                }
            });
            || ()
        });
    }

    // Handle logout
    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::Logout);
                match auth_api::logout().await {
                    Ok(()) => auth.dispatch(AuthAction::LogoutSuccess),
                    Err(e) => auth.dispatch(AuthAction::LogoutError(e)),
                }
            });
        })
    };

    // Handle refresh, e.g. after the SSO callback stored a new token
    let refresh = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                match auth_api::get_session().await {
                    SessionCheckResult::Ok(session) => {
                        auth.dispatch(AuthAction::SessionLoaded(session));
                    }
                    SessionCheckResult::LoggedOut => {
                        auth.dispatch(AuthAction::SessionMissing);
                    }
                    SessionCheckResult::Other(e) => {
                        error!("Failed to refresh session: {}", e);
                    }
                }
            });
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        logout,
        refresh,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
