use contracts::system::auth::AdminProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::http::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub admin: Option<AdminProfile>,
    /// Cookie check still in flight
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let token = storage::get_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        token: token.clone(),
        admin: None,
        restoring: token.is_some(),
    });

    // Validate a token left in the cookie by a previous visit
    if token.is_some() {
        spawn_local(async move {
            match api::get_current_admin().await {
                Ok(admin) => set_auth_state.update(|s| {
                    s.admin = Some(admin);
                    s.restoring = false;
                }),
                Err(ApiError::Unauthorized) => {
                    log::info!("Stored staff session expired");
                    storage::clear_token();
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => {
                    log::warn!("Could not verify staff session: {}", e);
                    set_auth_state.update(|s| s.restoring = false);
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    match (
        use_context::<ReadSignal<AuthState>>(),
        use_context::<WriteSignal<AuthState>>(),
    ) {
        (Some(state), Some(set_state)) => (state, set_state),
        _ => {
            log::error!("AuthProvider not found in component tree");
            signal(AuthState::default())
        }
    }
}

/// Helper: Perform login. Takes the setter because the context is not
/// reachable after an await.
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(email, password).await?;
    storage::save_token(&response.token);
    log::info!("Staff member {} signed in", response.admin.email);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        admin: Some(response.admin),
        restoring: false,
    });
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    log::info!("Staff member signed out");
    set_auth_state.set(AuthState::default());
}
