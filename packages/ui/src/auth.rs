//! Authentication context and hooks for the UI.
//!
//! The session lives with the external identity provider; this module only
//! adapts it. [`AuthProvider`] owns the context signal, fetches the current
//! user on mount, and re-checks the session on a fixed period — standing in
//! for the provider's session-change stream. The operation helpers wrap the
//! auth server functions and surface failures as [`AuthError`] carrying the
//! provider's message.

use std::fmt;
use std::time::Duration;

use api::AuthUser;
use dioxus::prelude::*;

use crate::fetch::sleep;

const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Generic auth failure wrapping the identity provider's message.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthError(pub String);

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AuthError {}

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => auth_state.set(AuthState {
                user,
                loading: false,
            }),
            Err(_) => auth_state.set(AuthState::signed_out()),
        }
    });

    // Periodic session re-check; stands in for the identity provider's
    // session-change stream and picks up sign-outs from other tabs.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(SESSION_CHECK_INTERVAL).await;

                // Don't check while initial load is still in progress
                if auth_state.peek().loading {
                    continue;
                }
                if let Ok(user) = api::get_current_user().await {
                    if auth_state.peek().user != user {
                        auth_state.set(AuthState {
                            user,
                            loading: false,
                        });
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Sign in with email and password.
pub async fn login(
    mut auth: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    match api::login(email.to_string(), password.to_string()).await {
        Ok(user) => {
            auth.set(AuthState::signed_in(user));
            Ok(())
        }
        Err(err) => Err(AuthError(err.to_string())),
    }
}

/// Create an account; names are optional and stored as the display name.
pub async fn signup(
    mut auth: Signal<AuthState>,
    email: &str,
    password: &str,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<(), AuthError> {
    match api::signup(email.to_string(), password.to_string(), first_name, last_name).await {
        Ok(user) => {
            auth.set(AuthState::signed_in(user));
            Ok(())
        }
        Err(err) => Err(AuthError(err.to_string())),
    }
}

/// Start the Google sign-in flow by redirecting to the provider.
pub async fn login_with_google() -> Result<(), AuthError> {
    let url = api::get_google_login_url()
        .await
        .map_err(|err| AuthError(err.to_string()))?;

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%url, "open this URL to continue Google sign-in");
    }
    Ok(())
}

/// Sign out and clear the session.
pub async fn logout(mut auth: Signal<AuthState>) -> Result<(), AuthError> {
    match api::logout().await {
        Ok(()) => {
            auth.set(AuthState::signed_out());
            Ok(())
        }
        Err(err) => Err(AuthError(err.to_string())),
    }
}

/// Ask the provider to email a password-reset link.
pub async fn reset_password(email: &str) -> Result<(), AuthError> {
    api::reset_password(email.to_string())
        .await
        .map_err(|err| AuthError(err.to_string()))
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();

    let onclick = move |_| async move {
        if logout(auth_state).await.is_ok() {
            // Redirect to login
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ProviderUser;

    #[test]
    fn test_session_event_with_user_authenticates() {
        // Provider stream emits a signed-in record.
        let provider = ProviderUser {
            uid: "a1b2c3d4e5f60718".to_string(),
            email: Some("jane@x.com".to_string()),
            display_name: Some("Jane Doe".to_string()),
        };
        let state = AuthState::signed_in(AuthUser::from_provider(&provider));

        assert!(state.is_authenticated());
        let user = state.user.unwrap();
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.username, "jane");
        assert_eq!(user.email, "jane@x.com");
    }

    #[test]
    fn test_signed_out_event_clears_user() {
        let state = AuthState::signed_out();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated());
        assert!(!state.loading);
    }
}
