//! Session key constants.
//!
//! The authenticated [`crate::models::AuthUser`] is stored whole in the
//! tower-sessions session under [`SESSION_USER_KEY`]; there is no user table
//! to look it up from. The two OAuth keys hold the CSRF state and PKCE
//! verifier between the redirect to Google and the callback.

pub const SESSION_USER_KEY: &str = "vigil.user";
pub const SESSION_OAUTH_STATE_KEY: &str = "vigil.oauth.state";
pub const SESSION_OAUTH_VERIFIER_KEY: &str = "vigil.oauth.verifier";
