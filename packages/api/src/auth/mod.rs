//! Authentication module: external identity provider plus Google OAuth.

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod google;
#[cfg(feature = "server")]
mod provider;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use config::{IdentityConfig, OAuthConfig};
#[cfg(feature = "server")]
pub use google::GoogleOAuth;
#[cfg(feature = "server")]
pub use provider::{IdentityClient, IdentityError, SignUpOutcome};
#[cfg(feature = "server")]
pub use session::{SESSION_OAUTH_STATE_KEY, SESSION_OAUTH_VERIFIER_KEY, SESSION_USER_KEY};
