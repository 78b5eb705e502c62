//! Identity-provider and OAuth configuration from environment variables.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

/// REST identity-provider configuration.
///
/// The provider itself is opaque to the dashboard; only its base URL and API
/// key are configured. Defaults target the Google Identity Toolkit endpoint
/// the original deployment used.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub api_key: String,
    pub base_url: String,
}

impl IdentityConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let api_key =
            std::env::var("VIGIL_IDENTITY_API_KEY").map_err(|_| "VIGIL_IDENTITY_API_KEY not set")?;
        let base_url = std::env::var("VIGIL_IDENTITY_URL")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string());

        Ok(Self { api_key, base_url })
    }
}

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Create Google OAuth config from environment variables.
    pub fn google() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let client_id =
            std::env::var("GOOGLE_CLIENT_ID").map_err(|_| "GOOGLE_CLIENT_ID not set")?;
        let client_secret =
            std::env::var("GOOGLE_CLIENT_SECRET").map_err(|_| "GOOGLE_CLIENT_SECRET not set")?;
        let redirect_uri = std::env::var("AUTH_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/auth/google/callback".to_string());

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new("https://accounts.google.com/o/oauth2/v2/auth".to_string())
                .map_err(|e| e.to_string())?,
            token_url: TokenUrl::new("https://oauth2.googleapis.com/token".to_string())
                .map_err(|e| e.to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri).map_err(|e| e.to_string())?,
        })
    }
}
