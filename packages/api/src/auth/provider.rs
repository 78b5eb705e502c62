//! # Identity-provider REST client
//!
//! [`IdentityClient`] wraps the external identity provider's account API
//! (sign-in, sign-up, profile update, password reset, token lookup) behind
//! typed calls. The dashboard holds no credentials of its own; every
//! operation is delegated and the provider's error message is surfaced
//! verbatim through [`IdentityError::Provider`] so the UI can display it.

use serde::Deserialize;
use thiserror::Error;

use super::config::IdentityConfig;
use crate::models::ProviderUser;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider not configured: {0}")]
    Config(String),
    /// Error message supplied by the provider (wrong password, known email...).
    #[error("{0}")]
    Provider(String),
    #[error("identity request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Account record in the provider's wire format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// A fresh sign-up: the created user plus the token needed for the
/// follow-up profile update.
pub struct SignUpOutcome {
    pub user: ProviderUser,
    pub id_token: Option<String>,
}

impl From<AccountRecord> for ProviderUser {
    fn from(record: AccountRecord) -> Self {
        ProviderUser {
            uid: record.local_id,
            email: record.email,
            display_name: record.display_name,
        }
    }
}

/// REST client for the external identity provider.
pub struct IdentityClient {
    config: IdentityConfig,
    http: reqwest::Client,
}

impl IdentityClient {
    pub fn new() -> Result<Self, IdentityError> {
        let config = IdentityConfig::from_env().map_err(IdentityError::Config)?;
        Ok(Self {
            config,
            http: reqwest::Client::new(),
        })
    }

    async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, IdentityError> {
        let url = format!(
            "{}/accounts:{}?key={}",
            self.config.base_url, endpoint, self.config.api_key
        );
        let response = self.http.post(&url).json(&body).send().await?;

        if response.status().is_success() {
            return Ok(response);
        }
        // The provider wraps failures in {"error": {"message": ...}}.
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.error.message,
            Err(_) => "identity provider returned an unreadable error".to_string(),
        };
        Err(IdentityError::Provider(message))
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderUser, IdentityError> {
        let record: AccountRecord = self
            .post(
                "signInWithPassword",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?
            .json()
            .await?;
        Ok(record.into())
    }

    /// Create a new account with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, IdentityError> {
        let record: AccountRecord = self
            .post(
                "signUp",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?
            .json()
            .await?;
        let id_token = record.id_token.clone();
        Ok(SignUpOutcome {
            user: record.into(),
            id_token,
        })
    }

    /// Store a display name on a freshly created account.
    pub async fn update_profile(
        &self,
        id_token: &str,
        display_name: &str,
    ) -> Result<(), IdentityError> {
        self.post(
            "update",
            serde_json::json!({
                "idToken": id_token,
                "displayName": display_name,
                "returnSecureToken": false,
            }),
        )
        .await?;
        Ok(())
    }

    /// Ask the provider to send a password-reset email.
    pub async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        self.post(
            "sendOobCode",
            serde_json::json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
        .await?;
        Ok(())
    }

    /// Resolve a provider-issued token to its account record.
    pub async fn lookup(&self, id_token: &str) -> Result<ProviderUser, IdentityError> {
        let response: LookupResponse = self
            .post("lookup", serde_json::json!({ "idToken": id_token }))
            .await?
            .json()
            .await?;
        response
            .users
            .into_iter()
            .next()
            .map(ProviderUser::from)
            .ok_or_else(|| IdentityError::Provider("token matched no account".to_string()))
    }
}
