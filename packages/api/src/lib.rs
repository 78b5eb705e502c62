//! # API crate — shared fullstack server functions for Vigil
//!
//! This crate defines every Dioxus server function the dashboard frontend
//! calls, along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | External identity provider (password + Google OAuth) and session keys |
//! | [`demo`] | `server` | Demo backend data: canned feeds/alerts/incidents, in-process sensors and settings |
//! | [`mock`] | — | Static fallback values the client substitutes when a call fails |
//! | [`models`] | — | Wire DTOs shared by server and client |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]`/`#[post(...)]` and compiled twice: once with
//! full server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - **Dashboard data**: `get_summary_stats`, `get_recent_alerts`,
//!   `get_stress_index`, `get_motion_chart`, `get_live_feeds`,
//!   `get_resolved_incidents`, `analyze_with_ai`
//! - **Authentication**: `login`, `signup`, `logout`, `get_current_user`,
//!   `verify_token`, `reset_password`, `get_google_login_url`
//! - **Settings & sensors**: `get_settings`, `save_settings`, `get_sensors`,
//!   `create_sensor`, `update_sensor`, `delete_sensor`
//!
//! Read failures are recovered client-side by the fallback fetcher in the
//! `ui` crate; write failures propagate as [`ServerFnError`] so the calling
//! page can surface them.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
#[cfg(feature = "server")]
pub mod demo;
pub mod mock;
pub mod models;

pub use models::{
    Alert, AuthUser, DashboardSettings, FeedStatus, LiveFeed, MotionPoint, Priority,
    PriorityColor, ProviderUser, ResolvedIncident, Sensor, SensorContributions, SensorStatus,
    SensorType, StressIndex, SummaryStats, TrendPoint,
};

/// Fields a client supplies when creating or updating a sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub location: String,
    pub sensitivity: f64,
}

/// Envelope returned by `POST /api/settings/save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    pub message: String,
    pub settings: DashboardSettings,
}

/// Envelope returned by sensor create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorResponse {
    pub success: bool,
    pub message: String,
    pub sensor: Sensor,
}

/// Envelope returned by sensor delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSensorResponse {
    pub success: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Dashboard data
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
#[get("/api/summary-stats")]
pub async fn get_summary_stats() -> Result<SummaryStats, ServerFnError> {
    Ok(demo::summary_stats())
}

#[cfg(not(feature = "server"))]
#[get("/api/summary-stats")]
pub async fn get_summary_stats() -> Result<SummaryStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/alerts/recent")]
pub async fn get_recent_alerts() -> Result<Vec<Alert>, ServerFnError> {
    Ok(demo::recent_alerts())
}

#[cfg(not(feature = "server"))]
#[get("/api/alerts/recent")]
pub async fn get_recent_alerts() -> Result<Vec<Alert>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/stress-index")]
pub async fn get_stress_index() -> Result<StressIndex, ServerFnError> {
    Ok(demo::stress_index())
}

#[cfg(not(feature = "server"))]
#[get("/api/stress-index")]
pub async fn get_stress_index() -> Result<StressIndex, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/motion-chart")]
pub async fn get_motion_chart() -> Result<Vec<MotionPoint>, ServerFnError> {
    Ok(demo::motion_chart())
}

#[cfg(not(feature = "server"))]
#[get("/api/motion-chart")]
pub async fn get_motion_chart() -> Result<Vec<MotionPoint>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/live-feeds")]
pub async fn get_live_feeds() -> Result<Vec<LiveFeed>, ServerFnError> {
    Ok(demo::live_feeds())
}

#[cfg(not(feature = "server"))]
#[get("/api/live-feeds")]
pub async fn get_live_feeds() -> Result<Vec<LiveFeed>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/incidents/resolved")]
pub async fn get_resolved_incidents() -> Result<Vec<ResolvedIncident>, ServerFnError> {
    Ok(demo::resolved_incidents())
}

#[cfg(not(feature = "server"))]
#[get("/api/incidents/resolved")]
pub async fn get_resolved_incidents() -> Result<Vec<ResolvedIncident>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Run the external AI analysis over an opaque content payload.
#[cfg(feature = "server")]
#[post("/api/ai/analyze")]
pub async fn analyze_with_ai(
    kind: String,
    content: serde_json::Value,
) -> Result<serde_json::Value, ServerFnError> {
    Ok(demo::analyze(&kind, &content))
}

#[cfg(not(feature = "server"))]
#[post("/api/ai/analyze")]
pub async fn analyze_with_ai(
    kind: String,
    content: serde_json::Value,
) -> Result<serde_json::Value, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
async fn store_session_user(
    session: &tower_sessions::Session,
    user: &AuthUser,
) -> Result<(), ServerFnError> {
    session
        .insert(auth::SESSION_USER_KEY, user.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Sign in with email and password through the identity provider.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    let client = auth::IdentityClient::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    let provider_user = client
        .sign_in(&email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = AuthUser::from_provider(&provider_user);
    store_session_user(&session, &user).await?;
    Ok(user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an account. When a first or last name is supplied, the composed
/// display name is pushed back to the provider as a profile update.
#[cfg(feature = "server")]
#[post("/api/auth/signup", session: tower_sessions::Session)]
pub async fn signup(
    email: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    let client = auth::IdentityClient::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    let outcome = client
        .sign_up(&email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut provider_user = outcome.user;
    let display_name = format!(
        "{} {}",
        first_name.as_deref().unwrap_or(""),
        last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string();

    if !display_name.is_empty() {
        if let Some(id_token) = outcome.id_token.as_deref() {
            client
                .update_profile(id_token, &display_name)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
        }
        provider_user.display_name = Some(display_name);
    }

    let user = AuthUser::from_provider(&provider_user);
    store_session_user(&session, &user).await?;
    Ok(user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/signup")]
pub async fn signup(
    email: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    session
        .get(auth::SESSION_USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    Ok(None)
}

/// Validate a provider-issued token and establish a session from it.
#[cfg(feature = "server")]
#[post("/api/auth/verify-token", session: tower_sessions::Session)]
pub async fn verify_token(token: String) -> Result<AuthUser, ServerFnError> {
    let client = auth::IdentityClient::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    let provider_user = client
        .lookup(&token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = AuthUser::from_provider(&provider_user);
    store_session_user(&session, &user).await?;
    Ok(user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/verify-token")]
pub async fn verify_token(token: String) -> Result<AuthUser, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Ask the identity provider to send a password-reset email.
#[cfg(feature = "server")]
#[post("/api/auth/reset-password")]
pub async fn reset_password(email: String) -> Result<(), ServerFnError> {
    let client = auth::IdentityClient::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    client
        .send_password_reset(&email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/reset-password")]
pub async fn reset_password(email: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Build the Google OAuth authorization URL, parking the CSRF state and
/// PKCE verifier in the session for the callback route.
#[cfg(feature = "server")]
#[get("/api/auth/google-url", session: tower_sessions::Session)]
pub async fn get_google_login_url() -> Result<String, ServerFnError> {
    let oauth = auth::GoogleOAuth::new().map_err(ServerFnError::new)?;
    let (url, state, verifier) = oauth.generate_auth_url();

    session
        .insert(auth::SESSION_OAUTH_STATE_KEY, state)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_OAUTH_VERIFIER_KEY, verifier)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(url)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/google-url")]
pub async fn get_google_login_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Settings & sensors
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
#[get("/api/settings")]
pub async fn get_settings() -> Result<DashboardSettings, ServerFnError> {
    Ok(demo::settings().await.lock().await.clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/settings")]
pub async fn get_settings() -> Result<DashboardSettings, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Replace the stored settings object.
#[cfg(feature = "server")]
#[post("/api/settings/save")]
pub async fn save_settings(
    settings: DashboardSettings,
) -> Result<SaveSettingsResponse, ServerFnError> {
    let stored = demo::settings().await;
    *stored.lock().await = settings.clone();

    Ok(SaveSettingsResponse {
        success: true,
        message: "Settings saved successfully".to_string(),
        settings,
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/settings/save")]
pub async fn save_settings(
    settings: DashboardSettings,
) -> Result<SaveSettingsResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/sensors")]
pub async fn get_sensors() -> Result<Vec<Sensor>, ServerFnError> {
    Ok(demo::sensors().await.lock().await.clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/sensors")]
pub async fn get_sensors() -> Result<Vec<Sensor>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new sensor.
#[cfg(feature = "server")]
#[post("/api/sensors/create")]
pub async fn create_sensor(draft: SensorDraft) -> Result<SensorResponse, ServerFnError> {
    let registry = demo::sensors().await;
    let mut sensors = registry.lock().await;

    let sensor = Sensor {
        id: format!("SEN_{:03}", sensors.len() + 1),
        name: draft.name,
        sensor_type: draft.sensor_type,
        location: draft.location,
        status: SensorStatus::Active,
        last_update: demo::now_label(),
        sensitivity: draft.sensitivity,
    };
    sensors.push(sensor.clone());

    Ok(SensorResponse {
        success: true,
        message: "Sensor created successfully".to_string(),
        sensor,
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/sensors/create")]
pub async fn create_sensor(draft: SensorDraft) -> Result<SensorResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update an existing sensor's editable fields.
#[cfg(feature = "server")]
#[put("/api/sensors/:id/update")]
pub async fn update_sensor(id: String, draft: SensorDraft) -> Result<SensorResponse, ServerFnError> {
    let registry = demo::sensors().await;
    let mut sensors = registry.lock().await;

    let Some(sensor) = sensors.iter_mut().find(|s| s.id == id) else {
        return Err(ServerFnError::new(format!("Sensor not found: {id}")));
    };

    sensor.name = draft.name;
    sensor.sensor_type = draft.sensor_type;
    sensor.location = draft.location;
    sensor.sensitivity = draft.sensitivity;
    sensor.last_update = demo::now_label();

    Ok(SensorResponse {
        success: true,
        message: "Sensor updated successfully".to_string(),
        sensor: sensor.clone(),
    })
}

#[cfg(not(feature = "server"))]
#[put("/api/sensors/:id/update")]
pub async fn update_sensor(id: String, draft: SensorDraft) -> Result<SensorResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove a sensor from the registry.
#[cfg(feature = "server")]
#[delete("/api/sensors/:id/delete")]
pub async fn delete_sensor(id: String) -> Result<DeleteSensorResponse, ServerFnError> {
    let registry = demo::sensors().await;
    let mut sensors = registry.lock().await;

    let before = sensors.len();
    sensors.retain(|s| s.id != id);
    if sensors.len() == before {
        return Err(ServerFnError::new(format!("Sensor not found: {id}")));
    }

    Ok(DeleteSensorResponse {
        success: true,
        message: "Sensor deleted successfully".to_string(),
    })
}

#[cfg(not(feature = "server"))]
#[delete("/api/sensors/:id/delete")]
pub async fn delete_sensor(id: String) -> Result<DeleteSensorResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
