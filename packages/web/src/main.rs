use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Alerts, Analytics, Dashboard, Incidents, LiveFeeds, Login, Reports, Settings, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/alerts")]
        Alerts {},
        #[route("/live-feeds")]
        LiveFeeds {},
        #[route("/incidents")]
        Incidents {},
        #[route("/analytics")]
        Analytics {},
        #[route("/reports")]
        Reports {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Sessions are in-memory; a restart logs everyone out.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        // The OAuth callback must be registered before the catch-all app route
        .route("/auth/google/callback", get(google_callback))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[cfg(feature = "server")]
async fn google_callback(
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    let Some(code) = params.get("code") else {
        tracing::error!("Google callback missing code");
        return Redirect::to("/login?error=missing_code");
    };
    let Some(state) = params.get("state") else {
        tracing::error!("Google callback missing state");
        return Redirect::to("/login?error=missing_state");
    };

    // The state must match the one parked in the session when the auth URL
    // was generated, otherwise this is a forged callback.
    let expected: Option<String> = session
        .remove(api::auth::SESSION_OAUTH_STATE_KEY)
        .await
        .ok()
        .flatten();
    if expected.as_deref() != Some(state.as_str()) {
        tracing::error!("Google callback state mismatch");
        return Redirect::to("/login?error=state_mismatch");
    }
    let Ok(Some(verifier)) = session
        .remove::<String>(api::auth::SESSION_OAUTH_VERIFIER_KEY)
        .await
    else {
        tracing::error!("Google callback missing PKCE verifier");
        return Redirect::to("/login?error=missing_verifier");
    };

    match api::auth::GoogleOAuth::new() {
        Ok(oauth) => match oauth.exchange_code(code, &verifier).await {
            Ok(provider_user) => {
                let user = api::AuthUser::from_provider(&provider_user);
                if let Err(e) = session.insert(api::auth::SESSION_USER_KEY, user).await {
                    tracing::error!("Failed to set session: {}", e);
                    return Redirect::to("/login?error=session_error");
                }
                if let Err(e) = session.save().await {
                    tracing::error!("Failed to save session: {}", e);
                    return Redirect::to("/login?error=session_save_error");
                }
                Redirect::to("/")
            }
            Err(e) => {
                tracing::error!("Google OAuth exchange error: {}", e);
                Redirect::to("/login?error=oauth_error")
            }
        },
        Err(e) => {
            tracing::error!("Failed to create Google OAuth: {}", e);
            Redirect::to("/login?error=config_error")
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
