use dioxus::prelude::*;

use ui::{use_alert_toasts, use_auth, Navbar};

use crate::Route;

/// Layout wrapper for every authenticated page: navigation bar, the alert
/// toast watcher, and the routed page body.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();

    // Kick unauthenticated visitors to the login page once the initial
    // session check has settled.
    let nav = use_navigator();
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    use_alert_toasts();

    rsx! {
        Navbar {
            Link { class: "nav-link", to: Route::Dashboard {}, "Dashboard" }
            Link { class: "nav-link", to: Route::Alerts {}, "Alerts" }
            Link { class: "nav-link", to: Route::LiveFeeds {}, "Live Feeds" }
            Link { class: "nav-link", to: Route::Incidents {}, "Incidents" }
            Link { class: "nav-link", to: Route::Analytics {}, "Analytics" }
            Link { class: "nav-link", to: Route::Reports {}, "Reports" }
            Link { class: "nav-link", to: Route::Settings {}, "Settings" }
        }

        div {
            class: "page-body",
            style: "padding: 1.25rem; max-width: 1200px; margin: 0 auto;",
            Outlet::<Route> {}
        }
    }
}
