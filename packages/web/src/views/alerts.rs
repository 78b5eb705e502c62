use dioxus::prelude::*;

use ui::RecentAlerts;

/// Full alert list with descriptions expanded.
#[component]
pub fn Alerts() -> Element {
    rsx! {
        section {
            h2 { class: "section-title", "Alerts" }
            RecentAlerts { show_description: true }
        }
    }
}
