use dioxus::prelude::*;

use ui::{LiveFeedGrid, MotionChart, RecentAlerts, StressIndicator, SummaryCards};

/// Main dashboard: counters, stress gauge, motion chart, alerts and feeds.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "dashboard",
            style: "display: flex; flex-direction: column; gap: 1.25rem;",

            SummaryCards {}

            div {
                style: "display: grid; grid-template-columns: 1fr 2fr; gap: 1.25rem;",
                StressIndicator {}
                MotionChart {}
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem;",
                section {
                    h2 { class: "section-title", "Recent Alerts" }
                    RecentAlerts {}
                }
                section {
                    h2 { class: "section-title", "Live Feeds" }
                    LiveFeedGrid {}
                }
            }
        }
    }
}
