use dioxus::prelude::*;

use crate::fetch::use_summary_stats;
use crate::icons::{FaBell, FaCircleCheck, FaVideo};
use crate::Icon;

/// Headline counter cards at the top of the dashboard.
#[component]
pub fn SummaryCards() -> Element {
    let stats = use_summary_stats();
    let stats = stats();

    rsx! {
        div {
            class: "summary-cards",
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem;",

            SummaryCard {
                label: "Active Cameras",
                value: stats.active_cameras.to_string(),
                icon: rsx! { Icon { icon: FaVideo, width: 18, height: 18 } },
            }
            SummaryCard {
                label: "Alerts (24h)",
                value: stats.alerts_24h.to_string(),
                icon: rsx! { Icon { icon: FaBell, width: 18, height: 18 } },
            }
            SummaryCard {
                label: "Resolved Incidents",
                value: stats.resolved_incidents.to_string(),
                icon: rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18 } },
            }
            SummaryCard {
                label: "System Status",
                value: stats.system_status,
                icon: rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18 } },
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "summary-card",
            style: "background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb; display: flex; align-items: center; gap: 0.75rem;",
            {icon}
            div {
                div {
                    style: "font-size: 0.8125rem; color: #9ca3af;",
                    "{label}"
                }
                div {
                    style: "font-size: 1.5rem; font-weight: 700;",
                    "{value}"
                }
            }
        }
    }
}
