use dioxus::prelude::*;

use api::{Alert, PriorityColor};

use crate::fetch::use_recent_alerts;

/// Recent alert list shown on the dashboard and the alerts page.
#[component]
pub fn RecentAlerts(#[props(default = false)] show_description: bool) -> Element {
    let alerts = use_recent_alerts();

    rsx! {
        div {
            class: "recent-alerts",
            style: "display: flex; flex-direction: column; gap: 0.5rem;",
            for alert in alerts() {
                AlertRow { alert, show_description }
            }
        }
    }
}

#[component]
fn AlertRow(alert: Alert, show_description: bool) -> Element {
    let accent = match alert.priority_color {
        PriorityColor::Red => "#dc2626",
        PriorityColor::Yellow => "#d97706",
    };

    rsx! {
        div {
            class: "alert-row",
            style: "background: #1f2937; border-left: 3px solid {accent}; border-radius: 6px; padding: 0.75rem 1rem; color: #e5e7eb;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                span { style: "font-weight: 600;", "{alert.title}" }
                span { style: "font-size: 0.75rem; color: #9ca3af;", "{alert.time}" }
            }
            div {
                style: "font-size: 0.8125rem; color: #9ca3af;",
                "{alert.location} · {alert.priority:?}"
            }
            if show_description {
                if let Some(description) = alert.description {
                    p {
                        style: "margin: 0.5rem 0 0; font-size: 0.8125rem; color: #d1d5db;",
                        "{description}"
                    }
                }
            }
        }
    }
}
