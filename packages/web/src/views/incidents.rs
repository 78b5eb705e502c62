use dioxus::prelude::*;

use ui::use_resolved_incidents;

/// History of closed-out incidents.
#[component]
pub fn Incidents() -> Element {
    let incidents = use_resolved_incidents();

    rsx! {
        section {
            h2 { class: "section-title", "Resolved Incidents" }
            table {
                class: "incident-table",
                style: "width: 100%; border-collapse: collapse; font-size: 0.875rem;",
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "Location" }
                        th { "Priority" }
                        th { "Raised" }
                        th { "Resolved" }
                        th { "By" }
                    }
                }
                tbody {
                    for incident in incidents() {
                        tr {
                            key: "{incident.id}",
                            td { "{incident.id}" }
                            td {
                                div { "{incident.title}" }
                                div {
                                    style: "font-size: 0.75rem; color: #9ca3af;",
                                    "{incident.description}"
                                }
                            }
                            td { "{incident.location}" }
                            td { "{incident.priority:?}" }
                            td { "{incident.original_alert_time}" }
                            td { "{incident.resolved_at}" }
                            td { "{incident.resolved_by}" }
                        }
                    }
                }
            }
        }
    }
}
