use dioxus::prelude::*;

use ui::{average_stress, use_stress_index, use_summary_stats, SensorDistribution, StressTrend};

/// Analytics page: aggregate stress statistics, the 24-hour trend, and the
/// sensor contribution breakdown.
#[component]
pub fn Analytics() -> Element {
    let stats = use_summary_stats();
    let index = use_stress_index();

    let stats = stats();
    let avg = average_stress(&index().trend);

    rsx! {
        div {
            class: "analytics",
            style: "display: flex; flex-direction: column; gap: 1.25rem;",

            h2 { class: "section-title", "Analytics" }

            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem;",
                StatCard { label: "Average Stress Index", value: format!("{avg:.2}") }
                StatCard { label: "Total Alerts", value: stats.alerts_24h.to_string() }
                StatCard { label: "System Accuracy", value: "89%".to_string() }
                StatCard { label: "Active Sensors", value: stats.active_cameras.to_string() }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 1.25rem;",
                StressTrend {}
                SensorDistribution {}
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb; text-align: center;",
            div { style: "font-size: 1.5rem; font-weight: 700; color: #a78bfa;", "{value}" }
            div { style: "font-size: 0.8125rem; color: #9ca3af;", "{label}" }
        }
    }
}
