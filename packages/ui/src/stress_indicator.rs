use dioxus::prelude::*;

use crate::fetch::use_stress_index;

/// Environmental stress index gauge with per-sensor-class contributions.
///
/// The index itself is backend-computed; this component only renders the
/// 0–1 scalar and colors it by the conventional bands (< 0.4 calm,
/// < 0.7 moderate, otherwise high).
#[component]
pub fn StressIndicator() -> Element {
    let index = use_stress_index();
    let index = index();

    let color = if index.current < 0.4 {
        "#16a34a"
    } else if index.current < 0.7 {
        "#d97706"
    } else {
        "#dc2626"
    };
    let percent = (index.current * 100.0).round();
    let change = (index.change_1h * 100.0).round();

    rsx! {
        div {
            class: "stress-indicator",
            style: "background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb;",

            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                span { style: "font-weight: 600;", "Environmental Stress Index" }
                span { style: "font-size: 0.8125rem; color: #9ca3af;", "{index.status}" }
            }

            div {
                style: "font-size: 2rem; font-weight: 700; color: {color};",
                "{percent}%"
            }
            div {
                style: "font-size: 0.75rem; color: #9ca3af;",
                "{change:+}% over the last hour"
            }

            div {
                style: "margin-top: 0.75rem; display: flex; flex-direction: column; gap: 0.375rem;",
                ContributionBar { label: "Video", value: index.sensor_contributions.video }
                ContributionBar { label: "Audio", value: index.sensor_contributions.audio }
                ContributionBar { label: "IoT", value: index.sensor_contributions.iot }
            }
        }
    }
}

#[component]
fn ContributionBar(label: &'static str, value: f64) -> Element {
    let width = (value * 100.0).clamp(0.0, 100.0);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem; font-size: 0.75rem;",
            span { style: "width: 3rem; color: #9ca3af;", "{label}" }
            div {
                style: "flex: 1; background: #374151; border-radius: 3px; height: 6px;",
                div {
                    style: "width: {width}%; background: #60a5fa; border-radius: 3px; height: 6px;",
                }
            }
        }
    }
}
