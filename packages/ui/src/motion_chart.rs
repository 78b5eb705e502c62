use dioxus::prelude::*;

use crate::fetch::use_motion_chart;

/// Motion activity over the day, rendered as a simple bar chart.
#[component]
pub fn MotionChart() -> Element {
    let points = use_motion_chart();

    rsx! {
        div {
            class: "motion-chart",
            style: "background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb;",
            div { style: "font-weight: 600; margin-bottom: 0.75rem;", "Motion Activity" }
            div {
                style: "display: flex; align-items: flex-end; gap: 4px; height: 120px;",
                for point in points() {
                    MotionBar {
                        key: "{point.time}",
                        time: point.time,
                        motion: point.motion,
                    }
                }
            }
        }
    }
}

#[component]
fn MotionBar(time: String, motion: f64) -> Element {
    let height = motion.clamp(0.0, 100.0);

    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 2px;",
            div {
                style: "width: 100%; background: #60a5fa; border-radius: 2px 2px 0 0; height: {height}%;",
                title: "{motion:.0}",
            }
            span { style: "font-size: 0.625rem; color: #9ca3af;", "{time}" }
        }
    }
}
