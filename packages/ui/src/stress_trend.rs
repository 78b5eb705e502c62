use dioxus::prelude::*;

use api::TrendPoint;

use crate::fetch::use_stress_index;

/// Mean stress value of a trend series, 0 when the series is empty.
pub fn average_stress(trend: &[TrendPoint]) -> f64 {
    if trend.is_empty() {
        return 0.0;
    }
    trend.iter().map(|point| point.stress).sum::<f64>() / trend.len() as f64
}

/// 24-hour stress index trend as a bar chart.
#[component]
pub fn StressTrend() -> Element {
    let index = use_stress_index();

    rsx! {
        div {
            class: "stress-trend",
            style: "background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb;",
            div { style: "font-weight: 600; margin-bottom: 0.75rem;", "Stress Index Trend" }
            div {
                style: "display: flex; align-items: flex-end; gap: 3px; height: 160px;",
                for point in index().trend {
                    TrendBar {
                        key: "{point.time}",
                        time: point.time,
                        stress: point.stress,
                    }
                }
            }
        }
    }
}

#[component]
fn TrendBar(time: String, stress: f64) -> Element {
    // The index is a 0–1 scalar; scale to the chart height.
    let height = (stress * 100.0).clamp(0.0, 100.0);

    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 2px;",
            div {
                style: "width: 100%; background: #8b5cf6; border-radius: 2px 2px 0 0; height: {height}%;",
                title: "{stress:.2}",
            }
            span { style: "font-size: 0.5625rem; color: #9ca3af;", "{time}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: &str, stress: f64) -> TrendPoint {
        TrendPoint {
            time: time.to_string(),
            stress,
        }
    }

    #[test]
    fn test_average_of_series() {
        let trend = [point("0:00", 0.2), point("1:00", 0.4), point("2:00", 0.6)];
        let avg = average_stress(&trend);
        assert!((avg - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_average_of_empty_series_is_zero() {
        assert_eq!(average_stress(&[]), 0.0);
    }
}
