use dioxus::prelude::*;

use api::SensorContributions;

use crate::fetch::use_stress_index;

/// Per-sensor-class share of the total contribution, as percentages that
/// sum to (approximately) 100. All-zero contributions yield all-zero shares.
pub fn distribution_shares(contributions: &SensorContributions) -> [(&'static str, f64); 3] {
    let total = contributions.video + contributions.audio + contributions.iot;
    let share = |value: f64| {
        if total > 0.0 {
            value / total * 100.0
        } else {
            0.0
        }
    };

    [
        ("Video", share(contributions.video)),
        ("Audio", share(contributions.audio)),
        ("IoT Sensors", share(contributions.iot)),
    ]
}

/// Breakdown of how much each sensor class contributes to the stress index.
#[component]
pub fn SensorDistribution() -> Element {
    let index = use_stress_index();
    let shares = distribution_shares(&index().sensor_contributions);

    rsx! {
        div {
            class: "sensor-distribution",
            style: "background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb;",
            div { style: "font-weight: 600; margin-bottom: 0.75rem;", "Sensor Contribution" }
            div {
                style: "display: flex; flex-direction: column; gap: 0.625rem;",
                for (label, percent) in shares {
                    ShareBar { label, percent }
                }
            }
        }
    }
}

#[component]
fn ShareBar(label: &'static str, percent: f64) -> Element {
    let width = percent.clamp(0.0, 100.0);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem; font-size: 0.8125rem;",
            span { style: "width: 6rem; color: #9ca3af;", "{label}" }
            div {
                style: "flex: 1; background: #374151; border-radius: 3px; height: 8px;",
                div {
                    style: "width: {width}%; background: #8b5cf6; border-radius: 3px; height: 8px;",
                }
            }
            span { style: "width: 2.5rem; text-align: right;", "{percent:.0}%" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_are_percent_of_total() {
        let shares = distribution_shares(&SensorContributions {
            video: 0.45,
            audio: 0.30,
            iot: 0.25,
        });

        assert_eq!(shares[0].0, "Video");
        assert!((shares[0].1 - 45.0).abs() < 1e-9);
        assert!((shares[1].1 - 30.0).abs() < 1e-9);
        assert!((shares[2].1 - 25.0).abs() < 1e-9);
        let total: f64 = shares.iter().map(|(_, pct)| pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_contributions_yield_zero_shares() {
        let shares = distribution_shares(&SensorContributions {
            video: 0.0,
            audio: 0.0,
            iot: 0.0,
        });
        assert!(shares.iter().all(|(_, pct)| *pct == 0.0));
    }
}
