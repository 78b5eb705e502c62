use dioxus::prelude::*;

use ui::use_resolved_incidents;

/// AI reporting page: runs the analysis endpoint over the resolved-incident
/// history and renders the structured result.
#[component]
pub fn Reports() -> Element {
    let incidents = use_resolved_incidents();
    let mut report = use_signal(|| None::<serde_json::Value>);
    let mut running = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let run_analysis = move |_| async move {
        running.set(true);
        error.set(None);
        let payload = serde_json::to_value(incidents()).unwrap_or_default();
        match api::analyze_with_ai("incidents".to_string(), payload).await {
            Ok(result) => report.set(Some(result)),
            Err(e) => error.set(Some(e.to_string())),
        }
        running.set(false);
    };

    rsx! {
        section {
            h2 { class: "section-title", "Reports" }

            button {
                class: "primary-btn",
                disabled: running(),
                onclick: run_analysis,
                if running() { "Analyzing..." } else { "Generate AI Report" }
            }

            if let Some(err) = error() {
                p { class: "form-error", "Analysis failed: {err}" }
            }

            if let Some(result) = report() {
                ReportCard { result }
            }
        }
    }
}

#[component]
fn ReportCard(result: serde_json::Value) -> Element {
    let summary = result["summary"].as_str().unwrap_or("").to_string();
    let risk = result["riskLevel"].as_str().unwrap_or("unknown").to_string();
    let generated_at = result["generatedAt"].as_str().unwrap_or("").to_string();
    let recommendations: Vec<String> = result["recommendations"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            class: "report-card",
            style: "margin-top: 1rem; background: #1f2937; border-radius: 8px; padding: 1rem; color: #e5e7eb;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                span { style: "font-weight: 600;", "Risk level: {risk}" }
                span { style: "font-size: 0.75rem; color: #9ca3af;", "{generated_at}" }
            }
            p { style: "margin: 0.75rem 0;", "{summary}" }
            ul {
                style: "margin: 0; padding-left: 1.25rem;",
                for recommendation in recommendations {
                    li { "{recommendation}" }
                }
            }
        }
    }
}
