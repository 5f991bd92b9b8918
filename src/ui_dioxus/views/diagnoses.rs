use dioxus::prelude::*;

use crate::domain::{summarize_diagnoses, DiagnosisSummary};
use crate::services::PatientExplorer;
use crate::ui_dioxus::components::SpiderDiagram;
use crate::ui_dioxus::state::ApiHandle;

#[component]
pub fn Diagnoses() -> Element {
    let api = use_context::<ApiHandle>();
    let mut explorer = use_signal(PatientExplorer::new);
    let mut selected_label = use_signal(|| None::<String>);

    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            let result = api.client().patient_scores().await;
            explorer.write().apply_fetch(result);
        });
    });

    let loaded = explorer.read().is_loaded();
    let summaries = summarize_diagnoses(explorer.read().patients());
    let selected = selected_label
        .read()
        .as_ref()
        .and_then(|label| summaries.iter().find(|s| &s.label == label).cloned());
    let selected_name = selected.as_ref().map(|s| s.label.clone());

    rsx! {
        div {
            class: "diagnoses-view",

            h1 { "Diagnosen" }

            if !loaded {
                p { style: "color: #6b7280;", "Keine Daten geladen." }
            } else if summaries.is_empty() {
                p { style: "color: #6b7280;", "Für die geladenen Patienten sind keine Diagnosen hinterlegt." }
            }

            table {
                style: "border-collapse: collapse; margin-bottom: 24px;",
                for summary in summaries.iter() {
                    DiagnosisRow {
                        key: "{summary.label}",
                        summary: summary.clone(),
                        selected: selected_name.as_deref() == Some(summary.label.as_str()),
                        on_select: move |label: String| selected_label.set(Some(label)),
                    }
                }
            }

            if let Some(summary) = selected {
                SpiderDiagram {
                    title: format!("Mittleres HiTOP-Profil: {} (n = {})", summary.label, summary.patient_count()),
                    scores: summary.mean_scores.clone(),
                }
            }
        }
    }
}

#[component]
fn DiagnosisRow(summary: DiagnosisSummary, selected: bool, on_select: EventHandler<String>) -> Element {
    let ids = summary
        .patient_ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let label = summary.label.clone();

    rsx! {
        tr {
            style: if selected { "background: #f0f9ff; cursor: pointer;" } else { "cursor: pointer;" },
            onclick: move |_| on_select.call(label.clone()),

            td { style: "padding: 4px 12px; font-weight: 600;", "{summary.label}" }
            td { style: "padding: 4px 12px;", "{summary.patient_count()} Patienten" }
            td { style: "padding: 4px 12px; color: #6b7280;", "{ids}" }
        }
    }
}
