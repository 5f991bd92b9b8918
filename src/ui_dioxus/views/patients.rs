use dioxus::prelude::*;

use crate::domain::{PatientId, PatientRecord};
use crate::services::PatientExplorer;
use crate::ui_dioxus::components::SpiderDiagram;
use crate::ui_dioxus::state::ApiHandle;

#[component]
pub fn Patients() -> Element {
    let api = use_context::<ApiHandle>();
    let mut explorer = use_signal(PatientExplorer::new);

    // Load patient scores on mount
    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            let result = api.client().patient_scores().await;
            explorer.write().apply_fetch(result);
        });
    });

    let loaded = explorer.read().is_loaded();
    let ids: Vec<PatientId> = explorer.read().patients().iter().map(|p| p.id).collect();
    let selected_id = explorer.read().selected_id();
    let selected = explorer.read().selected().cloned();

    rsx! {
        div {
            class: "patients-view",

            h1 { "Patienten Explorer" }

            if !loaded {
                p { style: "color: #6b7280;", "Keine Daten geladen." }
            } else if ids.is_empty() {
                p { style: "color: #6b7280;", "Keine Patienten vorhanden." }
            }

            // Id list
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 20px;",
                for id in ids.iter().copied() {
                    button {
                        key: "{id}",
                        class: if selected_id == Some(id) { "patient-button active" } else { "patient-button" },
                        onclick: move |_| explorer.write().select(id),
                        "{id}"
                    }
                }
            }

            if let Some(patient) = selected {
                PatientDetail { patient: patient }
            }
        }
    }
}

#[component]
fn PatientDetail(patient: PatientRecord) -> Element {
    let scores_json = serde_json::to_string_pretty(&patient.scores).unwrap_or_default();
    let diagnoses = patient.diagnoses.join(", ");

    rsx! {
        div {
            style: "border: 1px solid black; padding: 10px;",

            h2 { "Patient {patient.id}" }

            if !diagnoses.is_empty() {
                p { strong { "Diagnosen: " } "{diagnoses}" }
            }

            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: flex-start;",

                SpiderDiagram {
                    title: format!("Hitop Scores for Patient {}", patient.id),
                    scores: patient.scores.clone(),
                }

                pre { "{scores_json}" }
            }
        }
    }
}
