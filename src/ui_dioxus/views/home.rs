use dioxus::prelude::*;

use crate::ui_dioxus::components::MarkdownPage;

const HOME_TEXT: &str = r#"
# MindPulse

MindPulse ist ein interdisziplinäres Semesterprojekt zur explorativen Analyse psychologischer
Fragebogendaten. Die Anwendung ordnet Itemantworten den sechs Spektren der
*Hierarchical Taxonomy of Psychopathology* (HiTOP) zu und stellt individuelle Profile als
Netzdiagramm dar.

- **Patienten**: HiTOP-Profil einzelner Patientinnen und Patienten
- **Diagnosen**: Gruppen von Patienten mit gleicher Diagnose und ihr mittleres Profil
- **Fragebögen**: verfügbare Instrumente und ihre Itemspalten

MindPulse versteht sich nicht als diagnostisches Instrument, sondern als Prototyp für die
Exploration psychologischer Daten.
"#;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "start-hero",
            MarkdownPage { id: "tab-start", source: HOME_TEXT }
        }
    }
}
