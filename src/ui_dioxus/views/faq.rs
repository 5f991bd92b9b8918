use dioxus::prelude::*;

use crate::ui_dioxus::components::MarkdownPage;

const FAQ_TEXT: &str = r#"
# FAQ

### Was zeigt das Netzdiagramm?

Jede Achse steht für eines der sechs HiTOP-Spektren: Somatoform, Internalizing,
Thought Disorder, Detachment, Disinhibited Externalizing und Antagonistic Externalizing.
Die Werte liegen üblicherweise zwischen 0 und 1. Fehlende Werte werden im Mittelpunkt gezeichnet.

### Woher stammen die Daten?

Alle Daten kommen vom MindPulse-Backend. Die Oberfläche liest nur und verändert nichts.

### Warum sehe ich keine Daten?

Ist das Backend nicht erreichbar, bleibt die Ansicht leer. Die Adresse des Backends wird über
die Umgebungsvariable `MINDPULSE_BACKEND_URL` festgelegt (Standard: `http://localhost:5000`).

### Ist MindPulse ein Diagnoseinstrument?

Nein. Die Anwendung dient ausschließlich der explorativen Analyse.
"#;

#[component]
pub fn Faq() -> Element {
    rsx! {
        MarkdownPage { id: "tab-faq", source: FAQ_TEXT }
    }
}
