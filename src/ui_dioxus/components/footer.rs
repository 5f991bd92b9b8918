use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            div {
                class: "start-footer-grid",
                style: "display: flex; gap: 2rem; justify-content: space-between; padding: 24px; border-top: 1px solid #e5e7eb; font-size: 0.9rem;",

                div {
                    class: "footer-col",
                    strong { "MindPulse" }
                    br {}
                    "Explorative Analyse psychologischer Fragebogendaten"
                }

                div {
                    class: "footer-col",
                    strong { "Projektteam" }
                    br {}
                    "Informatik · Angewandte Psychologie"
                }

                div {
                    class: "footer-col",
                    strong { "Hinweis" }
                    br {}
                    "Kein diagnostisches Instrument"
                }
            }
        }
    }
}
