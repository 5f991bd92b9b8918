use dioxus::prelude::*;

use crate::domain::{QuestionnaireDetail, QuestionnaireSummary};
use crate::services::{BrowserView, QuestionnaireBrowser};
use crate::ui_dioxus::state::ApiHandle;

#[component]
pub fn Questionnaires() -> Element {
    let api = use_context::<ApiHandle>();
    let mut browser = use_signal(QuestionnaireBrowser::new);

    // Load questionnaire names on mount
    use_effect({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                let result = api.client().questionnaire_names().await;
                browser.write().apply_names(result);
            });
        }
    });

    let view = browser.read().view().clone();
    let names = browser.read().names().to_vec();

    rsx! {
        div {
            class: "questionnaires-view",

            match view {
                BrowserView::List => rsx! {
                    QuestionnaireList {
                        names: names,
                        on_open: move |name: String| open_questionnaire(browser, api.clone(), name),
                    }
                },
                BrowserView::Detail { name, detail } => rsx! {
                    QuestionnaireDetailView {
                        name: name,
                        detail: detail,
                        on_back: move |_| browser.write().back(),
                    }
                },
            }
        }
    }
}

/// [`QuestionnaireBrowser::select`] with the signal released while the
/// request is in flight.
fn open_questionnaire(mut browser: Signal<QuestionnaireBrowser>, api: ApiHandle, name: String) {
    let request = browser.write().open(&name);
    spawn(async move {
        let response = request.send(api.client()).await;
        browser.write().apply_response(response);
    });
}

#[component]
fn QuestionnaireList(names: Vec<QuestionnaireSummary>, on_open: EventHandler<String>) -> Element {
    rsx! {
        h1 { "Fragebögen" }

        if names.is_empty() {
            p { style: "color: #6b7280;", "Keine Fragebögen geladen." }
        }

        ul {
            for summary in names.iter() {
                QuestionnaireEntry {
                    key: "{summary.name}",
                    name: summary.name.clone(),
                    on_open: on_open,
                }
            }
        }
    }
}

#[component]
fn QuestionnaireEntry(name: String, on_open: EventHandler<String>) -> Element {
    let label = name.clone();

    rsx! {
        li {
            button {
                style: "background: none; border: none; padding: 4px 0; color: #2563eb; cursor: pointer; text-align: left;",
                onclick: move |_| on_open.call(name.clone()),
                "{label}"
            }
        }
    }
}

#[component]
fn QuestionnaireDetailView(
    name: String,
    detail: Option<QuestionnaireDetail>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            button {
                style: "margin-bottom: 16px;",
                onclick: move |_| on_back.call(()),
                "← Zurück"
            }

            h1 { "{name}" }

            match detail {
                None => rsx! {
                    p { style: "color: #6b7280;", "Lade Fragebogen..." }
                },
                Some(detail) => rsx! {
                    QuestionnaireTable { detail: detail }
                },
            }
        }
    }
}

#[component]
fn QuestionnaireTable(detail: QuestionnaireDetail) -> Element {
    let rows: Vec<Vec<String>> = detail
        .rows
        .iter()
        .map(|row| {
            detail
                .cells(row)
                .map(|cell| cell.map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    rsx! {
        h2 { "Spalten ({detail.columns.len()})" }
        ul {
            style: "columns: 3; margin-bottom: 24px;",
            for column in detail.columns.iter() {
                li { key: "{column}", "{column}" }
            }
        }

        h2 { "Antworten ({rows.len()})" }
        div {
            style: "overflow-x: auto;",
            table {
                style: "border-collapse: collapse; font-size: 0.85rem;",
                thead {
                    tr {
                        for column in detail.columns.iter() {
                            th {
                                style: "border: 1px solid #e5e7eb; padding: 4px 8px; text-align: left;",
                                "{column}"
                            }
                        }
                    }
                }
                tbody {
                    for (index, cells) in rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            for cell in cells.iter() {
                                td {
                                    style: "border: 1px solid #e5e7eb; padding: 4px 8px;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
