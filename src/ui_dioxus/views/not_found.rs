use dioxus::prelude::*;

use crate::ui_dioxus::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            style: "text-align: center; padding: 60px;",
            h1 { "Seite nicht gefunden" }
            p { style: "color: #6b7280;", "/{path}" }
            Link { to: Route::Home {}, "Zur Startseite" }
        }
    }
}
