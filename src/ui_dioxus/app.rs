use dioxus::prelude::*;

use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::ApiHandle;

#[component]
pub fn App() -> Element {
    // Provide the backend client to all pages
    use_context_provider(ApiHandle::from_env);

    rsx! {
        Router::<Route> {}
    }
}
