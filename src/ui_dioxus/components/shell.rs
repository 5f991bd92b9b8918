use dioxus::prelude::*;

use super::{Footer, Header};
use crate::ui_dioxus::router::Route;

/// Page frame shared by every route
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-height: 100vh;",

            Header {}

            main {
                style: "flex: 1; width: 100%; max-width: 1200px; margin: 0 auto; padding: 24px; box-sizing: border-box;",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}
