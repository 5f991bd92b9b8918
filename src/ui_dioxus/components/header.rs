use dioxus::prelude::*;

use crate::ui_dioxus::router::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            h1 { "HiTop Classification Models" }

            nav {
                style: "display: flex; gap: 1rem; border-bottom: 1px solid black; padding-bottom: 1rem; margin-bottom: 1rem;",

                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Diagnoses {}, "Diagnosen" }
                Link { to: Route::Questionnaires {}, "Fragebögen" }
                Link { to: Route::Patients {}, "Patienten" }
                Link { to: Route::Faq {}, "FAQ" }
            }
        }
    }
}
