use dioxus::prelude::*;

use crate::ui_dioxus::components::Shell;
use crate::ui_dioxus::views::*;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/diagnosen")]
        Diagnoses {},

        #[route("/frageboegen")]
        Questionnaires {},

        #[route("/patienten")]
        Patients {},

        #[route("/faq")]
        Faq {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
