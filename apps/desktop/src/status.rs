//! Loading and error lines above the grid.

use dioxus::prelude::*;

#[component]
pub fn StatusLine(
    #[props(!optional)] loading: Option<String>,
    #[props(!optional)] error: Option<String>,
) -> Element {
    rsx! {
        if let Some(message) = loading {
            p { class: "loading", "{message}" }
        }
        if let Some(message) = error {
            p { class: "error", "{message}" }
        }
    }
}
