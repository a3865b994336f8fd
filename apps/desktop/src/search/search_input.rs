//! Text input that rewrites the query on every keystroke.

use dioxus::prelude::*;

use crate::state::use_browser;

#[component]
pub fn SearchInput(query: String, placeholder: String) -> Element {
    let mut browser = use_browser();

    rsx! {
        input {
            class: "searchInput",
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{query}",
            autofocus: true,
            oninput: move |e: Event<FormData>| {
                browser.write().set_query(e.value());
            },
        }
    }
}
