//! Root application component — title, search input, status line, result grid.

use countryscope_core::{plan, ViewPlan};
use dioxus::prelude::*;

use crate::fetch::use_initial_fetch;
use crate::grid::CountryGrid;
use crate::search::SearchInput;
use crate::state::{initial_config, use_browser_provider};
use crate::status::StatusLine;

#[component]
pub fn App() -> Element {
    let config = use_hook(initial_config);
    let browser = use_browser_provider();
    use_initial_fetch(browser, config.endpoint.clone());

    let ViewPlan {
        title,
        placeholder,
        query,
        loading,
        error,
        grid,
    } = plan(&browser.read(), &config);

    rsx! {
        div {
            class: "app",
            h1 { class: "header", "{title}" }
            SearchInput { query, placeholder }
            StatusLine { loading, error }
            CountryGrid { grid }
        }
    }
}
