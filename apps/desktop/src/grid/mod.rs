//! Result grid — one card per visible country, or the empty-state line.

mod country_card;

use countryscope_core::view::NO_RESULTS_MESSAGE;
use countryscope_core::Grid;
use dioxus::prelude::*;

use country_card::CountryCard;

#[component]
pub fn CountryGrid(grid: Grid) -> Element {
    let body = match grid {
        Grid::Cards(cards) => rsx! {
            {cards.into_iter().map(|card| {
                let key = card.key.clone();
                rsx! { CountryCard { key: "{key}", card } }
            })}
        },
        Grid::NoResults => rsx! {
            p { class: "noResults", "{NO_RESULTS_MESSAGE}" }
        },
        Grid::Blank => rsx! {},
    };

    rsx! {
        div {
            class: "countryGrid",
            {body}
        }
    }
}
