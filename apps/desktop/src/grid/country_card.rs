use countryscope_core::Card;
use dioxus::prelude::*;

#[component]
pub fn CountryCard(card: Card) -> Element {
    let Card { name, flag_url, alt, .. } = card;

    rsx! {
        div {
            class: "countryCard",
            img {
                class: "flag",
                src: "{flag_url}",
                alt: "{alt}",
            }
            p { class: "countryName", "{name}" }
        }
    }
}
