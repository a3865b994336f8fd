//! CountryScope core — the country record set, how it is fetched and
//! filtered, and what the browser view draws from it.
//!
//! Nothing in here knows about a UI toolkit; `countryscope-desktop` wraps
//! [`state::BrowserState`] in Dioxus signals and renders [`view::ViewPlan`].

pub mod config;
pub mod error;
pub mod filter;
pub mod source;
pub mod state;
pub mod types;
pub mod view;

pub use config::BrowserConfig;
pub use error::{ConfigError, FetchError, FETCH_FAILED_MESSAGE};
pub use filter::filter_countries;
pub use source::{parse_countries, CountrySource, RestCountries, DEFAULT_ENDPOINT};
pub use state::{BrowserState, FetchTicket};
pub use types::CountryRecord;
pub use view::{plan, Card, Grid, ViewPlan};
