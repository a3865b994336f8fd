//! Render decisions, independent of any display surface.
//!
//! [`plan`] turns a [`BrowserState`] into a [`ViewPlan`]; the UI only draws
//! what the plan says.

use serde::Serialize;

use crate::config::BrowserConfig;
use crate::state::BrowserState;
use crate::types::CountryRecord;

pub const LOADING_MESSAGE: &str = "Loading countries...";
pub const NO_RESULTS_MESSAGE: &str = "No countries found.";

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Stable identity for list diffing: the record's short code, never its position.
    pub key: String,
    pub name: String,
    pub flag_url: String,
    pub alt: String,
}

impl From<&CountryRecord> for Card {
    fn from(record: &CountryRecord) -> Self {
        Card {
            key: record.identifier.clone(),
            name: record.common_name.clone(),
            flag_url: record.flag_image_url.clone(),
            alt: record.flag_alt(),
        }
    }
}

/// What the result grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum Grid {
    Cards(Vec<Card>),
    NoResults,
    Blank,
}

/// Complete description of one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewPlan {
    pub title: String,
    pub placeholder: String,
    pub query: String,
    pub loading: Option<String>,
    pub error: Option<String>,
    pub grid: Grid,
}

/// Decide what to draw for `state`.
///
/// Cards win whenever the visible subset is non-empty. An empty subset shows
/// nothing while loading or while an error is displayed, and the
/// "No countries found." line otherwise.
pub fn plan(state: &BrowserState, config: &BrowserConfig) -> ViewPlan {
    let visible = state.visible();

    let grid = if !visible.is_empty() {
        Grid::Cards(visible.into_iter().map(Card::from).collect())
    } else if state.is_loading() || state.error_message().is_some() {
        Grid::Blank
    } else {
        Grid::NoResults
    };

    ViewPlan {
        title: config.title.clone(),
        placeholder: config.placeholder.clone(),
        query: state.query().to_string(),
        loading: state.is_loading().then(|| LOADING_MESSAGE.to_string()),
        error: state.error_message().map(str::to_string),
        grid,
    }
}
