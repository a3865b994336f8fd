//! Browser state wiring for the component tree.
//!
//! The root component owns one `Signal<BrowserState>` and shares it through
//! context. Writing to the signal is the redraw trigger.

use countryscope_core::{BrowserConfig, BrowserState};
use dioxus::prelude::*;

use crate::INITIAL_CONFIG;

/// Create the browser state for this component and share it with descendants.
pub fn use_browser_provider() -> Signal<BrowserState> {
    use_context_provider(|| Signal::new(BrowserState::new()))
}

/// The browser state provided by an ancestor.
pub fn use_browser() -> Signal<BrowserState> {
    use_context::<Signal<BrowserState>>()
}

/// Config stored by `main` before launch; defaults if none was stored.
pub fn initial_config() -> BrowserConfig {
    INITIAL_CONFIG
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}
