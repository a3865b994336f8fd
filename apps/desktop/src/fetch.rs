//! The one-shot fetch run when the browser mounts.

use countryscope_core::{BrowserState, CountryRecord, CountrySource, FetchError, RestCountries};
use dioxus::prelude::*;
use tracing::debug;

/// Run a blocking source on tokio's blocking pool so the UI loop stays free.
pub async fn fetch_in_background<S>(source: S) -> Result<Vec<CountryRecord>, FetchError>
where
    S: CountrySource + 'static,
{
    tokio::task::spawn_blocking(move || source.fetch_all())
        .await
        .map_err(|e| FetchError::Worker(e.to_string()))?
}

/// Start the initial fetch once per component lifetime and tear the state
/// down when the component goes away.
pub fn use_initial_fetch(mut browser: Signal<BrowserState>, endpoint: String) {
    use_hook(move || {
        spawn(async move {
            let Some(ticket) = browser.write().begin_fetch() else {
                return;
            };
            let result = fetch_in_background(RestCountries::new(endpoint)).await;
            match browser.try_write() {
                Ok(mut state) => {
                    state.complete_fetch(ticket, result);
                }
                Err(_) => debug!("Browser dropped before fetch finished"),
            }
        })
    });

    use_drop(move || {
        if let Ok(mut state) = browser.try_write() {
            state.teardown();
        }
    });
}
