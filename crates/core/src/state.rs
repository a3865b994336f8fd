//! Browser state and its fetch lifecycle.
//!
//! `records`, `is_loading` and `error_message` change only through the fetch
//! lifecycle (`begin_fetch` → `complete_fetch`); `query` changes only through
//! `set_query`. The UI wraps this struct in whatever reactive container it
//! uses and redraws after each mutation.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info};

use crate::error::{FetchError, FETCH_FAILED_MESSAGE};
use crate::filter::filter_countries;
use crate::source::CountrySource;
use crate::types::CountryRecord;

/// Proof that a fetch was started on a particular state. Only
/// [`BrowserState::begin_fetch`] hands these out.
#[derive(Debug)]
#[must_use = "a started fetch must be completed"]
pub struct FetchTicket {
    state_id: u64,
}

static NEXT_STATE_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Settled,
    TornDown,
}

/// Everything the browser view is drawn from.
#[derive(Debug)]
pub struct BrowserState {
    id: u64,
    query: String,
    records: Vec<CountryRecord>,
    is_loading: bool,
    error_message: Option<String>,
    phase: Phase,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            id: NEXT_STATE_ID.fetch_add(1, Ordering::Relaxed),
            query: String::new(),
            records: Vec::new(),
            is_loading: false,
            error_message: None,
            phase: Phase::Idle,
        }
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// `None` unless the most recent fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Replace the query. Called on every keystroke.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the current query, in fetch order.
    pub fn visible(&self) -> Vec<&CountryRecord> {
        filter_countries(&self.records, &self.query)
    }

    /// Start the one fetch this state will ever run.
    ///
    /// Returns `None` if a fetch was already started or the state was torn down.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.phase != Phase::Idle {
            debug!(phase = ?self.phase, "Ignoring repeated fetch start");
            return None;
        }
        self.phase = Phase::Loading;
        self.is_loading = true;
        self.error_message = None;
        debug!("Fetch started");
        Some(FetchTicket { state_id: self.id })
    }

    /// Apply the outcome of a fetch started with [`begin_fetch`](Self::begin_fetch).
    ///
    /// On success the record set is replaced wholesale. On failure the records
    /// are left as they were, the fixed user message is set and the detail is
    /// logged. Returns `false` without touching anything when the ticket came
    /// from another state or this state is not loading (torn down included).
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CountryRecord>, FetchError>,
    ) -> bool {
        if ticket.state_id != self.id {
            debug!("Dropping fetch result started on another state");
            return false;
        }
        if self.phase != Phase::Loading {
            debug!(phase = ?self.phase, "Dropping fetch result");
            return false;
        }

        match result {
            Ok(records) => {
                info!(count = records.len(), "Loaded countries");
                self.records = records;
            }
            Err(e) => {
                error!(error = %e, "Error fetching countries");
                self.error_message = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.is_loading = false;
        self.phase = Phase::Settled;
        true
    }

    /// Run the whole lifecycle against `source` on the current thread.
    /// Returns `false` if the fetch had already been started.
    pub fn load(&mut self, source: &dyn CountrySource) -> bool {
        match self.begin_fetch() {
            Some(ticket) => {
                let result = source.fetch_all();
                self.complete_fetch(ticket, result)
            }
            None => false,
        }
    }

    /// Mark the owning view as gone. Later fetch results are discarded.
    pub fn teardown(&mut self) {
        self.phase = Phase::TornDown;
    }
}
