//! Test harness for browser scenarios.
//!
//! Drives a `BrowserState` through its fetch lifecycle against a scripted
//! source and renders plans with the default config (no network, no UI).

use countryscope_core::{
    plan, BrowserConfig, BrowserState, Card, CountryRecord, CountrySource, FetchError, Grid,
    ViewPlan,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source that returns a canned outcome and counts how often it was asked.
pub struct MockSource {
    outcome: Outcome,
    calls: AtomicUsize,
}

enum Outcome {
    Records(Vec<CountryRecord>),
    NetworkError,
    MalformedBody(&'static str),
}

impl MockSource {
    pub fn returning(records: Vec<CountryRecord>) -> Self {
        Self::new(Outcome::Records(records))
    }

    pub fn failing() -> Self {
        Self::new(Outcome::NetworkError)
    }

    pub fn malformed(body: &'static str) -> Self {
        Self::new(Outcome::MalformedBody(body))
    }

    fn new(outcome: Outcome) -> Self {
        MockSource {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CountrySource for MockSource {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Records(records) => Ok(records.clone()),
            Outcome::NetworkError => Err(FetchError::Transport {
                endpoint: "mock://countries".into(),
                message: "connection refused".into(),
            }),
            Outcome::MalformedBody(body) => countryscope_core::parse_countries(body),
        }
    }
}

pub struct TestHarness {
    pub state: BrowserState,
    pub config: BrowserConfig,
}

impl TestHarness {
    /// Fresh, not yet mounted browser.
    pub fn new() -> Self {
        TestHarness {
            state: BrowserState::new(),
            config: BrowserConfig::default(),
        }
    }

    /// Browser that has mounted and finished loading from `source`.
    pub fn mounted(source: &MockSource) -> Self {
        let mut h = Self::new();
        assert!(h.state.load(source), "initial load should run");
        h
    }

    pub fn type_query(&mut self, query: &str) -> ViewPlan {
        self.state.set_query(query);
        self.render()
    }

    pub fn render(&self) -> ViewPlan {
        plan(&self.state, &self.config)
    }
}

/// The two-record fixture used across scenarios.
pub fn france_and_germany() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("France", "f.png", "FRA"),
        CountryRecord::new("Germany", "g.png", "DEU"),
    ]
}

/// Cards in the grid, or none when the grid shows a message or nothing.
pub fn cards(plan: &ViewPlan) -> &[Card] {
    match &plan.grid {
        Grid::Cards(cards) => cards,
        _ => &[],
    }
}

pub fn shows_no_results(plan: &ViewPlan) -> bool {
    plan.grid == Grid::NoResults
}

pub fn card_keys(plan: &ViewPlan) -> Vec<&str> {
    cards(plan).iter().map(|c| c.key.as_str()).collect()
}
