//! CountryScope Desktop — Dioxus-powered country browser.

use std::sync::Mutex;

use countryscope_core::BrowserConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

mod app;
mod fetch;
mod grid;
mod search;
mod state;
mod status;

use app::App;

/// Pre-runtime storage — loaded before Dioxus launches, read on first render.
pub static INITIAL_CONFIG: Mutex<Option<BrowserConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("countryscope=info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::current_dir() {
        Ok(cwd) => BrowserConfig::discover(&cwd),
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine current directory, using defaults");
            BrowserConfig::default()
        }
    };
    let title = config.title.clone();
    *INITIAL_CONFIG.lock().unwrap_or_else(|e| e.into_inner()) = Some(config);

    LaunchBuilder::new()
        .with_cfg(
            Config::default()
                .with_menu(None)
                .with_disable_context_menu(true)
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1100.0, 800.0))
                        .with_min_inner_size(LogicalSize::new(480.0, 400.0))
                        .with_resizable(true),
                ),
        )
        .launch(App);
}
