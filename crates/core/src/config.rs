//! Browser configuration, loaded from an optional `countryscope.toml`.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::source::DEFAULT_ENDPOINT;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "countryscope.toml";

/// Settings for one browser instance. Defaults reproduce the stock app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Resource returning the full country list.
    pub endpoint: String,
    /// Heading shown above the search input (also the window title).
    pub title: String,
    /// Placeholder text of the search input.
    pub placeholder: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: "Country Search App".to_string(),
            placeholder: "Search for countries...".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parse a config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `countryscope.toml` from `dir` if it exists, otherwise defaults.
    /// A broken file is logged and ignored so the browser still starts.
    pub fn discover(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                debug!(path = %path.display(), endpoint = %config.endpoint, "Loaded config");
                config
            }
            Err(e) => {
                warn!(error = %e, "Ignoring config file");
                Self::default()
            }
        }
    }
}
