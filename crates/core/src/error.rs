//! Error types for CountryScope.
//!
//! Every fetch problem is a [`FetchError`]. The variants exist so the log line
//! says what went wrong; the user only ever sees [`FETCH_FAILED_MESSAGE`].

use std::path::PathBuf;
use thiserror::Error;

/// The one message shown to the user when a fetch fails, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch countries. Please try again later.";

/// Failure while retrieving the country record set.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        endpoint: String,
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("request to {endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read response body from {endpoint}: {message}")]
    Body {
        endpoint: String,
        message: String,
    },

    /// The body was not a list of country objects.
    #[error("malformed country list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The background worker running the request died.
    #[error("fetch worker failed: {0}")]
    Worker(String),
}

/// Failure while loading a `countryscope.toml` file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
