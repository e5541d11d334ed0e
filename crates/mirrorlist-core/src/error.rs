//! Error kinds of the release-info flow.
//!
//! The page collapses every variant into one user-visible message, but callers
//! and tests can still tell a transport problem from a bad body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    /// Origin or API URL could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Origin parsed but has no host (e.g. `file:///`).
    #[error("origin {0} has no host")]
    NoHost(String),

    /// Curl reported an error (connection refused, DNS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),

    /// Response status was not 2xx.
    #[error("HTTP {0}")]
    Http(u32),

    /// Body is not JSON, or lacks `mirrors` / a required mirror field.
    #[error("invalid release response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The blocking transfer task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ReleaseError {
    /// True for failures that happened before a body was parsed.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ReleaseError::Transport(_) | ReleaseError::Http(_) | ReleaseError::Join(_)
        )
    }
}

/// Errors from writing into the page's DOM model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("element #{0} does not exist")]
    MissingElement(String),
}
