//! Release response model and the fetch → parse → render flow run on page load.

use crate::error::ReleaseError;
use crate::fetch::{self, FetchOptions};
use crate::origin::Origin;
use crate::render;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One downloadable release artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    pub download_url: String,
    /// Hex SHA-256 of the artifact.
    pub sha: String,
    pub release_date: String,
}

/// Body of `GET /api/mirrorlist/{version}/json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseResponse {
    /// Version segment echoed by the server; older servers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Required; server order is preserved.
    pub mirrors: Vec<Mirror>,
}

impl ReleaseResponse {
    pub fn new(version: impl Into<String>, mirrors: Vec<Mirror>) -> Self {
        Self {
            version: Some(version.into()),
            mirrors,
        }
    }

    /// Parses a response body. Missing `mirrors` or a missing mirror field is a parse error.
    pub fn from_json(body: &[u8]) -> Result<Self, ReleaseError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn is_pending(&self) -> bool {
        self.mirrors.is_empty()
    }
}

/// Server-side data file: `{ "mirrors": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorList {
    pub mirrors: Vec<Mirror>,
}

impl MirrorList {
    /// Reads and parses the data file. Read on every API request, so edits apply without restart.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read(path).with_context(|| format!("failed to read mirrors file {}", path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("failed to parse mirrors JSON {}", path.display()))
    }
}

/// GETs `{origin}/api/mirrorlist/latest/json` and parses it.
pub async fn fetch_release_info(
    origin: &Origin,
    options: &FetchOptions,
) -> Result<ReleaseResponse, ReleaseError> {
    let url = origin.api_url();
    tracing::info!(%url, "fetching release information");
    let fetched = fetch::get_async(url, options.clone()).await?;
    let response = ReleaseResponse::from_json(&fetched.body)?;
    tracing::debug!(
        status = fetched.status,
        mirrors = response.mirrors.len(),
        "release information parsed"
    );
    Ok(response)
}

/// Turns the outcome of a fetch into the HTML written into `#release-message`.
/// Every failure becomes [`render::ERROR_MESSAGE`]; the cause only goes to the log.
pub fn message_for(outcome: &Result<ReleaseResponse, ReleaseError>) -> String {
    match outcome {
        Ok(response) => render::release_message(response),
        Err(err) => {
            tracing::error!(
                error = %err,
                network = err.is_network(),
                "error fetching release information"
            );
            render::ERROR_MESSAGE.to_string()
        }
    }
}

/// The whole load-time flow: one request, one rendered fragment.
pub async fn load_release_message(origin: &Origin, options: &FetchOptions) -> String {
    message_for(&fetch_release_info(origin, options).await)
}
