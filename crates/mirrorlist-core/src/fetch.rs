//! Single HTTP GET of the release JSON.
//!
//! Uses the curl crate (libcurl). No custom headers, no body, no retry. A
//! non-2xx status is an error; the body is returned unparsed.

use crate::error::ReleaseError;
use std::time::Duration;
use url::Url;

/// Transfer knobs. Defaults match a plain browser fetch: no timeout.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Overall transfer timeout; `None` waits as long as the connection lives.
    pub timeout: Option<Duration>,
}

/// Successful (2xx) response.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Performs one GET and returns the body of a 2xx response.
///
/// Follows redirects. Runs in the current thread; use [`get_async`] from async code.
pub fn get(url: &Url, options: &FetchOptions) -> Result<FetchedBody, ReleaseError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    if let Some(timeout) = options.timeout {
        easy.timeout(timeout)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        tracing::debug!(%url, status, "release request returned non-2xx");
        return Err(ReleaseError::Http(status));
    }
    let content_type = easy.content_type()?.map(str::to_string);
    tracing::debug!(%url, status, bytes = body.len(), "release request completed");

    Ok(FetchedBody {
        status,
        content_type,
        body,
    })
}

/// [`get`] on the blocking pool.
pub async fn get_async(url: Url, options: FetchOptions) -> Result<FetchedBody, ReleaseError> {
    tokio::task::spawn_blocking(move || get(&url, &options)).await?
}
