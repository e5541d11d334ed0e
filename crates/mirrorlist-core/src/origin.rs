//! Page origin (scheme + host + port) and the API URLs derived from it.

use crate::error::ReleaseError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Version segment the page asks for.
pub const LATEST: &str = "latest";

/// Scheme and authority of the page; path, query and fragment are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    base: Url,
}

impl Origin {
    /// Parses an origin from any absolute URL, e.g. the page location
    /// `https://example.com/index.html?x=1` → `https://example.com`.
    pub fn parse(input: &str) -> Result<Self, ReleaseError> {
        let url = Url::parse(input.trim()).map_err(|source| ReleaseError::InvalidUrl {
            url: input.to_string(),
            source,
        })?;
        if url.host_str().is_none() {
            return Err(ReleaseError::NoHost(input.to_string()));
        }
        let serialized = url.origin().ascii_serialization();
        let base = Url::parse(&serialized).map_err(|source| ReleaseError::InvalidUrl {
            url: serialized.clone(),
            source,
        })?;
        Ok(Self { base })
    }

    /// `{origin}/api/mirrorlist/latest/json`.
    pub fn api_url(&self) -> Url {
        self.api_url_for(LATEST)
    }

    /// `{origin}/api/mirrorlist/{version}/json`; `version` is percent-encoded as one segment.
    pub fn api_url_for(&self, version: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .clear()
                .extend(["api", "mirrorlist", version, "json"]);
        }
        url
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base.origin().ascii_serialization())
    }
}

impl FromStr for Origin {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Origin::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_drops_path_query_and_fragment() {
        let o = Origin::parse("https://example.com/downloads/index.html?a=1#top").unwrap();
        assert_eq!(o.to_string(), "https://example.com");
    }

    #[test]
    fn origin_keeps_non_default_port() {
        let o = Origin::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(o.to_string(), "http://127.0.0.1:8080");
        assert_eq!(
            o.api_url().as_str(),
            "http://127.0.0.1:8080/api/mirrorlist/latest/json"
        );
    }

    #[test]
    fn api_url_is_exact() {
        let o = Origin::parse("https://renegade-x.com").unwrap();
        assert_eq!(
            o.api_url().as_str(),
            "https://renegade-x.com/api/mirrorlist/latest/json"
        );
    }

    #[test]
    fn api_url_for_encodes_version_segment() {
        let o = Origin::parse("https://example.com").unwrap();
        assert_eq!(
            o.api_url_for("5.0/beta").as_str(),
            "https://example.com/api/mirrorlist/5.0%2Fbeta/json"
        );
    }

    #[test]
    fn origin_rejects_relative_and_hostless() {
        assert!(matches!(
            Origin::parse("/api/mirrorlist"),
            Err(ReleaseError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Origin::parse("file:///tmp/index.html"),
            Err(ReleaseError::NoHost(_))
        ));
    }
}
