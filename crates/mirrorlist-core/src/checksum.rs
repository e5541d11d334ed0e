//! SHA-256 of downloaded artifacts, compared against a mirror's published digest.

use crate::release::Mirror;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digests compare case-insensitively; surrounding whitespace in the record is ignored.
pub fn digest_matches(actual: &str, expected: &str) -> bool {
    actual.trim().eq_ignore_ascii_case(expected.trim())
}

/// First published mirror whose digest equals `digest`.
pub fn find_match<'a>(digest: &str, mirrors: &'a [Mirror]) -> Option<&'a Mirror> {
    let found = mirrors.iter().find(|m| digest_matches(digest, &m.sha));
    tracing::debug!(%digest, candidates = mirrors.len(), matched = found.is_some(), "checksum verify");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HELLO_SHA: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

    fn mirror_with(sha: &str) -> Mirror {
        Mirror {
            download_url: "https://example.com/r.zip".to_string(),
            sha: sha.to_string(),
            release_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn sha256_path_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            sha256_path(f.path()).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn uppercase_published_digest_matches() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        let digest = sha256_path(f.path()).unwrap();
        assert_eq!(digest, HELLO_SHA);
        let mirrors = vec![
            mirror_with("00ff"),
            mirror_with(&format!(" {} ", HELLO_SHA.to_uppercase())),
        ];
        let found = find_match(&digest, &mirrors).unwrap();
        assert!(found.sha.contains(&HELLO_SHA.to_uppercase()));
    }

    #[test]
    fn other_content_matches_no_mirror() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world\n").unwrap();
        f.flush().unwrap();
        let digest = sha256_path(f.path()).unwrap();
        assert!(find_match(&digest, &[mirror_with(HELLO_SHA)]).is_none());
        assert!(find_match(&digest, &[]).is_none());
    }

    #[test]
    fn sha256_path_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = sha256_path(&dir.path().join("nope.bin")).unwrap_err();
        assert!(format!("{:#}", err).contains("open"));
    }
}
