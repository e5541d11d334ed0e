//! `mirrorlist checksum <path> [--origin URL]`.

use anyhow::Result;
use mirrorlist_core::checksum;
use mirrorlist_core::config::MirrorlistConfig;
use mirrorlist_core::release;
use std::path::Path;

use super::resolve_origin;

/// Print SHA-256 of the file; with an origin, also report which published mirror it matches.
pub async fn run_checksum(cfg: &MirrorlistConfig, path: &Path, origin: Option<&str>) -> Result<()> {
    let digest = tokio::task::spawn_blocking({
        let path = path.to_path_buf();
        move || checksum::sha256_path(&path)
    })
    .await??;
    println!("{}  {}", digest, path.display());

    let Some(origin) = origin else {
        return Ok(());
    };
    let origin = resolve_origin(cfg, Some(origin))?;
    let response = release::fetch_release_info(&origin, &cfg.fetch_options()).await?;
    match checksum::find_match(&digest, &response.mirrors) {
        Some(mirror) => println!(
            "OK: matches release of {} ({})",
            mirror.release_date, mirror.download_url
        ),
        None => anyhow::bail!(
            "checksum mismatch: {} matches none of {} published mirrors",
            path.display(),
            response.mirrors.len()
        ),
    }
    Ok(())
}
