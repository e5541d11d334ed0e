//! `mirrorlist fetch` – what the page would show in `#release-message`.

use anyhow::Result;
use mirrorlist_core::config::MirrorlistConfig;
use mirrorlist_core::release;

use super::resolve_origin;

pub async fn run_fetch(cfg: &MirrorlistConfig, origin: Option<&str>) -> Result<()> {
    let origin = resolve_origin(cfg, origin)?;
    let html = release::load_release_message(&origin, &cfg.fetch_options()).await;
    println!("{}", html);
    Ok(())
}
