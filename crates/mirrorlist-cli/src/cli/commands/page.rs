//! `mirrorlist page` – render the full release page document.

use anyhow::{Context, Result};
use mirrorlist_core::config::MirrorlistConfig;
use mirrorlist_core::page::Page;
use mirrorlist_core::particles::ScriptRenderer;
use std::path::Path;

use super::resolve_origin;

pub async fn run_page(
    cfg: &MirrorlistConfig,
    origin: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let origin = resolve_origin(cfg, origin)?;
    let mut page = Page::new(&cfg.server.title).with_library_src(&cfg.server.particles_src);
    let mut renderer = ScriptRenderer::new();

    page.dom_ready(&mut renderer);
    page.load(&origin, &cfg.fetch_options()).await?;

    let html = page.to_html(renderer.scripts());
    match output {
        Some(path) => {
            std::fs::write(path, &html).with_context(|| format!("write {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => print!("{}", html),
    }
    Ok(())
}
