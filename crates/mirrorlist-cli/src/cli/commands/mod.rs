//! CLI command handlers, one per file.

mod checksum;
mod completions;
mod fetch;
mod page;
mod particles;
mod serve;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use fetch::run_fetch;
pub use page::run_page;
pub use particles::run_particles;
pub use serve::{run_serve, ServeOverrides};

use anyhow::Result;
use mirrorlist_core::config::MirrorlistConfig;
use mirrorlist_core::origin::Origin;

/// `--origin` if given, otherwise the configured one.
pub(crate) fn resolve_origin(cfg: &MirrorlistConfig, flag: Option<&str>) -> Result<Origin> {
    let raw = flag.unwrap_or(&cfg.origin);
    Ok(Origin::parse(raw)?)
}
