//! `mirrorlist serve` – run the mirror-list server until Ctrl-C.

use anyhow::Result;
use mirrorlist_core::config::{MirrorlistConfig, ServerConfig};
use mirrorlist_core::server::MirrorlistServer;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command-line values that take precedence over `[server]` in config.toml.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub bind: Option<SocketAddr>,
    pub data: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

pub(crate) fn server_config(cfg: &MirrorlistConfig, overrides: ServeOverrides) -> ServerConfig {
    let mut server = cfg.server.clone();
    if let Some(bind) = overrides.bind {
        server.bind = bind;
    }
    if let Some(data) = overrides.data {
        server.data_file = data;
    }
    if let Some(static_dir) = overrides.static_dir {
        server.static_dir = static_dir;
    }
    server
}

pub async fn run_serve(cfg: &MirrorlistConfig, overrides: ServeOverrides) -> Result<()> {
    let server = MirrorlistServer::bind(server_config(cfg, overrides)).await?;
    println!("Starting server on {}", server.local_addr()?);
    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "ctrl-c handler unavailable");
                std::future::pending::<()>().await;
            }
        })
        .await
}
