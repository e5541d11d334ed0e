use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Mirror-list server settings (`[server]` section of config.toml).
/// Any field left out keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// JSON file holding `{ "mirrors": [...] }`, read on every API request.
    pub data_file: PathBuf,
    /// Root of static assets (css, js, images).
    pub static_dir: PathBuf,
    /// Title shown in the page and intro heading.
    pub title: String,
    /// Script URL the page loads the particle library from.
    pub particles_src: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_file: PathBuf::from("data/mirrors.json"),
            static_dir: PathBuf::from("static"),
            title: crate::page::DEFAULT_TITLE.to_string(),
            particles_src: crate::particles::LIBRARY_SRC.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/mirrorlist/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorlistConfig {
    /// Origin the client commands fetch from.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Optional overall timeout for the release request (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_origin() -> String {
    "http://localhost:8080".to_string()
}

impl Default for MirrorlistConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            timeout_secs: None,
            server: ServerConfig::default(),
        }
    }
}

impl MirrorlistConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mirrorlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorlistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorlistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MirrorlistConfig = toml::from_str(&data)?;
    Ok(cfg)
}
