//! CLI for the mirrorlist release page.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mirrorlist_core::config;
use std::net::SocketAddr;
use std::path::PathBuf;

use commands::{
    run_checksum, run_completions, run_fetch, run_page, run_particles, run_serve, ServeOverrides,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mirrorlist")]
#[command(about = "Release page: mirror list API, renderer and checksum tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the latest release list and print the rendered message HTML.
    Fetch {
        /// Page origin to query (defaults to `origin` from config.toml).
        #[arg(long)]
        origin: Option<String>,
    },

    /// Run both page-load handlers and emit the full HTML document.
    Page {
        #[arg(long)]
        origin: Option<String>,
        /// Write the document here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the particle background configuration as JSON.
    Particles,

    /// Serve the mirror-list API, the page and static files.
    Serve {
        /// Listen address, e.g. 0.0.0.0:8080.
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Mirrors JSON data file.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Static asset directory.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file; with --origin, compare it with the latest release.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        #[arg(long)]
        origin: Option<String>,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { origin } => run_fetch(&cfg, origin.as_deref()).await?,
            CliCommand::Page { origin, output } => {
                run_page(&cfg, origin.as_deref(), output.as_deref()).await?
            }
            CliCommand::Particles => run_particles()?,
            CliCommand::Serve {
                bind,
                data,
                static_dir,
            } => {
                let overrides = ServeOverrides {
                    bind,
                    data,
                    static_dir,
                };
                run_serve(&cfg, overrides).await?;
            }
            CliCommand::Checksum { path, origin } => {
                run_checksum(&cfg, &path, origin.as_deref()).await?
            }
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
