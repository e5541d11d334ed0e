//! `mirrorlist particles` – dump the background configuration.

use anyhow::Result;
use mirrorlist_core::particles::ParticlesConfig;

pub fn run_particles() -> Result<()> {
    println!("{}", ParticlesConfig::background().to_json_pretty()?);
    Ok(())
}
