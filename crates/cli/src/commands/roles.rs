//! cloak roles command

use anyhow::Context;
use clap::Args;
use shared::RenderConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RolesCommand {
    /// Path to the render configuration file
    #[arg(short, long)]
    pub config: PathBuf,
}

impl RolesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = RenderConfig::from_file(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        if config.roles.is_empty() {
            println!("No roles configured.");
            return Ok(());
        }

        let mut roles: Vec<_> = config.roles.iter().collect();
        roles.sort();

        println!("Known roles:");
        for (id, name) in roles {
            println!("  {:<20} {}", id, name);
        }

        Ok(())
    }
}
