//! cloak widgets command

use anyhow::Context;
use clap::Args;
use cloak_core::{CoreConfig, RenderCore};
use shared::{NullLogger, RenderConfig};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct WidgetsCommand {
    /// Path to the render configuration file
    #[arg(short, long)]
    pub config: PathBuf,
}

impl WidgetsCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = RenderConfig::from_file(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        let mut core = RenderCore::new(Arc::new(NullLogger), CoreConfig::default());
        core.load_config(&config)?;

        let mut widgets: Vec<_> = core.manager().get_all_widgets();
        widgets.sort_by(|a, b| a.placement_id.cmp(&b.placement_id));

        if widgets.is_empty() {
            println!("No widgets configured.");
            return Ok(());
        }

        println!("Widget placements:");
        for widget in widgets {
            let restriction = match core.manager().allow_list(&widget.placement_id) {
                Some(list) if !list.is_unrestricted() => {
                    let roles: Vec<&str> = list.roles().collect();
                    format!("restricted to: {}", roles.join(", "))
                }
                _ => "unrestricted".to_string(),
            };
            println!("  {:<32} {}", widget.placement_id, restriction);
        }

        Ok(())
    }
}
