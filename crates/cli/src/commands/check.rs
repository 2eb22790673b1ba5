//! cloak check command

use anyhow::Context;
use clap::Args;
use cloak_core::{CoreConfig, RenderCore};
use shared::{ConsoleLogger, Logger, NullLogger, RenderConfig, UserContext};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Path to the render configuration file
    #[arg(short, long)]
    pub config: PathBuf,

    /// Roles granted to the user (comma-separated)
    #[arg(short, long)]
    pub roles: Option<String>,

    /// Evaluate as an anonymous visitor
    #[arg(long)]
    pub anonymous: bool,

    /// Grant the restriction-bypass capability
    #[arg(long)]
    pub bypass: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = RenderConfig::from_file(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        let logger: Arc<dyn Logger> = if self.json {
            Arc::new(NullLogger)
        } else {
            Arc::new(ConsoleLogger)
        };
        let mut core = RenderCore::new(logger, CoreConfig::default());
        core.load_config(&config)?;

        let user = self.build_user();
        for role in &user.roles {
            if let Err(err) = core.catalog().require_role(role) {
                tracing::warn!("{}", err);
            }
        }
        tracing::debug!(
            authenticated = user.authenticated,
            roles = ?user.roles,
            "evaluating render pass"
        );
        core.render_pass(&user);

        let mut widgets: Vec<_> = core
            .manager()
            .get_all_widgets()
            .into_iter()
            .cloned()
            .collect();
        widgets.sort_by(|a, b| a.placement_id.cmp(&b.placement_id));

        if self.json {
            let out: Vec<serde_json::Value> = widgets
                .iter()
                .map(|w| {
                    serde_json::json!({
                        "placementId": w.placement_id,
                        "visible": w.visible,
                        "reason": w.visibility_reason,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            for w in &widgets {
                let mark = if w.visible { "show" } else { "hide" };
                println!(
                    "{}  {:<32} {}",
                    mark,
                    w.placement_id,
                    w.visibility_reason.as_deref().unwrap_or("")
                );
            }
        }

        Ok(())
    }

    fn build_user(&self) -> UserContext {
        if self.anonymous {
            return UserContext::anonymous();
        }

        let roles: Vec<String> = self
            .roles
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let user = UserContext::logged_in(roles);
        if self.bypass {
            user.with_bypass()
        } else {
            user
        }
    }
}
