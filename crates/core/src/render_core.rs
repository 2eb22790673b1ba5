//! RenderCore - Central integration layer

use audit::DecisionLog;
use shared::{
    CloakError, Logger, RenderConfig, Result, RoleCatalog, RoleDefinition, UserContext, Widget,
    WidgetInfo,
};
use std::sync::Arc;
use visibility::{RoleAllowList, WidgetVisibilityManager};

/// RenderCore configuration
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Maximum number of retained audit entries
    pub audit_capacity: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            audit_capacity: 10000,
        }
    }
}

/// RenderCore - composes the role catalog, the widget visibility manager,
/// and the decision audit log.
///
/// The rendering layer asks `should_render` (or runs a whole `render_pass`)
/// and suppresses widgets the answer is `false` for. Suppression is expected
/// to happen server-side; a hidden widget must not reach the client at all.
pub struct RenderCore {
    /// Logger
    logger: Arc<dyn Logger>,
    /// Roles known to the host
    catalog: RoleCatalog,
    /// Widget registry and decision logic
    manager: WidgetVisibilityManager,
    /// Decision audit log
    decision_log: DecisionLog,
}

impl RenderCore {
    /// Create a new RenderCore
    pub fn new(logger: Arc<dyn Logger>, config: CoreConfig) -> Self {
        Self {
            logger,
            catalog: RoleCatalog::new(),
            manager: WidgetVisibilityManager::new(),
            decision_log: DecisionLog::new(config.audit_capacity),
        }
    }

    /// Register a visibility override.
    ///
    /// The override chain is the sole supported extension point; configure
    /// it during initialization, before decisions are being served.
    pub fn register_override<F>(&mut self, f: F)
    where
        F: Fn(bool, &UserContext, &RoleAllowList) -> bool + Send + Sync + 'static,
    {
        self.manager.decider_mut().register_override(f);
    }

    /// Load roles and widget placements from a render configuration.
    ///
    /// Each widget's raw role selection is normalized against the catalog
    /// here; unknown identifiers are dropped without error.
    pub fn load_config(&mut self, config: &RenderConfig) -> Result<()> {
        for (id, name) in &config.roles {
            self.catalog
                .register_role(RoleDefinition::new(id.clone(), name.clone()));
        }

        for (widget_id, entry) in &config.widgets {
            let mut widget = Widget::new(widget_id.clone());
            if let Some(title) = &entry.title {
                widget = widget.with_title(title.clone());
            }

            let info = WidgetInfo::new(widget, entry.area.clone());
            let placement_id = info.placement_id.clone();
            let list = RoleAllowList::from_raw_input(&entry.access_roles, &self.catalog);

            self.logger.debug(
                &format!(
                    "Registered widget '{}' ({})",
                    placement_id,
                    if list.is_unrestricted() {
                        "unrestricted".to_string()
                    } else {
                        format!("restricted to {} role(s)", list.len())
                    }
                ),
                None,
            );

            self.manager.register_widget(info);
            self.manager.update_allow_list(&placement_id, list);
        }

        Ok(())
    }

    /// Apply an updated role selection to a registered widget.
    ///
    /// The raw payload is normalized and then replaces the stored allow-list
    /// wholesale; an empty selection clears the restriction.
    pub fn update_widget_roles(
        &mut self,
        placement_id: &str,
        raw: &serde_json::Value,
    ) -> Result<()> {
        if self.manager.get_widget(placement_id).is_none() {
            self.logger.warn(
                &format!("Ignoring role update for unknown widget '{}'", placement_id),
                None,
            );
            return Err(CloakError::Other(format!(
                "Widget '{}' is not registered",
                placement_id
            )));
        }

        let list = RoleAllowList::from_raw_input(raw, &self.catalog);
        let roles: Vec<String> = list.roles().map(String::from).collect();

        self.decision_log.log_allow_list_update(placement_id, &roles);
        self.logger.info(
            &format!(
                "Updated roles for '{}': [{}]",
                placement_id,
                roles.join(", ")
            ),
            None,
        );

        self.manager.update_allow_list(placement_id, list);
        Ok(())
    }

    /// Decide whether a single widget should be rendered for a user.
    ///
    /// Unregistered placements are denied. The decision is audited.
    pub fn should_render(&mut self, user: &UserContext, placement_id: &str) -> bool {
        let allowed = self.manager.should_view(user, placement_id);

        let reason = if self.manager.get_widget(placement_id).is_none() {
            Some("Widget not registered")
        } else if allowed {
            None
        } else if !user.authenticated {
            Some("Login required")
        } else {
            Some("Not in allowed roles")
        };

        self.decision_log
            .log_decision(placement_id, user, allowed, reason);

        if !allowed {
            self.logger.debug(
                &format!(
                    "Suppressing '{}': {}",
                    placement_id,
                    reason.unwrap_or("denied")
                ),
                None,
            );
        }

        allowed
    }

    /// Evaluate every registered widget for a user and return the visible
    /// ones. Hidden widgets are suppressed from the result entirely.
    pub fn render_pass(&mut self, user: &UserContext) -> Vec<WidgetInfo> {
        self.manager.apply_user(user);

        let snapshot: Vec<WidgetInfo> = self
            .manager
            .get_all_widgets()
            .into_iter()
            .cloned()
            .collect();
        let total = snapshot.len();

        for widget in &snapshot {
            self.decision_log.log_decision(
                &widget.placement_id,
                user,
                widget.visible,
                widget.visibility_reason.as_deref(),
            );
        }

        let visible: Vec<WidgetInfo> = snapshot.into_iter().filter(|w| w.visible).collect();
        self.logger.info(
            &format!("Render pass: {} of {} widgets visible", visible.len(), total),
            None,
        );
        visible
    }

    /// The role catalog built from configuration
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// The widget visibility manager
    pub fn manager(&self) -> &WidgetVisibilityManager {
        &self.manager
    }

    /// The decision audit log
    pub fn decision_log(&self) -> &DecisionLog {
        &self.decision_log
    }
}
