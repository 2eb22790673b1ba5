//! WidgetVisibilityManager - Widget filtering by role

use crate::{RoleAllowList, VisibilityDecider};
use shared::{UserContext, WidgetInfo, WidgetNotViewableError};
use std::collections::HashMap;

/// Tracks widget placements and applies role-based visibility.
///
/// Visibility flags on the registered widgets reflect the most recent
/// `apply_user` pass; `should_view` answers for a single widget without
/// touching the stored flags.
#[derive(Debug, Default)]
pub struct WidgetVisibilityManager {
    /// All registered widgets (placement id -> WidgetInfo)
    widgets: HashMap<String, WidgetInfo>,

    /// Per-widget allow-lists (placement id -> list)
    allow_lists: HashMap<String, RoleAllowList>,

    /// Decision logic, including the override chain
    decider: VisibilityDecider,
}

impl WidgetVisibilityManager {
    /// Create a manager with a default (override-free) decider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager around a pre-configured decider
    pub fn with_decider(decider: VisibilityDecider) -> Self {
        Self {
            widgets: HashMap::new(),
            allow_lists: HashMap::new(),
            decider,
        }
    }

    /// Access the decider, e.g. to register overrides during initialization
    pub fn decider_mut(&mut self) -> &mut VisibilityDecider {
        &mut self.decider
    }

    /// Register a widget placement
    pub fn register_widget(&mut self, info: WidgetInfo) {
        self.widgets.insert(info.placement_id.clone(), info);
    }

    /// Register multiple widget placements
    pub fn register_widgets(&mut self, widgets: impl IntoIterator<Item = WidgetInfo>) {
        for widget in widgets {
            self.register_widget(widget);
        }
    }

    /// Replace a widget's allow-list with an updated selection.
    ///
    /// Update semantics are wholesale replacement: submitting a selection
    /// with no roles clears the restriction instead of keeping the old one.
    pub fn update_allow_list(&mut self, placement_id: &str, update: RoleAllowList) {
        let stored = self.allow_lists.remove(placement_id).unwrap_or_default();
        self.allow_lists
            .insert(placement_id.to_string(), stored.merge(update));
    }

    /// Get a widget's allow-list, if one has been stored
    pub fn allow_list(&self, placement_id: &str) -> Option<&RoleAllowList> {
        self.allow_lists.get(placement_id)
    }

    /// Decide visibility of a single widget for a user.
    ///
    /// Unregistered placements are never viewable. A registered widget
    /// without a stored allow-list is unrestricted.
    pub fn should_view(&self, user: &UserContext, placement_id: &str) -> bool {
        if !self.widgets.contains_key(placement_id) {
            return false;
        }

        match self.allow_lists.get(placement_id) {
            Some(list) => self.decider.can_view(user, list),
            None => self.decider.can_view(user, &RoleAllowList::new()),
        }
    }

    /// Recompute every widget's visibility for the given user
    pub fn apply_user(&mut self, user: &UserContext) {
        for (placement, widget) in self.widgets.iter_mut() {
            let empty = RoleAllowList::new();
            let list = self.allow_lists.get(placement).unwrap_or(&empty);
            let restricted = !list.is_unrestricted();

            if self.decider.can_view(user, list) {
                if restricted {
                    widget.show("Role access granted");
                } else {
                    widget.show("No role restriction");
                }
            } else if !user.authenticated {
                widget.hide("Login required");
            } else {
                widget.hide("Not in allowed roles");
            }
        }
    }

    /// Check if a widget is visible (as of the last `apply_user` pass)
    pub fn is_visible(&self, placement_id: &str) -> bool {
        self.widgets
            .get(placement_id)
            .map(|w| w.visible)
            .unwrap_or(false)
    }

    /// Check access and throw error if the widget may not be rendered
    pub fn check_access(&self, placement_id: &str) -> Result<(), WidgetNotViewableError> {
        match self.widgets.get(placement_id) {
            Some(w) if w.visible => Ok(()),
            Some(w) => Err(WidgetNotViewableError {
                placement_id: placement_id.to_string(),
                reason: w
                    .visibility_reason
                    .clone()
                    .unwrap_or_else(|| "Hidden".to_string()),
            }),
            None => Err(WidgetNotViewableError {
                placement_id: placement_id.to_string(),
                reason: "Widget not registered".to_string(),
            }),
        }
    }

    /// Get a registered widget by placement id
    pub fn get_widget(&self, placement_id: &str) -> Option<&WidgetInfo> {
        self.widgets.get(placement_id)
    }

    /// Get all visible widgets
    pub fn get_visible_widgets(&self) -> Vec<&WidgetInfo> {
        self.widgets.values().filter(|w| w.visible).collect()
    }

    /// Get all widgets (visible and hidden)
    pub fn get_all_widgets(&self) -> Vec<&WidgetInfo> {
        self.widgets.values().collect()
    }
}
