//! Widget types for CLOAK

use serde::{Deserialize, Serialize};

/// A widget definition as supplied by the rendering layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Widget identifier
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Widget description
    #[serde(default)]
    pub description: Option<String>,
}

impl Widget {
    /// Create a new widget
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
        }
    }

    /// Builder: set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Extended widget information with placement tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInfo {
    /// Original widget definition
    pub widget: Widget,

    /// Area (sidebar/region) the widget is placed in
    pub area: String,

    /// Placement id (`area__widgetId`)
    pub placement_id: String,

    /// Whether this widget is currently visible
    pub visible: bool,

    /// Why this widget is visible/hidden
    pub visibility_reason: Option<String>,
}

impl WidgetInfo {
    /// Create widget info from a widget and the area it is placed in
    pub fn new(widget: Widget, area: impl Into<String>) -> Self {
        let area = area.into();
        let placement_id = format!("{}__{}", area, widget.id);
        Self {
            widget,
            area,
            placement_id,
            visible: true,
            visibility_reason: None,
        }
    }

    /// Create the placement id from area and widget id
    pub fn make_placement_id(area: &str, widget_id: &str) -> String {
        format!("{}__{}", area, widget_id)
    }

    /// Parse a placement id into (area, widget id)
    pub fn parse_placement_id(placement: &str) -> Option<(&str, &str)> {
        placement.split_once("__")
    }

    /// Hide this widget with a reason
    pub fn hide(&mut self, reason: impl Into<String>) {
        self.visible = false;
        self.visibility_reason = Some(reason.into());
    }

    /// Show this widget with a reason
    pub fn show(&mut self, reason: impl Into<String>) {
        self.visible = true;
        self.visibility_reason = Some(reason.into());
    }
}
