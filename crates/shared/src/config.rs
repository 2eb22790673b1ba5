//! Configuration types for CLOAK

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for a single widget placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEntry {
    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Area (sidebar/region) the widget is placed in
    #[serde(default = "default_area")]
    pub area: String,

    /// Raw role selection payload as submitted by the configuration layer.
    ///
    /// Kept as untyped JSON on purpose: normalization (dropping unknown
    /// roles, collapsing duplicates, treating non-collections as empty)
    /// happens in the visibility layer, not during parsing.
    #[serde(default)]
    pub access_roles: serde_json::Value,
}

fn default_area() -> String {
    "sidebar".to_string()
}

/// Render configuration format (cloak.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Roles known to the host (id -> display name)
    #[serde(default)]
    pub roles: HashMap<String, String>,

    /// Widget placements (widget id -> entry)
    #[serde(default)]
    pub widgets: HashMap<String, WidgetEntry>,
}

impl RenderConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get widget ids
    pub fn widget_ids(&self) -> Vec<&str> {
        self.widgets.keys().map(|s| s.as_str()).collect()
    }
}

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// Simple console logger implementation
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[DEBUG] {}", message);
    }

    fn info(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[INFO] {}", message);
    }

    fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[WARN] {}", message);
    }

    fn error(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[ERROR] {}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "roles": {
                "editor": "Editor",
                "subscriber": "Subscriber"
            },
            "widgets": {
                "calendar": {
                    "title": "Event Calendar",
                    "area": "sidebar",
                    "accessRoles": {"editor": "editor"}
                }
            }
        }"#;

        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.roles.len(), 2);
        assert!(config.widgets.contains_key("calendar"));
        assert_eq!(config.widgets["calendar"].area, "sidebar");
        assert!(config.widgets["calendar"].access_roles.is_object());
    }

    #[test]
    fn test_config_defaults() {
        let config: RenderConfig = serde_json::from_str("{}").unwrap();

        assert!(config.roles.is_empty());
        assert!(config.widgets.is_empty());
    }

    #[test]
    fn test_widget_entry_defaults() {
        let entry: WidgetEntry = serde_json::from_str("{}").unwrap();

        assert!(entry.title.is_none());
        assert_eq!(entry.area, "sidebar");
        assert!(entry.access_roles.is_null());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"roles": {{"editor": "Editor"}}, "widgets": {{"login": {{"area": "footer"}}}}}}"#
        )
        .unwrap();

        let config = RenderConfig::from_file(file.path()).unwrap();
        assert!(config.roles.contains_key("editor"));
        assert_eq!(config.widget_ids(), vec!["login"]);
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = RenderConfig::from_file(std::path::Path::new("/nonexistent/cloak.json"));
        assert!(result.is_err());
    }
}
