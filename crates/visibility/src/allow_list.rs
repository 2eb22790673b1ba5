//! Per-widget role allow-lists

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::RoleCatalog;
use std::collections::BTreeSet;

/// The set of role identifiers permitted to view a widget.
///
/// An empty allow-list means the widget is unrestricted and visible to
/// everyone. It never means "visible to nobody" - restriction only exists
/// once at least one role has been selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAllowList {
    roles: BTreeSet<String>,
}

impl RoleAllowList {
    /// Create an empty (unrestricted) allow-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an allow-list from already-validated role identifiers
    pub fn from_roles(roles: Vec<String>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Normalize an untrusted role-selection payload.
    ///
    /// Accepts the shapes a multi-select form produces: a mapping of role-id
    /// to role-id, or a sequence of role-ids. Identifiers not present in the
    /// host's role catalog are silently dropped - a selection saved before a
    /// role was renamed or removed must not turn into an error. Anything
    /// that is not a collection (null, strings, numbers, booleans)
    /// normalizes to the empty, unrestricted list.
    pub fn from_raw_input(raw: &Value, catalog: &RoleCatalog) -> Self {
        let candidates: Vec<&str> = match raw {
            Value::Object(map) => map.keys().map(|k| k.as_str()).collect(),
            Value::Array(items) => items.iter().filter_map(|v| v.as_str()).collect(),
            _ => Vec::new(),
        };

        Self {
            roles: candidates
                .into_iter()
                .filter(|id| catalog.contains(id))
                .map(String::from)
                .collect(),
        }
    }

    /// Apply an updated selection to this allow-list.
    ///
    /// This is a replacement, not a union: the submitted selection
    /// supersedes the stored one wholesale. Merging an empty update onto a
    /// non-empty list clears the restriction rather than keeping it.
    pub fn merge(self, update: RoleAllowList) -> RoleAllowList {
        update
    }

    /// Whether no restriction is configured
    pub fn is_unrestricted(&self) -> bool {
        self.roles.is_empty()
    }

    /// Check if a role identifier is in the list
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Iterate the role identifiers in the list
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|s| s.as_str())
    }

    /// Number of roles in the list
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
