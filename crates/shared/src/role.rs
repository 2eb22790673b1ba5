//! Role catalog types

use crate::RoleNotFoundError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A role known to the host system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    /// Unique role identifier (e.g., 'editor', 'subscriber')
    pub id: String,

    /// Human-readable role name
    pub name: String,

    /// Role description
    #[serde(default)]
    pub description: String,
}

impl RoleDefinition {
    /// Create a new role definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The set of roles the host system knows about.
///
/// Untrusted role selections are validated against this catalog; identifiers
/// that are not registered here are treated as stale and dropped.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    /// All registered roles
    roles: HashMap<String, RoleDefinition>,
}

impl RoleCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Build a catalog from an id -> display name map
    pub fn from_names(names: &HashMap<String, String>) -> Self {
        let mut catalog = Self::new();
        for (id, name) in names {
            catalog.register_role(RoleDefinition::new(id.clone(), name.clone()));
        }
        catalog
    }

    /// Register a role
    pub fn register_role(&mut self, role: RoleDefinition) {
        self.roles.insert(role.id.clone(), role);
    }

    /// Get a role by ID
    pub fn get_role(&self, id: &str) -> Option<&RoleDefinition> {
        self.roles.get(id)
    }

    /// Check if a role identifier is known
    pub fn contains(&self, id: &str) -> bool {
        self.roles.contains_key(id)
    }

    /// Look up a role, failing with the list of known roles
    pub fn require_role(&self, id: &str) -> Result<&RoleDefinition, RoleNotFoundError> {
        self.roles.get(id).ok_or_else(|| RoleNotFoundError {
            role_id: id.to_string(),
            known_roles: self.roles.keys().cloned().collect(),
        })
    }

    /// Get all role IDs
    pub fn role_ids(&self) -> Vec<&str> {
        self.roles.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the catalog has no roles
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
