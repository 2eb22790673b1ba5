//! User context supplied by the host's identity layer

use serde::{Deserialize, Serialize};

/// Identity and grants of the user a visibility decision is made for.
///
/// CLOAK never mutates or stores this; the host's authentication layer
/// constructs one per decision call. Absent fields deserialize to the
/// restrictive defaults (not authenticated, no roles, no bypass).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    /// Whether the user is logged in
    #[serde(default)]
    pub authenticated: bool,

    /// Role identifiers granted to the user
    #[serde(default)]
    pub roles: Vec<String>,

    /// Administrator-class capability that bypasses role restrictions
    #[serde(default)]
    pub can_bypass_restrictions: bool,
}

impl UserContext {
    /// An anonymous visitor: not authenticated, no roles, no bypass
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated user with the given roles
    pub fn logged_in(roles: Vec<String>) -> Self {
        Self {
            authenticated: true,
            roles,
            can_bypass_restrictions: false,
        }
    }

    /// Builder: grant the restriction-bypass capability
    pub fn with_bypass(mut self) -> Self {
        self.can_bypass_restrictions = true;
        self
    }

    /// Check if the user holds a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
