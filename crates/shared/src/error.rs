//! Error types for CLOAK

use thiserror::Error;

/// Error thrown when a role is not found in the catalog
#[derive(Debug, Error)]
#[error("Role '{role_id}' is not known to the host. Known roles: {}", known_roles.join(", "))]
pub struct RoleNotFoundError {
    pub role_id: String,
    pub known_roles: Vec<String>,
}

/// Error thrown when a widget may not be viewed by the current user
#[derive(Debug, Error)]
#[error("Widget '{placement_id}' is not viewable: {reason}")]
pub struct WidgetNotViewableError {
    pub placement_id: String,
    pub reason: String,
}

/// General CLOAK error type
#[derive(Debug, Error)]
pub enum CloakError {
    #[error(transparent)]
    RoleNotFound(#[from] RoleNotFoundError),

    #[error(transparent)]
    WidgetNotViewable(#[from] WidgetNotViewableError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CloakError>;
