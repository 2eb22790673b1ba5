//! CLI commands

pub mod check;
pub mod roles;
pub mod widgets;

pub use check::CheckCommand;
pub use roles::RolesCommand;
pub use widgets::WidgetsCommand;
