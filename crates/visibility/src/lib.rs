//! # CLOAK Visibility
//!
//! Role-gated widget visibility for CLOAK.
//!
//! ## Components
//!
//! - `RoleAllowList` - Per-widget set of roles permitted to view it
//! - `VisibilityDecider` - The visibility predicate and its override chain
//! - `WidgetVisibilityManager` - Widget filtering by role

pub mod allow_list;
pub mod decider;
pub mod widget_visibility;

pub use allow_list::RoleAllowList;
pub use decider::{OverrideFn, VisibilityDecider};
pub use widget_visibility::WidgetVisibilityManager;
