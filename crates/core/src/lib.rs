//! # CLOAK Core
//!
//! Integration layer wiring the role catalog, widget visibility, and the
//! decision audit log behind one facade.

mod render_core;

pub use render_core::{CoreConfig, RenderCore};
