//! # CLOAK Audit
//!
//! Audit logging for visibility decisions.

mod decision_log;

pub use decision_log::{DecisionEntry, DecisionEventType, DecisionLog, DecisionStats};
