//! DecisionLog - Audit logging for visibility decisions

use serde::{Deserialize, Serialize};
use shared::UserContext;
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionEntry {
    pub timestamp: String,
    pub event_type: DecisionEventType,
    pub placement_id: String,
    pub authenticated: bool,
    pub user_roles: Vec<String>,
    pub allowed: bool,
    pub reason: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Types of audit events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionEventType {
    RenderAllowed,
    RenderDenied,
    AllowListUpdate,
}

/// Bounded in-memory decision log. Oldest entries are evicted first.
#[derive(Debug)]
pub struct DecisionLog {
    entries: VecDeque<DecisionEntry>,
    max_entries: usize,
}

impl DecisionLog {
    /// Create a new DecisionLog
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: DecisionEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a render decision for a widget
    pub fn log_decision(
        &mut self,
        placement_id: &str,
        user: &UserContext,
        allowed: bool,
        reason: Option<&str>,
    ) {
        self.log(DecisionEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: if allowed {
                DecisionEventType::RenderAllowed
            } else {
                DecisionEventType::RenderDenied
            },
            placement_id: placement_id.to_string(),
            authenticated: user.authenticated,
            user_roles: user.roles.clone(),
            allowed,
            reason: reason.map(|s| s.to_string()),
            metadata: None,
        });
    }

    /// Log a change to a widget's allow-list
    pub fn log_allow_list_update(&mut self, placement_id: &str, roles: &[String]) {
        self.log(DecisionEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: DecisionEventType::AllowListUpdate,
            placement_id: placement_id.to_string(),
            authenticated: false,
            user_roles: Vec::new(),
            allowed: true,
            reason: Some(if roles.is_empty() {
                "Restriction cleared".to_string()
            } else {
                format!("Restricted to: {}", roles.join(", "))
            }),
            metadata: None,
        });
    }

    /// Get recent entries
    pub fn get_recent(&self, limit: usize) -> Vec<&DecisionEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Get recent denials
    pub fn get_recent_denials(&self, limit: usize) -> Vec<&DecisionEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.event_type == DecisionEventType::RenderDenied)
            .take(limit)
            .collect()
    }

    /// Get statistics
    pub fn get_stats(&self) -> DecisionStats {
        let total = self.entries.len();
        let denials = self
            .entries
            .iter()
            .filter(|e| e.event_type == DecisionEventType::RenderDenied)
            .count();

        DecisionStats {
            total_entries: total,
            denial_count: denials,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct DecisionStats {
    pub total_entries: usize,
    pub denial_count: usize,
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new(10000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_decision() {
        let mut log = DecisionLog::new(100);
        let user = UserContext::logged_in(vec!["editor".to_string()]);

        log.log_decision("sidebar__calendar", &user, true, None);

        let stats = log.get_stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.denial_count, 0);
    }

    #[test]
    fn test_log_denial() {
        let mut log = DecisionLog::new(100);
        let user = UserContext::anonymous();

        log.log_decision("sidebar__calendar", &user, false, Some("Login required"));

        let denials = log.get_recent_denials(10);
        assert_eq!(denials.len(), 1);
        assert_eq!(denials[0].event_type, DecisionEventType::RenderDenied);
        assert_eq!(denials[0].reason, Some("Login required".to_string()));
        assert!(!denials[0].authenticated);
    }

    #[test]
    fn test_log_allow_list_update() {
        let mut log = DecisionLog::new(100);

        log.log_allow_list_update("sidebar__calendar", &["editor".to_string()]);
        log.log_allow_list_update("sidebar__calendar", &[]);

        let recent = log.get_recent(2);
        assert_eq!(recent[0].reason, Some("Restriction cleared".to_string()));
        assert_eq!(recent[1].reason, Some("Restricted to: editor".to_string()));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = DecisionLog::new(100);
        let user = UserContext::anonymous();

        log.log_decision("sidebar__a", &user, true, None);
        log.log_decision("sidebar__b", &user, true, None);

        let recent = log.get_recent(10);
        assert_eq!(recent[0].placement_id, "sidebar__b");
        assert_eq!(recent[1].placement_id, "sidebar__a");
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut log = DecisionLog::new(3);
        let user = UserContext::anonymous();

        for i in 0..5 {
            log.log_decision(&format!("sidebar__w{}", i), &user, true, None);
        }

        assert_eq!(log.get_stats().total_entries, 3);
        let recent = log.get_recent(10);
        assert_eq!(recent.len(), 3);
        // w0 and w1 were evicted
        assert_eq!(recent[2].placement_id, "sidebar__w2");
    }

    #[test]
    fn test_denial_count_in_stats() {
        let mut log = DecisionLog::new(100);
        let user = UserContext::anonymous();

        log.log_decision("sidebar__a", &user, true, None);
        log.log_decision("sidebar__b", &user, false, Some("Login required"));
        log.log_decision("sidebar__c", &user, false, Some("Login required"));

        let stats = log.get_stats();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.denial_count, 2);
    }

    #[test]
    fn test_export_json() {
        let mut log = DecisionLog::new(100);
        let user = UserContext::logged_in(vec!["editor".to_string()]);

        log.log_decision("sidebar__calendar", &user, true, Some("Role access granted"));

        let json = log.export_json();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["placementId"], "sidebar__calendar");
        assert_eq!(entries[0]["eventType"], "render_allowed");
        assert_eq!(entries[0]["allowed"], true);
    }
}
