//! The emergency alert overlay's list.

use cw_core::alert::EmergencyAlert;
use std::collections::HashSet;

/// Most alerts shown at once.
pub const MAX_ACTIVE_ALERTS: usize = 3;

/// How many seed alerts appear on the initial load.
pub const INITIAL_ALERTS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    enabled: bool,
    seed: Vec<EmergencyAlert>,
    active: Vec<EmergencyAlert>,
    dismissed: HashSet<String>,
}

impl AlertQueue {
    pub fn new(seed: Vec<EmergencyAlert>) -> Self {
        AlertQueue {
            seed,
            ..Default::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replace the list with the first seed alerts. Returns how many are visible.
    pub fn load_initial(&mut self) -> usize {
        self.active = self.seed.iter().take(INITIAL_ALERTS).cloned().collect();
        self.visible().len()
    }

    /// Newest first, capped at [`MAX_ACTIVE_ALERTS`].
    pub fn push(&mut self, alert: EmergencyAlert) {
        self.active.insert(0, alert);
        self.active.truncate(MAX_ACTIVE_ALERTS);
    }

    /// What the overlay draws: nothing while disabled, and never a
    /// dismissed alert.
    pub fn visible(&self) -> Vec<&EmergencyAlert> {
        if !self.enabled {
            return Vec::new();
        }
        self.active
            .iter()
            .filter(|a| !self.dismissed.contains(&a.id))
            .collect()
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        self.dismissed.insert(id.to_string());
        let before = self.active.len();
        self.active.retain(|a| a.id != id);
        self.active.len() != before
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed.contains(id)
    }

    /// Dismiss the alert and hand back the id to open in report details.
    pub fn view_details(&mut self, id: &str) -> Option<String> {
        self.dismiss(id).then(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cw_core::alert::CSV_OBJECT;

    fn seed() -> Vec<EmergencyAlert> {
        let now = Utc.with_ymd_and_hms(2025, 9, 8, 16, 0, 0).unwrap();
        EmergencyAlert::parse_alert_csv(CSV_OBJECT, now).unwrap()
    }

    fn alert(id: &str) -> EmergencyAlert {
        let mut a = seed().remove(0);
        a.id = id.to_string();
        a
    }

    fn ids(q: &AlertQueue) -> Vec<&str> {
        q.visible().iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn disabled_queue_shows_nothing() {
        let mut q = AlertQueue::new(seed());
        q.load_initial();
        assert!(q.visible().is_empty());
        q.set_enabled(true);
        assert_eq!(ids(&q), vec!["alert_001", "alert_002"]);
    }

    #[test]
    fn new_alerts_go_first_and_cap_at_three() {
        let mut q = AlertQueue::new(seed());
        q.set_enabled(true);
        q.load_initial();
        q.push(alert("a"));
        q.push(alert("b"));
        assert_eq!(ids(&q), vec!["b", "a", "alert_001"]);
    }

    #[test]
    fn dismissed_alerts_stay_hidden_after_reload() {
        let mut q = AlertQueue::new(seed());
        q.set_enabled(true);
        q.load_initial();
        assert!(q.dismiss("alert_001"));
        assert_eq!(ids(&q), vec!["alert_002"]);
        assert!(q.is_dismissed("alert_001"));

        q.load_initial();
        assert_eq!(ids(&q), vec!["alert_002"]);
    }

    #[test]
    fn view_details_dismisses_and_returns_the_id() {
        let mut q = AlertQueue::new(seed());
        q.set_enabled(true);
        q.load_initial();
        assert_eq!(q.view_details("alert_002"), Some("alert_002".to_string()));
        assert_eq!(ids(&q), vec!["alert_001"]);
        assert_eq!(q.view_details("missing"), None);
    }
}
