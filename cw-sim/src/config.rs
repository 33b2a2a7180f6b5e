use serde::{Deserialize, Serialize};

/// Periods and probabilities for the simulated live activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub network_check_ms: u64,
    pub offline_probability: f64,
    pub report_period_ms: u64,
    pub report_probability: f64,
    pub post_period_ms: u64,
    pub post_probability: f64,
    pub alert_period_ms: u64,
    pub alert_probability: f64,
    /// Delay between enabling popups and the seed alerts appearing.
    pub initial_alerts_delay_ms: u64,
    pub upload_complete_ms: u64,
    /// Dashboard "live updating" toggle.
    pub live_updates: bool,
    /// Emergency popups start enabled.
    pub emergency_popups: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            network_check_ms: 10_000,
            offline_probability: 0.1,
            report_period_ms: 15_000,
            report_probability: 0.3,
            post_period_ms: 20_000,
            post_probability: 0.3,
            alert_period_ms: 30_000,
            alert_probability: 0.2,
            initial_alerts_delay_ms: 2_000,
            upload_complete_ms: 3_000,
            live_updates: true,
            emergency_popups: false,
        }
    }
}

/// Clamp into 0..=1; NaN counts as never.
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
