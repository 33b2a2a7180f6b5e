//! Drives every simulated timer from one virtual clock.
//!
//! The host calls [`Simulation::advance_to`] with its own notion of elapsed
//! milliseconds and applies the returned [`SimEvent`]s (prepend the report,
//! flip the offline banner, ...). Wall-clock timestamps for generated data
//! are `epoch + elapsed`.

use crate::alerts::AlertQueue;
use crate::config::SimConfig;
use crate::feed::MockFeed;
use crate::network::NetworkStatus;
use crate::scheduler::{Scheduler, TimerId};
use crate::uploads::UploadQueue;
use chrono::{DateTime, Duration, Utc};
use cw_core::alert::EmergencyAlert;
use cw_core::hazard::HazardType;
use cw_core::report::Report;
use cw_core::social::SocialPost;
use cw_core::upload::QueuedReport;
use cw_utils::dates::clock_label;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimTimer {
    NetworkCheck,
    NewReport,
    NewPost,
    NewAlert,
    AlertsInitialLoad,
    UploadComplete(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    OfflineChanged(bool),
    NewReport(Report),
    NewPost(SocialPost),
    NewAlert(EmergencyAlert),
    /// Seed alerts appeared; carries how many are visible.
    AlertsLoaded(usize),
    UploadSynced(String),
}

pub struct Simulation<N: NetworkStatus> {
    config: SimConfig,
    scheduler: Scheduler<SimTimer>,
    network: N,
    feed: MockFeed,
    alerts: AlertQueue,
    uploads: UploadQueue,
    epoch: DateTime<Utc>,
    report_timer: Option<TimerId>,
    alert_timers: Option<(TimerId, TimerId)>,
}

impl<N: NetworkStatus> Simulation<N> {
    pub fn new(
        config: SimConfig,
        network: N,
        feed: MockFeed,
        seed_alerts: Vec<EmergencyAlert>,
        epoch: DateTime<Utc>,
    ) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.every(config.network_check_ms, SimTimer::NetworkCheck);
        scheduler.every(config.post_period_ms, SimTimer::NewPost);

        let mut sim = Simulation {
            scheduler,
            network,
            feed,
            alerts: AlertQueue::new(seed_alerts),
            uploads: UploadQueue::seeded(),
            epoch,
            report_timer: None,
            alert_timers: None,
            config,
        };
        sim.set_live_updates(sim.config.live_updates);
        sim.set_emergency_popups(sim.config.emergency_popups);
        sim
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// When the next timer fires, if any.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.scheduler.next_due_ms()
    }

    pub fn wall_clock(&self) -> DateTime<Utc> {
        self.epoch + Duration::milliseconds(self.now_ms() as i64)
    }

    pub fn is_offline(&self) -> bool {
        self.network.is_offline()
    }

    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertQueue {
        &mut self.alerts
    }

    pub fn uploads(&self) -> &UploadQueue {
        &self.uploads
    }

    pub fn live_updates(&self) -> bool {
        self.report_timer.is_some()
    }

    /// Start or stop injecting mock reports.
    pub fn set_live_updates(&mut self, on: bool) {
        match (on, self.report_timer) {
            (true, None) => {
                self.report_timer = Some(self.scheduler.every(self.config.report_period_ms, SimTimer::NewReport));
            }
            (false, Some(id)) => {
                self.scheduler.cancel(id);
                self.report_timer = None;
            }
            _ => {}
        }
    }

    /// Enabling schedules the initial seed load and the periodic alert roll;
    /// disabling cancels both and hides the overlay.
    pub fn set_emergency_popups(&mut self, on: bool) {
        self.alerts.set_enabled(on);
        match (on, self.alert_timers) {
            (true, None) => {
                let initial = self
                    .scheduler
                    .after(self.config.initial_alerts_delay_ms, SimTimer::AlertsInitialLoad);
                let periodic = self.scheduler.every(self.config.alert_period_ms, SimTimer::NewAlert);
                self.alert_timers = Some((initial, periodic));
            }
            (false, Some((initial, periodic))) => {
                self.scheduler.cancel(initial);
                self.scheduler.cancel(periodic);
                self.alert_timers = None;
            }
            _ => {}
        }
    }

    /// Queue a citizen submission. Online submissions sync after
    /// `upload_complete_ms`; offline ones wait.
    pub fn submit_report(&mut self, hazard: HazardType) -> QueuedReport {
        let now = self.wall_clock();
        let id = format!("q{}", now.timestamp_millis());
        let offline = self.network.is_offline();
        let item = self.uploads.submit(id.clone(), hazard, offline, clock_label(&now)).clone();
        if !offline {
            self.scheduler
                .after(self.config.upload_complete_ms, SimTimer::UploadComplete(id));
        }
        log::info!("[CW] sim: queued {} ({}) as {}", item.id, hazard, item.status.as_str());
        item
    }

    /// Run every timer due up to `now_ms`, in time order.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<SimEvent> {
        let mut events = Vec::new();
        while let Some(fired) = self.scheduler.pop_due(now_ms) {
            if let Some(event) = self.handle(fired.key) {
                events.push(event);
            }
        }
        self.scheduler.advance_to(now_ms);
        events
    }

    fn handle(&mut self, timer: SimTimer) -> Option<SimEvent> {
        let now = self.wall_clock();
        match timer {
            SimTimer::NetworkCheck => {
                let was = self.network.is_offline();
                let offline = self.network.check();
                (offline != was).then(|| {
                    log::info!("[CW] sim: network is now {}", if offline { "offline" } else { "online" });
                    SimEvent::OfflineChanged(offline)
                })
            }
            SimTimer::NewReport => self
                .feed
                .chance(self.config.report_probability)
                .then(|| SimEvent::NewReport(self.feed.new_report(now))),
            SimTimer::NewPost => self
                .feed
                .chance(self.config.post_probability)
                .then(|| SimEvent::NewPost(self.feed.new_post(now))),
            SimTimer::NewAlert => {
                if !self.feed.chance(self.config.alert_probability) {
                    return None;
                }
                let alert = self.feed.new_alert(now);
                log::info!("[CW] sim: alert {} for {}", alert.id, alert.area_name);
                self.alerts.push(alert.clone());
                Some(SimEvent::NewAlert(alert))
            }
            SimTimer::AlertsInitialLoad => Some(SimEvent::AlertsLoaded(self.alerts.load_initial())),
            SimTimer::UploadComplete(id) => self.uploads.mark_synced(&id).then_some(SimEvent::UploadSynced(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{FixedNetwork, ScriptedNetwork};
    use chrono::TimeZone;
    use cw_core::upload::UploadStatus;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 8, 16, 0, 0).unwrap()
    }

    fn seed_alerts() -> Vec<EmergencyAlert> {
        EmergencyAlert::parse_alert_csv(cw_core::alert::CSV_OBJECT, epoch()).unwrap()
    }

    fn sim_with<N: NetworkStatus>(config: SimConfig, network: N) -> Simulation<N> {
        Simulation::new(config, network, MockFeed::seeded(5), seed_alerts(), epoch())
    }

    fn always() -> SimConfig {
        SimConfig {
            report_probability: 1.0,
            post_probability: 1.0,
            alert_probability: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn online_submission_syncs_after_three_seconds() {
        let mut sim = sim_with(SimConfig::default(), FixedNetwork::online());
        sim.advance_to(1_000);
        let item = sim.submit_report(HazardType::Flooding);
        assert_eq!(item.status, UploadStatus::Uploading);
        assert_eq!(item.submitted_at, "16:00");

        assert!(sim.advance_to(3_999).is_empty());
        assert_eq!(sim.advance_to(4_000), vec![SimEvent::UploadSynced(item.id.clone())]);
        assert_eq!(sim.uploads().get(&item.id).unwrap().status, UploadStatus::Synced);
    }

    #[test]
    fn offline_submission_waits_forever() {
        let mut sim = sim_with(SimConfig::default(), FixedNetwork::offline());
        let item = sim.submit_report(HazardType::Tsunami);
        assert_eq!(item.status, UploadStatus::Waiting);
        sim.advance_to(9_000);
        assert_eq!(sim.uploads().get(&item.id).unwrap().status, UploadStatus::Waiting);
        assert_eq!(sim.uploads().items().len(), 3);
    }

    #[test]
    fn network_changes_are_reported_only_on_flips() {
        let mut sim = sim_with(SimConfig::default(), ScriptedNetwork::new([false, true, true, false]));
        let events: Vec<_> = sim
            .advance_to(40_000)
            .into_iter()
            .filter(|e| matches!(e, SimEvent::OfflineChanged(_)))
            .collect();
        assert_eq!(events, vec![SimEvent::OfflineChanged(true), SimEvent::OfflineChanged(false)]);
        assert!(!sim.is_offline());
    }

    #[test]
    fn certain_feeds_fire_on_their_periods() {
        let mut sim = sim_with(always(), FixedNetwork::online());
        let events = sim.advance_to(60_000);
        let reports = events.iter().filter(|e| matches!(e, SimEvent::NewReport(_))).count();
        let posts = events.iter().filter(|e| matches!(e, SimEvent::NewPost(_))).count();
        assert_eq!(reports, 4, "every 15s");
        assert_eq!(posts, 3, "every 20s");
        assert!(!events.iter().any(|e| matches!(e, SimEvent::NewAlert(_))), "popups are off");
    }

    #[test]
    fn generated_reports_use_the_wall_clock() {
        let mut sim = sim_with(always(), FixedNetwork::online());
        let events = sim.advance_to(15_000);
        let Some(SimEvent::NewReport(r)) = events.first() else {
            panic!("expected a report, got {events:?}");
        };
        assert_eq!(r.timestamp, epoch() + Duration::seconds(15));
    }

    #[test]
    fn live_updates_toggle() {
        let mut sim = sim_with(always(), FixedNetwork::online());
        sim.set_live_updates(false);
        assert!(!sim.live_updates());
        let events = sim.advance_to(30_000);
        assert!(!events.iter().any(|e| matches!(e, SimEvent::NewReport(_))));
        sim.set_live_updates(true);
        let events = sim.advance_to(45_000);
        assert_eq!(events.iter().filter(|e| matches!(e, SimEvent::NewReport(_))).count(), 1);
    }

    #[test]
    fn popups_load_seed_alerts_then_roll_new_ones() {
        let mut sim = sim_with(always(), FixedNetwork::online());
        sim.set_emergency_popups(true);
        assert!(sim.alerts().visible().is_empty());

        let events = sim.advance_to(2_000);
        assert_eq!(events, vec![SimEvent::AlertsLoaded(2)]);

        let events = sim.advance_to(30_000);
        assert!(events.iter().any(|e| matches!(e, SimEvent::NewAlert(_))));
        assert_eq!(sim.alerts().visible().len(), 3);

        sim.advance_to(90_000);
        assert_eq!(sim.alerts().visible().len(), 3, "capped");
    }

    #[test]
    fn disabling_popups_cancels_pending_load() {
        let mut sim = sim_with(always(), FixedNetwork::online());
        sim.set_emergency_popups(true);
        sim.advance_to(1_000);
        sim.set_emergency_popups(false);
        let events = sim.advance_to(60_000);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SimEvent::AlertsLoaded(_) | SimEvent::NewAlert(_))));
        assert!(sim.alerts().visible().is_empty());
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = sim_with(SimConfig::default(), crate::network::SimulatedNetwork::seeded(0.1, 3));
            sim.set_emergency_popups(true);
            sim.advance_to(600_000)
        };
        assert_eq!(run(), run());
    }
}
