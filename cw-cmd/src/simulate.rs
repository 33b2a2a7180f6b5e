//! Headless run of the live-activity simulation.
//!
//! Mirrors what the dashboard sees: network flips, injected reports and
//! posts, and (since there is no toggle here) the emergency alert overlay.

use chrono::{DateTime, Utc};
use cw_db::{Database, HazardRepository};
use cw_sim::{apply_events, MockFeed, SimConfig, SimEvent, SimulatedNetwork, Simulation};
use log::info;
use std::io::Write;

/// One line per event, prefixed with the simulated second.
pub fn describe(at_secs: u64, event: &SimEvent) -> String {
    let what = match event {
        SimEvent::OfflineChanged(true) => "network went offline".to_string(),
        SimEvent::OfflineChanged(false) => "network back online".to_string(),
        SimEvent::NewReport(r) => format!(
            "new report {} ({}, urgency {}) at {:.4}, {:.4}",
            r.id,
            r.hazard,
            r.urgency.value(),
            r.latitude,
            r.longitude
        ),
        SimEvent::NewPost(p) => format!("new {} post {} by {}", p.platform, p.id, p.username),
        SimEvent::NewAlert(a) => format!("{} alert {} for {}", a.level.as_str(), a.id, a.area_name),
        SimEvent::AlertsLoaded(n) => format!("{} seed alerts shown", n),
        SimEvent::UploadSynced(id) => format!("upload {} synced", id),
    };
    format!("[{:>5}s] {}", at_secs, what)
}

/// Build the simulation the dashboard would run, starting at `epoch`.
pub fn build(db: &Database, seed: u64, epoch: DateTime<Utc>) -> anyhow::Result<Simulation<SimulatedNetwork>> {
    let config = SimConfig::default();
    let network = SimulatedNetwork::seeded(config.offline_probability, seed);
    let alerts = db.query_seed_alerts(epoch)?;
    let mut sim = Simulation::new(config, network, MockFeed::seeded(seed.wrapping_add(1)), alerts, epoch);
    sim.set_emergency_popups(true);
    Ok(sim)
}

/// Step the simulation one second at a time, writing each event to `out`.
/// Returns the number of events.
pub fn step<W: Write>(
    db: &Database,
    sim: &mut Simulation<SimulatedNetwork>,
    from_secs: u64,
    to_secs: u64,
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut count = 0;
    for second in from_secs..=to_secs {
        let events = sim.advance_to(second * 1_000);
        for event in &events {
            writeln!(out, "{}", describe(second, event))?;
        }
        count += events.len();
        apply_events(db, events)?;
    }
    Ok(count)
}

pub async fn run_simulate(seconds: u64, seed: u64, realtime: bool) -> anyhow::Result<()> {
    let db = Database::with_fixtures()?;
    let mut sim = build(&db, seed, Utc::now())?;
    info!("[CW] simulate: {}s with seed {}{}", seconds, seed, if realtime { " (realtime)" } else { "" });

    let stdout = std::io::stdout();
    let mut events = 0;
    if realtime {
        for second in 1..=seconds {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            events += step(&db, &mut sim, second, second, &mut stdout.lock())?;
        }
    } else if seconds > 0 {
        events = step(&db, &mut sim, 1, seconds, &mut stdout.lock())?;
    }

    println!(
        "{} events; {} reports, {} social posts, {} alerts showing, network {}",
        events,
        db.reports()?.len(),
        db.social_posts()?.len(),
        sim.alerts().visible().len(),
        if sim.is_offline() { "offline" } else { "online" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 8, 17, 0, 0).unwrap()
    }

    #[test]
    fn seed_alerts_show_after_two_seconds() {
        let db = Database::with_fixtures().unwrap();
        let mut sim = build(&db, 7, epoch()).unwrap();
        let mut out = Vec::new();
        step(&db, &mut sim, 1, 2, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[    2s] 2 seed alerts shown"), "got: {text}");
        assert_eq!(sim.alerts().visible().len(), 2);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let db = Database::with_fixtures().unwrap();
            let mut sim = build(&db, seed, epoch()).unwrap();
            let mut out = Vec::new();
            step(&db, &mut sim, 1, 120, &mut out).unwrap();
            (String::from_utf8(out).unwrap(), db.reports().unwrap().len())
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn injected_reports_reach_the_store() {
        let db = Database::with_fixtures().unwrap();
        let mut sim = build(&db, 3, epoch()).unwrap();
        let mut out = Vec::new();
        step(&db, &mut sim, 1, 600, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let logged = text.matches("new report").count();
        assert_eq!(db.reports().unwrap().len(), 8 + logged);
    }

    #[test]
    fn describe_formats_network_flips() {
        assert_eq!(describe(10, &SimEvent::OfflineChanged(true)), "[   10s] network went offline");
        assert_eq!(describe(20, &SimEvent::UploadSynced("q1".into())), "[   20s] upload q1 synced");
    }
}
