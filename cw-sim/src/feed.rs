//! Random mock activity: reports, social posts and emergency alerts that
//! show up while the demo is running.

use chrono::{DateTime, Utc};
use cw_core::alert::{AlertLevel, EmergencyAlert};
use cw_core::hazard::HazardType;
use cw_core::report::{Report, TrustScore, Urgency};
use cw_core::social::{Engagement, Platform, Sentiment, SocialPost};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const FEED_HAZARDS: [HazardType; 3] = [HazardType::HighWaves, HazardType::Flooding, HazardType::OilSpill];
pub const FEED_PLATFORMS: [Platform; 3] = [Platform::Twitter, Platform::Facebook, Platform::Instagram];
pub const ALERT_AREAS: [&str; 3] = ["Puducherry Beach", "Goa Coastline", "Mangalore Port"];

/// Chennai; new reports scatter within ±0.05° of it.
pub const FEED_CENTER: (f64, f64) = (13.0827, 80.2707);
pub const FEED_JITTER: f64 = 0.05;

pub const FEED_REPORTER: &str = "New Reporter";
pub const FEED_DISPLAY_NAME: &str = "New Observer";
pub const FEED_POST_TEXT: &str =
    "Just observed unusual wave patterns near the coast. Staying alert! #CoastalWatch";
pub const FEED_KEYWORDS: [&str; 3] = ["waves", "coastal", "observation"];
pub const FEED_ALERT_DESCRIPTION: &str = "New emergency situation detected requiring immediate attention.";

#[derive(Debug, Clone)]
pub struct MockFeed {
    rng: SmallRng,
}

impl MockFeed {
    pub fn new(rng: SmallRng) -> Self {
        MockFeed { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Roll against `probability` (clamped into 0..=1).
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(crate::config::clamp_probability(probability))
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }

    pub fn new_report(&mut self, now: DateTime<Utc>) -> Report {
        let hazard = self.pick(&FEED_HAZARDS);
        let mut report = Report::submitted(
            format!("r_{}", now.timestamp_millis()),
            hazard,
            FEED_REPORTER,
            now,
        );
        report.latitude = FEED_CENTER.0 + self.rng.random_range(-FEED_JITTER..FEED_JITTER);
        report.longitude = FEED_CENTER.1 + self.rng.random_range(-FEED_JITTER..FEED_JITTER);
        report.urgency = Urgency::saturating(self.rng.random_range(0..100));
        report.trust_score = TrustScore::saturating(self.rng.random_range(0..100));
        report
    }

    pub fn new_post(&mut self, now: DateTime<Utc>) -> SocialPost {
        SocialPost {
            id: format!("s_{}", now.timestamp_millis()),
            platform: self.pick(&FEED_PLATFORMS),
            username: format!("@new_user_{}", self.rng.random_range(0..1000u32)),
            display_name: FEED_DISPLAY_NAME.to_string(),
            text: FEED_POST_TEXT.to_string(),
            sentiment: Sentiment::Neutral,
            timestamp: now,
            geo: None,
            location: None,
            engagement: Engagement {
                likes: self.rng.random_range(0..100),
                comments: self.rng.random_range(0..50),
                shares: self.rng.random_range(0..25),
                views: None,
            },
            keywords: FEED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            verified: false,
        }
    }

    pub fn new_alert(&mut self, now: DateTime<Utc>) -> EmergencyAlert {
        EmergencyAlert {
            id: format!("alert_{}", now.timestamp_millis()),
            area_name: self.pick(&ALERT_AREAS).to_string(),
            level: self.pick(&AlertLevel::ALL),
            description: FEED_ALERT_DESCRIPTION.to_string(),
            timestamp: now,
            affected_population: self.rng.random_range(5_000..25_000),
            report_count: self.rng.random_range(3..11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use cw_core::report::ReportStatus;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 8, 16, 0, 0).unwrap()
    }

    #[test]
    fn reports_stay_in_range() {
        let mut feed = MockFeed::seeded(1);
        for _ in 0..200 {
            let r = feed.new_report(now());
            assert!(FEED_HAZARDS.contains(&r.hazard));
            assert!((r.latitude - FEED_CENTER.0).abs() <= FEED_JITTER);
            assert!((r.longitude - FEED_CENTER.1).abs() <= FEED_JITTER);
            assert!(r.urgency.value() < 100);
            assert!(r.trust_score.value() < 100);
            assert_eq!(r.status, ReportStatus::Unverified);
            assert_eq!(r.reporter, "New Reporter");
        }
    }

    #[test]
    fn report_id_comes_from_the_clock() {
        let r = MockFeed::seeded(1).new_report(now());
        assert_eq!(r.id, format!("r_{}", now().timestamp_millis()));
        assert_eq!(r.timestamp, now());
    }

    #[test]
    fn posts_stay_in_range() {
        let mut feed = MockFeed::seeded(2);
        for _ in 0..200 {
            let p = feed.new_post(now());
            assert!(FEED_PLATFORMS.contains(&p.platform));
            let n: u32 = p.username.trim_start_matches("@new_user_").parse().unwrap();
            assert!(n < 1000);
            assert!(p.engagement.likes < 100);
            assert!(p.engagement.comments < 50);
            assert!(p.engagement.shares < 25);
            assert_eq!(p.sentiment, Sentiment::Neutral);
            assert_eq!(p.keywords, vec!["waves", "coastal", "observation"]);
            assert!(!p.verified);
        }
    }

    #[test]
    fn alerts_stay_in_range() {
        let mut feed = MockFeed::seeded(3);
        for _ in 0..200 {
            let a = feed.new_alert(now());
            assert!(ALERT_AREAS.contains(&a.area_name.as_str()));
            assert!((5_000..25_000).contains(&a.affected_population));
            assert!((3..=10).contains(&a.report_count));
            assert_eq!(a.description, FEED_ALERT_DESCRIPTION);
        }
    }

    #[test]
    fn every_hazard_eventually_appears() {
        let mut feed = MockFeed::seeded(4);
        let seen: std::collections::HashSet<_> = (0..100).map(|_| feed.new_report(now()).hazard).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_feed() {
        let mut a = MockFeed::seeded(11);
        let mut b = MockFeed::seeded(11);
        assert_eq!(a.new_report(now()), b.new_report(now()));
        assert_eq!(a.new_alert(now()), b.new_alert(now()));
    }
}
