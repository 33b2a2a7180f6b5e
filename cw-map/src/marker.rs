//! Lighthouse markers: where each report is drawn and how it looks.

use crate::geometry::Point;
use cw_core::report::{Report, ReportStatus, Urgency};
use serde::Serialize;

/// At most this many reports get a marker.
pub const MAX_MARKERS: usize = 12;

/// Spacing between markers that share a base position.
pub const MARKER_SPREAD: f64 = 18.0;

/// Label anchors of the coastal states markers cycle through: Tamil Nadu,
/// Kerala, Andhra Pradesh, Karnataka, Maharashtra, Gujarat, Odisha,
/// West Bengal.
pub const BASE_POSITIONS: [Point; 8] = [
    Point::new(350.0, 527.0),
    Point::new(255.0, 517.0),
    Point::new(400.0, 390.0),
    Point::new(285.0, 440.0),
    Point::new(295.0, 355.0),
    Point::new(190.0, 285.0),
    Point::new(440.0, 285.0),
    Point::new(470.0, 250.0),
];

pub const ALERT_RING_RADIUS: f64 = 45.0;

/// Where the `index`th report's marker sits.
pub fn marker_position(index: usize) -> Point {
    let base = BASE_POSITIONS[index % BASE_POSITIONS.len()];
    let dx = ((index % 3) as f64 - 1.0) * MARKER_SPREAD;
    let dy = ((index / 3 % 3) as f64 - 1.0) * MARKER_SPREAD;
    base.offset(dx, dy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    High,
    Medium,
    Low,
}

impl UrgencyTier {
    pub fn of(urgency: Urgency) -> Self {
        match urgency.value() {
            u if u >= Urgency::URGENT => UrgencyTier::High,
            u if u >= 60 => UrgencyTier::Medium,
            _ => UrgencyTier::Low,
        }
    }

    /// Badge colour name used in report lists.
    pub fn badge_color(self) -> &'static str {
        match self {
            UrgencyTier::High => "red",
            UrgencyTier::Medium => "yellow",
            UrgencyTier::Low => "blue",
        }
    }

    /// Fill of the marker on the map.
    pub fn marker_color(self) -> &'static str {
        match self {
            UrgencyTier::High => "#DC2626",
            UrgencyTier::Medium => "#FACC15",
            UrgencyTier::Low => "#16A34A",
        }
    }

    pub fn legend(self) -> &'static str {
        match self {
            UrgencyTier::High => "High Alert (80+)",
            UrgencyTier::Medium => "Medium Alert (60-79)",
            UrgencyTier::Low => "Low Alert (0-59)",
        }
    }
}

/// Beam animation CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BeamAnimation {
    Steady,
    Urgent,
    Flicker,
}

impl BeamAnimation {
    pub fn for_report(report: &Report) -> Self {
        if report.status == ReportStatus::Verified {
            BeamAnimation::Steady
        } else if report.is_urgent() {
            BeamAnimation::Urgent
        } else {
            BeamAnimation::Flicker
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BeamAnimation::Steady => "lighthouse-steady",
            BeamAnimation::Urgent => "lighthouse-urgent",
            BeamAnimation::Flicker => "lighthouse-flicker",
        }
    }
}

pub fn status_dot_color(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Verified => "#16A34A",
        ReportStatus::Dismissed => "#DC2626",
        _ => "#FACC15",
    }
}

/// Everything needed to draw one report's lighthouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub report_id: String,
    pub position: Point,
    pub tier: UrgencyTier,
    pub main_beam_radius: f64,
    pub secondary_beam_radius: f64,
    pub alert_ring: bool,
    pub animation: BeamAnimation,
    pub status_color: &'static str,
}

impl Marker {
    pub fn new(index: usize, report: &Report) -> Self {
        let urgent = report.is_urgent();
        let main_beam_radius = if urgent {
            35.0
        } else if report.status == ReportStatus::Verified {
            25.0
        } else {
            20.0
        };
        Marker {
            report_id: report.id.clone(),
            position: marker_position(index),
            tier: UrgencyTier::of(report.urgency),
            main_beam_radius,
            secondary_beam_radius: if urgent { 20.0 } else { 15.0 },
            alert_ring: urgent,
            animation: BeamAnimation::for_report(report),
            status_color: status_dot_color(report.status),
        }
    }

    pub fn color(&self) -> &'static str {
        self.tier.marker_color()
    }

    /// Centre of the small status dot at the marker's upper right.
    pub fn status_dot(&self) -> Point {
        self.position.offset(8.0, -8.0)
    }
}

/// Markers for the first [`MAX_MARKERS`] reports, in list order.
pub fn layout_markers(reports: &[Report]) -> Vec<Marker> {
    reports
        .iter()
        .take(MAX_MARKERS)
        .enumerate()
        .map(|(i, r)| Marker::new(i, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cw_core::hazard::HazardType;

    fn report(id: &str, urgency: i64, status: ReportStatus) -> Report {
        let mut r = Report::submitted(
            id,
            HazardType::HighWaves,
            "Tester",
            Utc.with_ymd_and_hms(2025, 9, 8, 12, 0, 0).unwrap(),
        );
        r.urgency = Urgency::new(urgency).unwrap();
        r.status = status;
        r
    }

    #[test]
    fn tier_boundaries_round_up() {
        let tier = |u| UrgencyTier::of(Urgency::new(u).unwrap()).badge_color();
        assert_eq!(tier(100), "red");
        assert_eq!(tier(80), "red");
        assert_eq!(tier(79), "yellow");
        assert_eq!(tier(60), "yellow");
        assert_eq!(tier(59), "blue");
        assert_eq!(tier(0), "blue");
    }

    #[test]
    fn low_tier_is_green_on_the_map() {
        assert_eq!(UrgencyTier::Low.marker_color(), "#16A34A");
        assert_eq!(UrgencyTier::Medium.marker_color(), "#FACC15");
    }

    #[test]
    fn positions_follow_base_and_offset() {
        for i in 0..24 {
            let base = BASE_POSITIONS[i % 8];
            let expected = Point::new(
                base.x + ((i % 3) as f64 - 1.0) * 18.0,
                base.y + (((i / 3) % 3) as f64 - 1.0) * 18.0,
            );
            assert_eq!(marker_position(i), expected, "index {i}");
        }
        assert_eq!(marker_position(0), Point::new(332.0, 509.0));
        assert_eq!(marker_position(4), Point::new(295.0, 355.0));
    }

    #[test]
    fn at_most_twelve_markers() {
        let reports: Vec<_> = (0..20)
            .map(|i| report(&format!("r{i}"), 50, ReportStatus::Unverified))
            .collect();
        let markers = layout_markers(&reports);
        assert_eq!(markers.len(), MAX_MARKERS);
        assert_eq!(markers[11].report_id, "r11");
        assert!(layout_markers(&[]).is_empty());
    }

    #[test]
    fn urgent_marker_visuals() {
        let m = Marker::new(0, &report("a", 92, ReportStatus::Unverified));
        assert_eq!(m.main_beam_radius, 35.0);
        assert_eq!(m.secondary_beam_radius, 20.0);
        assert!(m.alert_ring);
        assert_eq!(m.animation.class(), "lighthouse-urgent");
        assert_eq!(m.status_color, "#FACC15");
    }

    #[test]
    fn verified_wins_the_animation_but_not_the_beam() {
        let urgent_verified = Marker::new(0, &report("a", 92, ReportStatus::Verified));
        assert_eq!(urgent_verified.animation, BeamAnimation::Steady);
        assert_eq!(urgent_verified.main_beam_radius, 35.0);

        let calm_verified = Marker::new(0, &report("b", 40, ReportStatus::Verified));
        assert_eq!(calm_verified.main_beam_radius, 25.0);
        assert_eq!(calm_verified.status_color, "#16A34A");
        assert!(!calm_verified.alert_ring);
    }

    #[test]
    fn dismissed_flickers_with_red_dot() {
        let m = Marker::new(0, &report("c", 30, ReportStatus::Dismissed));
        assert_eq!(m.animation, BeamAnimation::Flicker);
        assert_eq!(m.main_beam_radius, 20.0);
        assert_eq!(m.status_color, "#DC2626");
        assert_eq!(m.status_dot(), m.position.offset(8.0, -8.0));
    }
}
