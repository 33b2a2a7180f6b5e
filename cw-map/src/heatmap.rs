//! Fixed heatmap zones drawn under the state outlines.

use crate::geometry::Point;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    High,
    Medium,
    Low,
}

impl HeatLevel {
    pub const ALL: [HeatLevel; 3] = [HeatLevel::High, HeatLevel::Medium, HeatLevel::Low];

    pub fn color(self) -> &'static str {
        match self {
            HeatLevel::High => "#DC2626",
            HeatLevel::Medium => "#D97706",
            HeatLevel::Low => "#059669",
        }
    }

    /// Id of the radial gradient used to fill zones of this level.
    pub fn gradient_id(self) -> &'static str {
        match self {
            HeatLevel::High => "heatmapHigh",
            HeatLevel::Medium => "heatmapMedium",
            HeatLevel::Low => "heatmapLow",
        }
    }

    /// Opacity factors for the 0% and 50% gradient stops.
    fn stop_factors(self) -> (f64, f64) {
        match self {
            HeatLevel::High => (0.8, 0.4),
            HeatLevel::Medium => (0.7, 0.3),
            HeatLevel::Low => (0.5, 0.2),
        }
    }

    pub fn blink_class(self) -> Option<&'static str> {
        match self {
            HeatLevel::High => Some("heatmap-blink-fast"),
            HeatLevel::Medium => Some("heatmap-blink-slow"),
            HeatLevel::Low => None,
        }
    }

    /// The three stops of this level's gradient at a global opacity.
    /// The opacity is clamped to 0..=1; the outer stop is always clear.
    pub fn gradient_stops(self, opacity: f64) -> [GradientStop; 3] {
        let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        let (inner, middle) = self.stop_factors();
        let color = self.color();
        [
            GradientStop { offset: 0, color, opacity: opacity * inner },
            GradientStop { offset: 50, color, opacity: opacity * middle },
            GradientStop { offset: 100, color, opacity: 0.0 },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    /// Percent along the radius.
    pub offset: u8,
    pub color: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapZone {
    pub id: &'static str,
    pub center: Point,
    pub radius: f64,
    pub intensity: u8,
    pub level: HeatLevel,
}

pub static HEATMAP_ZONES: [HeatmapZone; 5] = [
    HeatmapZone { id: "zone1", center: Point::new(380.0, 540.0), radius: 60.0, intensity: 85, level: HeatLevel::High },
    HeatmapZone { id: "zone2", center: Point::new(255.0, 500.0), radius: 45.0, intensity: 65, level: HeatLevel::Medium },
    HeatmapZone { id: "zone3", center: Point::new(190.0, 320.0), radius: 35.0, intensity: 40, level: HeatLevel::Low },
    HeatmapZone { id: "zone4", center: Point::new(440.0, 285.0), radius: 40.0, intensity: 70, level: HeatLevel::Medium },
    HeatmapZone { id: "zone5", center: Point::new(470.0, 250.0), radius: 30.0, intensity: 45, level: HeatLevel::Low },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stops_scale_with_opacity() {
        let stops = HeatLevel::High.gradient_stops(0.5);
        assert!(close(stops[0].opacity, 0.4));
        assert!(close(stops[1].opacity, 0.2));
        assert_eq!(stops[2].opacity, 0.0);
        assert_eq!(stops[1].offset, 50);

        let medium = HeatLevel::Medium.gradient_stops(1.0);
        assert!(close(medium[0].opacity, 0.7) && close(medium[1].opacity, 0.3));
        let low = HeatLevel::Low.gradient_stops(1.0);
        assert!(close(low[0].opacity, 0.5) && close(low[1].opacity, 0.2));
    }

    #[test]
    fn opacity_is_clamped() {
        let over = HeatLevel::High.gradient_stops(3.0);
        assert!(close(over[0].opacity, 0.8));
        let under = HeatLevel::Low.gradient_stops(-1.0);
        assert_eq!(under[0].opacity, 0.0);
        let nan = HeatLevel::Medium.gradient_stops(f64::NAN);
        assert_eq!(nan[0].opacity, 0.0);
    }

    #[test]
    fn blink_classes() {
        assert_eq!(HeatLevel::High.blink_class(), Some("heatmap-blink-fast"));
        assert_eq!(HeatLevel::Medium.blink_class(), Some("heatmap-blink-slow"));
        assert_eq!(HeatLevel::Low.blink_class(), None);
    }

    #[test]
    fn zone_table() {
        assert_eq!(HEATMAP_ZONES.len(), 5);
        let high: Vec<_> = HEATMAP_ZONES
            .iter()
            .filter(|z| z.level == HeatLevel::High)
            .map(|z| z.id)
            .collect();
        assert_eq!(high, vec!["zone1"]);
    }
}
