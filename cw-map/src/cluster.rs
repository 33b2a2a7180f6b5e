//! Fixed report-cluster bubbles.

use crate::geometry::Point;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cluster {
    pub id: &'static str,
    pub center: Point,
    pub radius: f64,
    pub count: u32,
    pub color: &'static str,
    pub stroke_width: f64,
    /// Drop-shadow blur, px.
    pub glow: f64,
    pub font_size: f64,
    pub class: Option<&'static str>,
}

impl Cluster {
    /// Baseline for the count label.
    pub fn label_position(&self) -> Point {
        self.center.offset(0.0, 6.0)
    }
}

pub static CLUSTERS: [Cluster; 3] = [
    Cluster {
        id: "cluster_chennai",
        center: Point::new(380.0, 540.0),
        radius: 32.0,
        count: 8,
        color: "#DC2626",
        stroke_width: 3.0,
        glow: 15.0,
        font_size: 16.0,
        class: Some("animate-pulse"),
    },
    Cluster {
        id: "cluster_kochi",
        center: Point::new(255.0, 500.0),
        radius: 24.0,
        count: 3,
        color: "#D97706",
        stroke_width: 2.0,
        glow: 12.0,
        font_size: 14.0,
        class: Some("heatmap-blink-slow"),
    },
    Cluster {
        id: "cluster_gujarat",
        center: Point::new(190.0, 320.0),
        radius: 18.0,
        count: 2,
        color: "#059669",
        stroke_width: 2.0,
        glow: 8.0,
        font_size: 12.0,
        class: None,
    },
];

pub fn is_cluster_id(id: &str) -> bool {
    CLUSTERS.iter().any(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_clusters_with_counts() {
        let counts: Vec<_> = CLUSTERS.iter().map(|c| (c.id, c.count)).collect();
        assert_eq!(
            counts,
            vec![("cluster_chennai", 8), ("cluster_kochi", 3), ("cluster_gujarat", 2)]
        );
    }

    #[test]
    fn label_sits_below_centre() {
        assert_eq!(CLUSTERS[0].label_position(), Point::new(380.0, 546.0));
    }

    #[test]
    fn cluster_ids_are_recognised() {
        assert!(is_cluster_id("cluster_kochi"));
        assert!(!is_cluster_id("r_001"));
    }
}
