//! Map model for the CoastalWatch dashboard.
//!
//! Everything the interactive India map needs apart from the DOM: the
//! static state outlines, heatmap zones and cluster bubbles, marker layout
//! and styling for reports, the zoom/pan animation state machine, and a
//! standalone SVG renderer used by the CLI export.
//!
//! All coordinates are in a 600×650 SVG space.
//!
//! ```rust
//! use cw_map::{MapController, MapEvent, marker_position};
//!
//! let mut map = MapController::new();
//! map.select_marker("r_001", marker_position(0), 0);
//! assert!(map.tick(800).is_empty());
//! assert_eq!(map.tick(1_000), vec![MapEvent::OpenDetails("r_001".into())]);
//! ```

pub mod animation;
pub mod cluster;
pub mod geometry;
pub mod heatmap;
pub mod marker;
pub mod state_panel;
pub mod states;
pub mod svg;
pub mod viewport;

pub use geometry::{Point, ViewTransform};
pub use marker::{layout_markers, marker_position, Marker, UrgencyTier};
pub use svg::{render_heatmap_layer, render_map_svg, MapScene, MAP_CSS};
pub use viewport::{MapController, MapEvent};
