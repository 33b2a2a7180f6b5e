//! Standalone SVG rendering of the map scene.

use crate::cluster::CLUSTERS;
use crate::geometry::{ViewTransform, VIEW_HEIGHT, VIEW_WIDTH};
use crate::heatmap::{HeatLevel, HEATMAP_ZONES};
use crate::marker::{Marker, ALERT_RING_RADIUS};
use crate::states::{state_fill, COASTLINE_PATH, INDIAN_STATES};
use std::fmt::Write;

/// Keyframes for the beam and heatmap animation classes.
pub const MAP_CSS: &str = "\
@keyframes lighthouse-flicker { 0%, 100% { opacity: 0.8; } 25% { opacity: 0.3; } 50% { opacity: 0.9; } 75% { opacity: 0.2; } }
@keyframes lighthouse-steady { 0%, 100% { opacity: 1; } 50% { opacity: 0.8; } }
@keyframes lighthouse-urgent { 0%, 100% { opacity: 1; transform: scale(1); } 50% { opacity: 0.6; transform: scale(1.2); } }
@keyframes heatmap-blink-fast { 0%, 100% { opacity: 0.8; } 50% { opacity: 0.2; } }
@keyframes heatmap-blink-slow { 0%, 100% { opacity: 0.6; } 50% { opacity: 0.1; } }
.lighthouse-flicker { animation: lighthouse-flicker 2s infinite; }
.lighthouse-steady { animation: lighthouse-steady 3s infinite; }
.lighthouse-urgent { animation: lighthouse-urgent 1s infinite; }
.heatmap-blink-fast { animation: heatmap-blink-fast 0.8s infinite; }
.heatmap-blink-slow { animation: heatmap-blink-slow 1.5s infinite; }
";

/// Everything that varies between renders.
#[derive(Debug, Clone, Default)]
pub struct MapScene<'a> {
    pub markers: &'a [Marker],
    pub heatmap_opacity: f64,
    pub transform: ViewTransform,
    pub hovered_state: Option<&'a str>,
    pub selected_state: Option<&'a str>,
}

pub fn render_map_svg(scene: &MapScene<'_>) -> String {
    let mut svg = String::with_capacity(16 * 1024);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = VIEW_WIDTH,
        h = VIEW_HEIGHT
    );
    let _ = write!(svg, "<style>{}</style>", MAP_CSS);
    build_gradients(&mut svg, scene.heatmap_opacity);
    let t = scene.transform;
    let _ = write!(svg, "<g transform=\"{}\">", t.svg());
    let _ = write!(
        svg,
        "<rect width=\"{}\" height=\"{}\" fill=\"#0f172a\"/>",
        VIEW_WIDTH, VIEW_HEIGHT
    );
    build_heatmap(&mut svg);
    build_states(&mut svg, scene.hovered_state, scene.selected_state);
    build_coastline(&mut svg);
    build_markers(&mut svg, scene.markers);
    build_clusters(&mut svg);
    svg.push_str("</g></svg>");
    svg
}

/// Only the non-interactive backdrop: water, gradients and heat zones.
///
/// The browser map draws this under its clickable states and markers.
pub fn render_heatmap_layer(heatmap_opacity: f64) -> String {
    let mut svg = String::with_capacity(4 * 1024);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"100%\" viewBox=\"0 0 {w} {h}\">",
        w = VIEW_WIDTH,
        h = VIEW_HEIGHT
    );
    build_gradients(&mut svg, heatmap_opacity);
    let _ = write!(
        svg,
        "<rect width=\"{}\" height=\"{}\" fill=\"#0f172a\"/>",
        VIEW_WIDTH, VIEW_HEIGHT
    );
    build_heatmap(&mut svg);
    svg.push_str("</svg>");
    svg
}

fn build_gradients(svg: &mut String, opacity: f64) {
    svg.push_str("<defs>");
    for level in HeatLevel::ALL {
        let _ = write!(
            svg,
            "<radialGradient id=\"{}\" cx=\"50%\" cy=\"50%\" r=\"50%\">",
            level.gradient_id()
        );
        for stop in level.gradient_stops(opacity) {
            let _ = write!(
                svg,
                "<stop offset=\"{}%\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                stop.offset, stop.color, stop.opacity
            );
        }
        svg.push_str("</radialGradient>");
    }
    svg.push_str("</defs>");
}

fn build_heatmap(svg: &mut String) {
    svg.push_str("<g class=\"heatmap-layer\">");
    for zone in &HEATMAP_ZONES {
        let _ = write!(
            svg,
            "<circle id=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"url(#{})\"",
            zone.id,
            zone.center.x,
            zone.center.y,
            zone.radius,
            zone.level.gradient_id()
        );
        if let Some(class) = zone.level.blink_class() {
            let _ = write!(svg, " class=\"{}\"", class);
        }
        svg.push_str("/>");
    }
    svg.push_str("</g>");
}

fn build_states(svg: &mut String, hovered: Option<&str>, selected: Option<&str>) {
    svg.push_str("<g>");
    for state in &INDIAN_STATES {
        let _ = write!(
            svg,
            "<path id=\"{}\" d=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"1.5\" stroke-opacity=\"0.9\"/>",
            state.id,
            state.path,
            state_fill(state.id, hovered, selected)
        );
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" fill=\"white\" font-size=\"8\" font-weight=\"500\" text-anchor=\"middle\" opacity=\"0.8\">",
            state.label.x, state.label.y
        );
        escape_into(svg, state.name);
        svg.push_str("</text>");
    }
    svg.push_str("</g>");
}

fn build_coastline(svg: &mut String) {
    let _ = write!(
        svg,
        "<g stroke=\"rgba(59, 130, 246, 0.6)\" stroke-width=\"2\" fill=\"none\"><path d=\"{}\"/></g>",
        COASTLINE_PATH
    );
}

fn build_markers(svg: &mut String, markers: &[Marker]) {
    for m in markers {
        let (x, y) = (m.position.x, m.position.y);
        let color = m.color();
        let class = m.animation.class();
        svg.push_str("<g class=\"lighthouse-group\" data-report=\"");
        escape_into(svg, &m.report_id);
        svg.push_str("\">");
        let _ = write!(
            svg,
            "<circle cx=\"{x}\" cy=\"{y}\" r=\"3\" fill=\"#374151\" stroke=\"white\" stroke-width=\"1\"/>"
        );
        let _ = write!(
            svg,
            "<circle cx=\"{x}\" cy=\"{y}\" r=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\" opacity=\"0.6\" class=\"{class}\"/>",
            m.main_beam_radius
        );
        let _ = write!(
            svg,
            "<circle cx=\"{x}\" cy=\"{y}\" r=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"1\" opacity=\"0.8\" class=\"{class}\"/>",
            m.secondary_beam_radius
        );
        let _ = write!(
            svg,
            "<circle cx=\"{x}\" cy=\"{y}\" r=\"10\" fill=\"{color}\" stroke=\"white\" stroke-width=\"3\"/>"
        );
        let dot = m.status_dot();
        let _ = write!(
            svg,
            "<circle cx=\"{}\" cy=\"{}\" r=\"4\" fill=\"{}\" stroke=\"white\" stroke-width=\"1\"/>",
            dot.x, dot.y, m.status_color
        );
        if m.alert_ring {
            let _ = write!(
                svg,
                "<circle cx=\"{x}\" cy=\"{y}\" r=\"{}\" fill=\"none\" stroke=\"#DC2626\" stroke-width=\"1\" opacity=\"0.3\"/>",
                ALERT_RING_RADIUS
            );
        }
        svg.push_str("</g>");
    }
}

fn build_clusters(svg: &mut String) {
    svg.push_str("<g>");
    for c in &CLUSTERS {
        let _ = write!(
            svg,
            "<circle id=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"0.8\" stroke=\"white\" stroke-width=\"{}\"/>",
            c.id, c.center.x, c.center.y, c.radius, c.color, c.stroke_width
        );
        let label = c.label_position();
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" fill=\"white\" font-size=\"{}\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>",
            label.x, label.y, c.font_size, c.count
        );
    }
    svg.push_str("</g>");
}

/// SVG-escape a string into the output buffer.
pub fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::layout_markers;
    use cw_core::report::{Report, CSV_OBJECT};

    fn fixture_markers() -> Vec<Marker> {
        layout_markers(&Report::parse_report_csv(CSV_OBJECT).unwrap())
    }

    #[test]
    fn svg_basic_structure() {
        let svg = render_map_svg(&MapScene::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 600 650\""));
        assert_eq!(svg.matches("<path id=").count(), 29);
    }

    #[test]
    fn svg_draws_every_marker_and_cluster() {
        let markers = fixture_markers();
        let svg = render_map_svg(&MapScene {
            markers: &markers,
            heatmap_opacity: 0.7,
            ..Default::default()
        });
        assert_eq!(svg.matches("class=\"lighthouse-group\"").count(), 8);
        // r_002 and ur_002 are the urgent ones
        assert_eq!(svg.matches("r=\"45\" fill=\"none\" stroke=\"#DC2626\"").count(), 2);
        for c in &CLUSTERS {
            assert!(svg.contains(c.id));
        }
        assert!(svg.contains(">8</text>"));
    }

    #[test]
    fn svg_gradient_uses_opacity() {
        let svg = render_map_svg(&MapScene {
            heatmap_opacity: 0.5,
            ..Default::default()
        });
        assert!(svg.contains("stop-color=\"#DC2626\" stop-opacity=\"0.4\""));
        assert!(svg.contains("class=\"heatmap-blink-fast\""));
    }

    #[test]
    fn svg_applies_transform_and_highlight() {
        let svg = render_map_svg(&MapScene {
            transform: ViewTransform::focused_on(crate::geometry::Point::new(300.0, 325.0)),
            hovered_state: Some("kerala"),
            ..Default::default()
        });
        assert!(svg.contains("transform=\"translate(-300, -325) scale(2)\""));
        assert!(svg.contains("id=\"kerala\" d=\"M240,460"));
        assert_eq!(svg.matches("rgba(59, 130, 246, 0.4)").count(), 1);
    }

    /// Read `translate(tx, ty) scale(z)` back out of the map group and
    /// apply it the way SVG does: rightmost function first.
    fn emitted_transform(svg: &str) -> (f64, f64, f64) {
        let start = svg.find("<g transform=\"translate(").unwrap() + "<g transform=\"translate(".len();
        let rest = &svg[start..];
        let (pan, rest) = rest.split_once(") scale(").unwrap();
        let (zoom, _) = rest.split_once(')').unwrap();
        let (tx, ty) = pan.split_once(", ").unwrap();
        (tx.parse().unwrap(), ty.parse().unwrap(), zoom.parse().unwrap())
    }

    #[test]
    fn focused_marker_is_drawn_at_view_centre() {
        for i in 0..12 {
            let at = crate::marker::marker_position(i);
            let svg = render_map_svg(&MapScene {
                transform: ViewTransform::focused_on(at),
                ..Default::default()
            });
            let (tx, ty, zoom) = emitted_transform(&svg);
            assert_eq!((at.x * zoom + tx, at.y * zoom + ty), (300.0, 325.0), "marker {i} at {at:?}");
        }
    }

    #[test]
    fn heatmap_layer_has_no_states_or_markers() {
        let svg = render_heatmap_layer(0.7);
        assert_eq!(svg.matches("<radialGradient").count(), 3);
        assert_eq!(svg.matches("<circle").count(), HEATMAP_ZONES.len());
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn svg_escapes_report_ids() {
        let mut markers = fixture_markers();
        markers[0].report_id = "<x&y>".into();
        let svg = render_map_svg(&MapScene {
            markers: &markers,
            ..Default::default()
        });
        assert!(svg.contains("data-report=\"&lt;x&amp;y&gt;\""));
    }
}
