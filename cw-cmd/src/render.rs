//! Static SVG export of the dashboard map.

use cw_db::{Database, HazardRepository};
use cw_map::animation::FOCUS_DURATION_MS;
use cw_map::svg::{render_map_svg, MapScene};
use cw_map::{layout_markers, MapController, ViewTransform};
use log::info;

/// Render the fixture reports, optionally zoomed onto one marker.
pub fn render_map(db: &Database, heatmap_opacity: f64, focus: Option<&str>) -> anyhow::Result<String> {
    if !(0.0..=1.0).contains(&heatmap_opacity) {
        anyhow::bail!("heatmap opacity must be between 0 and 1, got {}", heatmap_opacity);
    }

    let reports = db.reports()?;
    let markers = layout_markers(&reports);

    let mut map = MapController::new();
    if let Some(id) = focus {
        let marker = markers
            .iter()
            .find(|m| m.report_id == id)
            .ok_or_else(|| anyhow::anyhow!("report {} has no marker on the map", id))?;
        map.select_marker(id, marker.position, 0);
        map.tick(FOCUS_DURATION_MS);
    }
    let transform: ViewTransform = map.transform();

    Ok(render_map_svg(&MapScene {
        markers: &markers,
        heatmap_opacity,
        transform,
        hovered_state: None,
        selected_state: None,
    }))
}

pub fn run_render_map(out: &str, heatmap_opacity: f64, focus: Option<&str>) -> anyhow::Result<()> {
    let db = Database::with_fixtures()?;
    let svg = render_map(&db, heatmap_opacity, focus)?;
    std::fs::write(out, &svg)?;
    info!("[CW] render: wrote {} bytes to {}", svg.len(), out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_fixture_marker() {
        let db = Database::with_fixtures().unwrap();
        let svg = render_map(&db, 0.7, None).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("class=\"lighthouse-group\"").count(), 8, "one lighthouse per report");
        assert!(svg.contains("data-report=\"r_001\""));
    }

    #[test]
    fn focus_zooms_in() {
        let db = Database::with_fixtures().unwrap();
        let plain = render_map(&db, 0.7, None).unwrap();
        let focused = render_map(&db, 0.7, Some("r_001")).unwrap();
        assert_ne!(plain, focused);
        assert!(focused.contains("scale(2)"), "focused transform applied");
    }

    #[test]
    fn rejects_bad_input() {
        let db = Database::with_fixtures().unwrap();
        assert!(render_map(&db, 1.5, None).is_err());
        assert!(render_map(&db, 0.5, Some("r_missing")).is_err());
    }
}
