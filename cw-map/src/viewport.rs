//! Interactive map state: zoom/pan animation, marker and state selection.
//!
//! The controller owns no timers. The host calls [`MapController::tick`]
//! with the current time (an animation frame in the browser, a loop in the
//! CLI, plain numbers in tests) and acts on the returned [`MapEvent`]s.
//!
//! Starting a new animation while one is running replaces it; the new one
//! starts from wherever the old one had got to.

use crate::animation::{Tween, FOCUS_DURATION_MS, RESET_DURATION_MS};
use crate::geometry::{Point, ViewTransform};

/// Delay between the zoom landing on a marker and the details request.
pub const DETAILS_DELAY_MS: u64 = 200;

/// The "Reset View" button shows while zoom is above this.
pub const RESET_BUTTON_ZOOM: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// Ask the host to open the details panel for a report.
    OpenDetails(String),
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveTween {
    tween: Tween,
    /// Report whose details open once this tween lands.
    focus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapController {
    transform: ViewTransform,
    active: Option<ActiveTween>,
    /// (due time, report id) of a pending details request.
    details_due: Option<(u64, String)>,
    selected_marker: Option<String>,
    selected_state: Option<String>,
    hovered_state: Option<String>,
}

impl MapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Nothing is animating and no details request is pending.
    pub fn is_settled(&self) -> bool {
        self.active.is_none() && self.details_due.is_none()
    }

    pub fn show_reset_button(&self) -> bool {
        self.transform.zoom > RESET_BUTTON_ZOOM
    }

    pub fn selected_marker(&self) -> Option<&str> {
        self.selected_marker.as_deref()
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.selected_state.as_deref()
    }

    pub fn hovered_state(&self) -> Option<&str> {
        self.hovered_state.as_deref()
    }

    /// Start zooming to a marker at `at`.
    pub fn select_marker(&mut self, report_id: &str, at: Point, now_ms: u64) {
        log::debug!("[CW] map: focus {} at ({}, {})", report_id, at.x, at.y);
        self.selected_marker = Some(report_id.to_string());
        self.start(
            now_ms,
            FOCUS_DURATION_MS,
            ViewTransform::focused_on(at),
            Some(report_id.to_string()),
        );
    }

    /// Start zooming back out and clear the selected marker.
    pub fn reset(&mut self, now_ms: u64) {
        self.selected_marker = None;
        self.start(now_ms, RESET_DURATION_MS, ViewTransform::IDENTITY, None);
    }

    fn start(&mut self, now_ms: u64, duration_ms: u64, to: ViewTransform, focus: Option<String>) {
        // Settle to where the running animation is now before replacing it.
        if let Some(active) = &self.active {
            self.transform = active.tween.sample(now_ms);
        }
        self.details_due = None;
        self.active = Some(ActiveTween {
            tween: Tween::new(now_ms, duration_ms, self.transform, to),
            focus,
        });
    }

    /// Advance to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<MapEvent> {
        let mut events = Vec::new();

        if let Some(active) = &self.active {
            self.transform = active.tween.sample(now_ms);
            if active.tween.is_finished(now_ms) {
                let end_ms = active.tween.end_ms();
                if let Some(id) = active.focus.clone() {
                    self.details_due = Some((end_ms + DETAILS_DELAY_MS, id));
                }
                self.active = None;
            }
        }

        if let Some((due, _)) = &self.details_due {
            if now_ms >= *due {
                if let Some((_, id)) = self.details_due.take() {
                    events.push(MapEvent::OpenDetails(id));
                }
            }
        }

        events
    }

    pub fn hover_state(&mut self, id: Option<&str>) {
        self.hovered_state = id.map(str::to_string);
    }

    pub fn select_state(&mut self, id: Option<&str>) {
        self.selected_state = id.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::marker_position;

    /// Tick every 16ms from `from` to `to` inclusive, collecting events.
    fn run(map: &mut MapController, from: u64, to: u64) -> Vec<(u64, MapEvent)> {
        let mut out = Vec::new();
        let mut t = from;
        while t <= to {
            out.extend(map.tick(t).into_iter().map(|e| (t, e)));
            t += 16;
        }
        out.extend(map.tick(to).into_iter().map(|e| (to, e)));
        out
    }

    #[test]
    fn focus_lands_on_the_marker() {
        let mut map = MapController::new();
        let at = marker_position(2);
        map.select_marker("r_003", at, 0);
        map.tick(800);
        let t = map.transform();
        assert_eq!(t.zoom, 2.0);
        assert_eq!(t.pan, Point::new(-(at.x * 2.0 - 300.0), -(at.y * 2.0 - 325.0)));
        assert!(!map.is_animating());
        assert!(map.show_reset_button());
    }

    #[test]
    fn focus_from_every_marker_slot() {
        for i in 0..12 {
            let mut map = MapController::new();
            let at = marker_position(i);
            map.select_marker("r", at, 100);
            run(&mut map, 100, 1_200);
            assert_eq!(map.transform(), ViewTransform::focused_on(at), "slot {i}");
        }
    }

    #[test]
    fn details_open_200ms_after_landing() {
        let mut map = MapController::new();
        map.select_marker("r_001", Point::new(350.0, 527.0), 1_000);
        assert!(map.tick(1_800).is_empty(), "zoom just landed");
        assert!(map.tick(1_999).is_empty());
        assert_eq!(map.tick(2_000), vec![MapEvent::OpenDetails("r_001".into())]);
        assert!(map.tick(2_100).is_empty(), "fires once");
    }

    #[test]
    fn late_tick_still_opens_details_once() {
        let mut map = MapController::new();
        map.select_marker("r_001", Point::new(350.0, 527.0), 0);
        assert_eq!(map.tick(5_000), vec![MapEvent::OpenDetails("r_001".into())]);
        assert!(map.tick(5_001).is_empty());
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut map = MapController::new();
        map.select_marker("r_001", Point::new(350.0, 527.0), 0);
        map.tick(1_000);
        map.reset(1_000);
        assert!(map.selected_marker().is_none());
        map.tick(1_300);
        assert!(map.transform().zoom > 1.0, "still easing out");
        map.tick(1_600);
        assert_eq!(map.transform(), ViewTransform::IDENTITY);
        assert!(!map.show_reset_button());
    }

    #[test]
    fn reset_cancels_pending_details() {
        let mut map = MapController::new();
        map.select_marker("r_001", Point::new(350.0, 527.0), 0);
        map.tick(800);
        map.reset(900);
        let events = run(&mut map, 900, 2_000);
        assert!(events.is_empty());
    }

    #[test]
    fn second_click_supersedes_from_current_transform() {
        let mut map = MapController::new();
        let first = Point::new(350.0, 527.0);
        let second = Point::new(190.0, 285.0);
        map.select_marker("a", first, 0);
        map.tick(400);
        let midway = map.transform();
        assert!(midway.zoom > 1.0 && midway.zoom < 2.0);

        map.select_marker("b", second, 400);
        // No jump at the moment of the click.
        map.tick(400);
        assert_eq!(map.transform(), midway);

        let events = run(&mut map, 400, 2_000);
        assert_eq!(events.len(), 1, "only the second marker opens: {events:?}");
        let (at, event) = &events[0];
        assert_eq!(*event, MapEvent::OpenDetails("b".into()));
        assert!((1_400..1_416).contains(at), "opened at {at}");
        assert_eq!(map.transform(), ViewTransform::focused_on(second));
        assert_eq!(map.selected_marker(), Some("b"));
    }

    #[test]
    fn settles_only_after_details_fire() {
        let mut map = MapController::new();
        assert!(map.is_settled());
        map.select_marker("r_001", Point::new(350.0, 527.0), 0);
        map.tick(800);
        assert!(!map.is_animating());
        assert!(!map.is_settled(), "details still pending");
        map.tick(1_000);
        assert!(map.is_settled());
    }

    #[test]
    fn reset_button_threshold() {
        let mut map = MapController::new();
        assert!(!map.show_reset_button());
        map.select_marker("a", Point::new(300.0, 325.0), 0);
        // ease(16/800) is tiny; zoom barely moves
        map.tick(16);
        assert!(!map.show_reset_button());
        map.tick(400);
        assert!(map.show_reset_button());
    }

    #[test]
    fn state_hover_and_selection() {
        let mut map = MapController::new();
        map.hover_state(Some("kerala"));
        map.select_state(Some("goa"));
        assert_eq!(map.hovered_state(), Some("kerala"));
        assert_eq!(map.selected_state(), Some("goa"));
        map.hover_state(None);
        map.select_state(None);
        assert!(map.hovered_state().is_none() && map.selected_state().is_none());
    }
}
