//! SVG-space coordinates and the zoom/pan transform.

use serde::Serialize;

/// Width of the map's SVG coordinate space.
pub const VIEW_WIDTH: f64 = 600.0;
/// Height of the map's SVG coordinate space.
pub const VIEW_HEIGHT: f64 = 650.0;
/// Centre of the view; a focused point is panned here.
pub const VIEW_CENTER: Point = Point::new(300.0, 325.0);

/// Zoom applied when a marker is focused.
pub const FOCUS_ZOOM: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn lerp(self, to: Point, t: f64) -> Self {
        Self::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }
}

pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Zoom and pan applied to the whole map with its origin at the top left:
/// a point `p` lands at `zoom * p + pan`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        zoom: 1.0,
        pan: Point::new(0.0, 0.0),
    };

    /// Transform that zooms to [`FOCUS_ZOOM`] with `target` at the view centre.
    pub fn focused_on(target: Point) -> Self {
        ViewTransform {
            zoom: FOCUS_ZOOM,
            pan: Point::new(
                -(target.x * FOCUS_ZOOM - VIEW_CENTER.x),
                -(target.y * FOCUS_ZOOM - VIEW_CENTER.y),
            ),
        }
    }

    pub fn lerp(self, to: ViewTransform, t: f64) -> Self {
        ViewTransform {
            zoom: lerp(self.zoom, to.zoom, t),
            pan: self.pan.lerp(to.pan, t),
        }
    }

    /// Where `p` ends up on screen.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }

    /// CSS transform string for the map layer (`transform-origin: 0 0`).
    /// Functions apply right to left, so the scale runs first.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }

    /// Same transform as an SVG `transform` attribute value.
    pub fn svg(&self) -> String {
        format!("translate({}, {}) scale({})", self.pan.x, self.pan.y, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_centres_the_target() {
        let t = ViewTransform::focused_on(Point::new(350.0, 527.0));
        assert_eq!(t.zoom, 2.0);
        assert_eq!(t.pan, Point::new(-400.0, -729.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = ViewTransform::IDENTITY;
        let b = ViewTransform::focused_on(Point::new(100.0, 100.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.zoom, 1.5);
    }

    #[test]
    fn css_string() {
        assert_eq!(ViewTransform::IDENTITY.css(), "translate(0px, 0px) scale(1)");
        let t = ViewTransform::focused_on(Point::new(350.0, 527.0));
        assert_eq!(t.css(), "translate(-400px, -729px) scale(2)");
        assert_eq!(t.svg(), "translate(-400, -729) scale(2)");
    }

    #[test]
    fn focused_point_lands_on_view_centre() {
        for target in [Point::new(332.0, 509.0), Point::new(0.0, 0.0), Point::new(600.0, 650.0)] {
            assert_eq!(ViewTransform::focused_on(target).apply(target), VIEW_CENTER, "{target:?}");
        }
        assert_eq!(ViewTransform::IDENTITY.apply(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
    }
}
