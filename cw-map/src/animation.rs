//! Time-based interpolation of the view transform.
//!
//! # Invariants
//!
//! 1. `sample(t)` equals `from` for `t <= start` and `to` for `t >= end`.
//! 2. Progress is clamped to `[0.0, 1.0]`.
//! 3. A zero duration completes immediately.

use crate::geometry::ViewTransform;

/// Duration of the zoom into a marker, ms.
pub const FOCUS_DURATION_MS: u64 = 800;
/// Duration of the zoom back out, ms.
pub const RESET_DURATION_MS: u64 = 600;

/// `1 - (1 - t)^3`, clamped to the unit interval.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start_ms: u64,
    pub duration_ms: u64,
    pub from: ViewTransform,
    pub to: ViewTransform,
}

impl Tween {
    pub fn new(start_ms: u64, duration_ms: u64, from: ViewTransform, to: ViewTransform) -> Self {
        Self {
            start_ms,
            duration_ms,
            from,
            to,
        }
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.duration_ms
    }

    /// Linear progress in `[0.0, 1.0]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / self.duration_ms as f64).min(1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn sample(&self, now_ms: u64) -> ViewTransform {
        if self.is_finished(now_ms) {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_cubic(self.progress(now_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn easing_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(-2.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn tween_hits_both_ends() {
        let to = ViewTransform::focused_on(Point::new(200.0, 200.0));
        let tween = Tween::new(1_000, FOCUS_DURATION_MS, ViewTransform::IDENTITY, to);
        assert_eq!(tween.sample(0), ViewTransform::IDENTITY);
        assert_eq!(tween.sample(1_000), ViewTransform::IDENTITY);
        assert_eq!(tween.sample(1_800), to);
        assert_eq!(tween.sample(5_000), to);
        assert!(!tween.is_finished(1_799));
        assert!(tween.is_finished(1_800));
    }

    #[test]
    fn tween_midpoint_is_eased() {
        let to = ViewTransform { zoom: 3.0, pan: Point::new(0.0, 0.0) };
        let tween = Tween::new(0, 800, ViewTransform::IDENTITY, to);
        assert_eq!(tween.sample(400).zoom, 1.0 + 2.0 * 0.875);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let to = ViewTransform { zoom: 2.0, pan: Point::new(1.0, 1.0) };
        let tween = Tween::new(10, 0, ViewTransform::IDENTITY, to);
        assert_eq!(tween.progress(10), 1.0);
        assert_eq!(tween.sample(10), to);
    }
}
