// Pointer tracking: the raw position from input events plus a damped follower.
// Visual: the "pressure" bulge glides after the mouse instead of snapping to it.

use crate::types::Point;

/// Fraction divisor of the remaining distance covered per frame.
/// Not frame-time normalized: the follower is faster on faster displays.
pub const SMOOTHING_DIVISOR: f64 = 15.0;

/// Off-screen start position. Far enough that no glyph is within reach.
pub const SENTINEL: Point = Point::new(-9999.0, -9999.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingPhase {
    /// Mounted, no pointer event seen yet.
    Idle,
    /// At least one pointer event received. There is no way back to `Idle`:
    /// leaving the window keeps the last known position.
    Tracking,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    raw: Point,
    smoothed: Point,
    phase: TrackingPhase,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    pub const fn new() -> Self {
        Self { raw: SENTINEL, smoothed: SENTINEL, phase: TrackingPhase::Idle }
    }

    /// Latest observed pointer coordinates. May be called any number of times per frame.
    pub fn set_raw(&mut self, x: f64, y: f64) {
        self.raw = Point::new(x, y);
        self.phase = TrackingPhase::Tracking;
    }

    /// Advance the follower one frame: `smoothed += (raw - smoothed) / 15` per axis.
    pub fn step(&mut self) {
        self.smoothed.x += (self.raw.x - self.smoothed.x) / SMOOTHING_DIVISOR;
        self.smoothed.y += (self.raw.y - self.smoothed.y) / SMOOTHING_DIVISOR;
    }

    pub fn raw(&self) -> Point { self.raw }
    pub fn smoothed(&self) -> Point { self.smoothed }
    pub fn phase(&self) -> TrackingPhase { self.phase }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_sentinel() {
        let p = PointerState::new();
        assert_eq!(p.phase(), TrackingPhase::Idle);
        assert_eq!(p.raw(), SENTINEL);
        assert_eq!(p.smoothed(), SENTINEL);
    }

    #[test]
    fn stepping_while_idle_does_not_move() {
        let mut p = PointerState::new();
        for _ in 0..10 {
            p.step();
        }
        assert_eq!(p.smoothed(), SENTINEL);
    }

    #[test]
    fn first_move_starts_tracking_without_jumping() {
        let mut p = PointerState::new();
        p.set_raw(100.0, 50.0);
        assert_eq!(p.phase(), TrackingPhase::Tracking);
        assert_eq!(p.smoothed(), SENTINEL);

        p.step();
        let expected_x = SENTINEL.x + (100.0 - SENTINEL.x) / 15.0;
        assert_eq!(p.smoothed().x, expected_x);
    }

    #[test]
    fn error_shrinks_by_fourteen_fifteenths() {
        let mut p = PointerState::new();
        p.set_raw(0.0, 0.0);
        let mut prev_err = (p.raw().x - p.smoothed().x).abs();
        for _ in 0..50 {
            p.step();
            let err = (p.raw().x - p.smoothed().x).abs();
            assert!(err < prev_err, "monotone approach");
            let ratio = err / prev_err;
            assert!((ratio - 14.0 / 15.0).abs() < 1e-9, "ratio {ratio}");
            prev_err = err;
        }
    }

    #[test]
    fn follower_never_overshoots() {
        let mut p = PointerState::new();
        p.set_raw(42.0, -7.0);
        for _ in 0..2000 {
            p.step();
            assert!(p.smoothed().x <= 42.0);
            assert!(p.smoothed().y <= -7.0);
        }
        assert!((p.smoothed().x - 42.0).abs() < 1e-9);
        assert!((p.smoothed().y + 7.0).abs() < 1e-9);
    }

    #[test]
    fn no_reset_back_to_idle() {
        let mut p = PointerState::new();
        p.set_raw(1.0, 1.0);
        p.step();
        // No further events: phase and last position persist
        for _ in 0..5 {
            p.step();
        }
        assert_eq!(p.phase(), TrackingPhase::Tracking);
        assert_eq!(p.raw(), Point::new(1.0, 1.0));
    }
}
