// Distance -> intensity mapping for the three variable-font axes.
// Visual: glyphs right under the pointer get wide/heavy/slanted; glyphs half
// a line away (or further) sit at their floor values.

use crate::types::AxisValues;

/// One independently toggleable visual dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Weight,
    Italic,
}

impl Axis {
    /// `(minVal, maxVal)` passed to [`falloff`]. Peak is `min + max` at distance 0.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Axis::Width => (75.0, 125.0),
            Axis::Weight => (400.0, 900.0),
            Axis::Italic => (0.0, 1.0),
        }
    }

    /// Value used when the axis is switched off.
    pub const fn neutral(self) -> f64 {
        match self {
            Axis::Width => 100.0,
            Axis::Weight => 700.0,
            Axis::Italic => 0.0,
        }
    }
}

/// Which axes follow the pointer. Fixed per mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisToggles {
    pub width: bool,
    pub weight: bool,
    pub italic: bool,
}

impl AxisToggles {
    pub const fn enabled(self, axis: Axis) -> bool {
        match axis {
            Axis::Width => self.width,
            Axis::Weight => self.weight,
            Axis::Italic => self.italic,
        }
    }
}

/// Triangular falloff, floor-clamped at `min_val`.
///
/// `max_dist` is the normalization radius (half the container width). A zero
/// or non-finite radius cannot scale anything, so the result is the floor.
pub fn falloff(distance: f64, min_val: f64, max_val: f64, max_dist: f64) -> f64 {
    if !(max_dist > 0.0) || !max_dist.is_finite() || !distance.is_finite() {
        return min_val;
    }
    let raw = max_val - (max_val * distance / max_dist).abs();
    (raw + min_val).max(min_val)
}

/// Mapped value for one axis, before integer/decimal snapping.
pub fn axis_value(axis: Axis, toggles: AxisToggles, distance: f64, max_dist: f64) -> f64 {
    if !toggles.enabled(axis) {
        return axis.neutral();
    }
    let (min_val, max_val) = axis.range();
    falloff(distance, min_val, max_val, max_dist)
}

/// Full triple for a glyph at `distance` from the smoothed pointer.
/// Width and weight are floored; italic is rounded to 2 decimals.
pub fn axis_values(distance: f64, max_dist: f64, toggles: AxisToggles) -> AxisValues {
    AxisValues {
        wdth: axis_value(Axis::Width, toggles, distance, max_dist).floor() as i32,
        wght: axis_value(Axis::Weight, toggles, distance, max_dist).floor() as i32,
        ital: round2(axis_value(Axis::Italic, toggles, distance, max_dist)),
    }
}

/// What every glyph shows before the pointer has ever come near.
pub fn floor_values(toggles: AxisToggles) -> AxisValues {
    axis_values(f64::INFINITY, 0.0, toggles)
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: AxisToggles = AxisToggles { width: true, weight: true, italic: true };

    #[test]
    fn peak_at_zero_distance() {
        assert_eq!(falloff(0.0, 75.0, 125.0, 100.0), 200.0);
        assert_eq!(falloff(0.0, 400.0, 900.0, 100.0), 1300.0);
        assert_eq!(falloff(0.0, 0.0, 1.0, 100.0), 1.0);

        let v = axis_values(0.0, 100.0, ALL);
        assert_eq!(v, AxisValues { wdth: 200, wght: 1300, ital: 1.0 });
    }

    #[test]
    fn floor_at_and_beyond_radius() {
        for d in [100.0, 100.5, 250.0, 1.0e9] {
            let v = axis_values(d, 100.0, ALL);
            assert_eq!(v, AxisValues { wdth: 75, wght: 400, ital: 0.0 }, "d = {d}");
        }
    }

    #[test]
    fn falls_off_linearly_inside_radius() {
        // Halfway: min + max / 2
        assert_eq!(falloff(50.0, 400.0, 900.0, 100.0), 850.0);
        let v = axis_values(50.0, 100.0, ALL);
        assert_eq!(v.wdth, 137); // 137.5 floored
        assert_eq!(v.wght, 850);
        assert_eq!(v.ital, 0.5);
    }

    #[test]
    fn italic_rounds_to_two_decimals() {
        // 1 - 1/3 = 0.666..
        let v = axis_values(100.0 / 3.0, 100.0, ALL);
        assert_eq!(v.ital, 0.67);
    }

    #[test]
    fn disabled_axes_are_neutral_at_any_distance() {
        let none = AxisToggles { width: false, weight: false, italic: false };
        for d in [0.0, 10.0, 100.0, 1.0e6] {
            assert_eq!(axis_values(d, 100.0, none), AxisValues { wdth: 100, wght: 700, ital: 0.0 });
        }

        let only_weight = AxisToggles { width: false, weight: true, italic: false };
        let v = axis_values(0.0, 100.0, only_weight);
        assert_eq!(v, AxisValues { wdth: 100, wght: 1300, ital: 0.0 });
    }

    #[test]
    fn zero_width_container_stays_finite() {
        for d in [0.0, 1.0, 1.0e6, f64::INFINITY] {
            for max_dist in [0.0, -1.0, f64::NAN, f64::INFINITY] {
                let r = falloff(d, 75.0, 125.0, max_dist);
                assert!(r.is_finite());
                assert_eq!(r, 75.0);
            }
        }
        assert_eq!(axis_values(0.0, 0.0, ALL), AxisValues { wdth: 75, wght: 400, ital: 0.0 });
    }

    #[test]
    fn floor_values_respect_toggles() {
        let t = AxisToggles { width: true, weight: false, italic: true };
        assert_eq!(floor_values(t), AxisValues { wdth: 75, wght: 700, ital: 0.0 });
    }
}
