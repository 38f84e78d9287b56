// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value axis bounds and tick sizing.
//!
//! The algorithm pads the data range by 1%, snaps to a "nice" step from a
//! 0.2/0.5/1/2 mantissa table, and widens to the surrounding step multiples.
//! It must stay numerically exact: it decides which gridlines users see.

use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Computed value-axis bounds and tick layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOptions {
    /// Axis start, a multiple of `tick_size` unless user-fixed.
    pub min: f64,
    /// Axis end, a multiple of `tick_size` unless user-fixed.
    pub max: f64,
    /// Distance between adjacent ticks.
    pub tick_size: f64,
    /// Number of ticks, endpoints included.
    pub ticks: usize,
}

impl AxisOptions {
    /// Computes axis options for a raw data range.
    ///
    /// `fixed_min`/`fixed_max` are user-configured bounds; they only apply
    /// when they widen the computed range, and never when they would invert
    /// it. When one does apply, the tick size is re-derived from the
    /// widened span, so the tick count stays small no matter how far the
    /// fixed bound sits from the data.
    pub fn compute(min: f64, max: f64, fixed_min: Option<f64>, fixed_max: Option<f64>) -> Self {
        let span = max - min;
        let mut min1 = if min == 0.0 {
            0.0
        } else if min > 0.0 {
            min * 0.99 - span / 100.0
        } else {
            min * 1.01 - span / 100.0
        };
        let mut max1 = if max == 0.0 {
            if min == 0.0 { 1.0 } else { 0.0 }
        } else if max < 0.0 {
            max * 0.99 + span / 100.0
        } else {
            max * 1.01 + span / 100.0
        };
        if !(max1 - min1).is_finite() || max1 <= min1 {
            // Degenerate input (NaN, infinite, or inverted); fall back to a
            // unit range so the chart still renders.
            min1 = 0.0;
            max1 = 1.0;
        }

        let mut tick_size = nice_tick_size(max1 - min1);
        let mut min_value = tick_size * (min1 / tick_size).floor();
        let mut max_value = tick_size * ((max1 / tick_size).floor() + 1.0);

        let mut widened = false;
        if let Some(fixed) = fixed_min
            && fixed < min_value
            && fixed < max_value
        {
            min_value = fixed;
            widened = true;
        }
        if let Some(fixed) = fixed_max
            && fixed > max_value
            && fixed > min_value
        {
            max_value = fixed;
            widened = true;
        }
        if widened {
            tick_size = nice_tick_size(max_value - min_value);
        }

        #[expect(clippy::cast_possible_truncation, reason = "tick counts are small")]
        let ticks = ((max_value - min_value) / tick_size).round() as usize + 1;

        Self {
            min: min_value,
            max: max_value,
            tick_size,
            ticks,
        }
    }

    /// The tick grid, from `min` in `tick_size` steps.
    pub fn tick_values(&self) -> SmallVec<[f64; 16]> {
        let mut out = SmallVec::new();
        for i in 0..self.ticks {
            out.push(self.min + self.tick_size * i as f64);
        }
        out
    }
}

/// "Nice" tick step for a span: a 0.2/0.5/1/2 multiple of the span's order
/// of magnitude.
fn nice_tick_size(span: f64) -> f64 {
    let p = span.log10();
    let f = 10.0_f64.powf(p - p.floor());
    let multiplier = if f <= 2.5 {
        0.2
    } else if f <= 5.0 {
        0.5
    } else if f <= 10.0 {
        1.0
    } else {
        2.0
    };
    multiplier * 10.0_f64.powf(p.floor())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn round_bounds_enclose_data() {
        let axis = AxisOptions::compute(650.0, 1070.0, None, None);
        assert_eq!(axis.min, 600.0);
        assert_eq!(axis.max, 1100.0);
        assert_eq!(axis.tick_size, 50.0);
        assert_eq!(axis.ticks, 11);
    }

    #[test]
    fn zero_range_yields_unit_axis() {
        let axis = AxisOptions::compute(0.0, 0.0, None, None);
        assert_eq!(axis.min, 0.0);
        assert!((axis.max - 1.2).abs() < 1e-9);
        assert!((axis.tick_size - 0.2).abs() < 1e-12);
        assert_eq!(axis.ticks, 7);
    }

    #[test]
    fn negative_data() {
        let axis = AxisOptions::compute(-1070.0, -650.0, None, None);
        assert!(axis.min <= -1070.0, "axis start encloses the data");
        assert!(axis.max >= -650.0, "axis end encloses the data");
        assert!(axis.tick_size > 0.0);
    }

    #[test]
    fn bounds_are_step_multiples() {
        for (lo, hi) in [(0.3, 17.0), (12.0, 12.5), (-4.0, 9.0), (1e-3, 2e-3)] {
            let axis = AxisOptions::compute(lo, hi, None, None);
            assert!(axis.min <= lo && axis.max >= hi, "({lo}, {hi})");
            let steps = (axis.max - axis.min) / axis.tick_size;
            assert!((steps - steps.round()).abs() < 1e-6, "({lo}, {hi})");
            assert_eq!(axis.ticks, steps.round() as usize + 1, "({lo}, {hi})");
        }
    }

    #[test]
    fn fixed_bounds_only_widen() {
        let axis = AxisOptions::compute(650.0, 1070.0, Some(0.0), Some(2000.0));
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 2000.0);

        // Narrowing values are ignored.
        let axis = AxisOptions::compute(650.0, 1070.0, Some(700.0), Some(900.0));
        assert_eq!(axis.min, 600.0);
        assert_eq!(axis.max, 1100.0);

        // A fixed min past the computed max would invert the axis; ignored.
        let axis = AxisOptions::compute(650.0, 1070.0, Some(5000.0), None);
        assert_eq!(axis.min, 600.0);
    }

    #[test]
    fn far_fixed_bound_rescales_ticks() {
        // A fixed end nine orders of magnitude past the data must not keep
        // the data-derived step and ask for billions of ticks.
        let axis = AxisOptions::compute(0.0, 1.0, None, Some(1.0e9));
        assert_eq!(axis.max, 1.0e9);
        assert_eq!(axis.tick_size, 2.0e8);
        assert_eq!(axis.ticks, 6);
        assert_eq!(axis.tick_values().len(), 6);

        let axis = AxisOptions::compute(650.0, 1070.0, Some(-1.0e9), Some(1.0e9));
        assert!(axis.ticks <= 16, "ticks stay enumerable, got {}", axis.ticks);
    }

    #[test]
    fn tick_values_span_the_axis() {
        let axis = AxisOptions::compute(650.0, 1070.0, None, None);
        let ticks = axis.tick_values();
        assert_eq!(ticks.len(), axis.ticks);
        assert_eq!(ticks[0], axis.min);
        assert_eq!(ticks[ticks.len() - 1], axis.max);
    }

    #[test]
    fn degenerate_input_falls_back() {
        let axis = AxisOptions::compute(f64::NAN, f64::NAN, None, None);
        assert!(axis.min.is_finite() && axis.max.is_finite());
        assert!(axis.ticks >= 2);
    }
}
