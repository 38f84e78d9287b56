// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting for axis labels and tooltips.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats numeric values for user-visible text.
///
/// Hosts can supply their own implementation to apply locale or
/// measure-specific formatting; the pipeline only ever calls [`format`].
///
/// [`format`]: ValueFormatter::format
pub trait ValueFormatter {
    /// Renders `value` as display text.
    fn format(&self, value: f64) -> String;
}

/// Fixed-precision formatter, trimming trailing zeros when no precision is
/// configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultValueFormatter {
    /// Decimal places to print. `None` prints up to two and trims.
    pub precision: Option<usize>,
}

impl ValueFormatter for DefaultValueFormatter {
    fn format(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format!("{value:.p$}"),
            None => trim_trailing_zeros(format!("{value:.2}")),
        }
    }
}

fn trim_trailing_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Formats a tick value with just enough decimals for the tick step.
///
/// A step of `0.2` prints one decimal, `25.0` prints none. This keeps a tick
/// grid's labels uniform instead of mixing `0.6000000000000001` in with `1`.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    trim_float_noise(value, decimals)
}

fn trim_float_noise(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_formatter_trims() {
        let f = DefaultValueFormatter::default();
        assert_eq!(f.format(1.0), "1");
        assert_eq!(f.format(1.5), "1.5");
        assert_eq!(f.format(1.25), "1.25");
    }

    #[test]
    fn fixed_precision() {
        let f = DefaultValueFormatter { precision: Some(3) };
        assert_eq!(f.format(1.0), "1.000");
    }

    #[test]
    fn tick_decimals_follow_step() {
        assert_eq!(format_tick_with_step(600.0, 50.0), "600");
        assert_eq!(format_tick_with_step(0.6000000000000001, 0.2), "0.6");
        assert_eq!(format_tick_with_step(1.25, 0.05), "1.25");
    }
}
