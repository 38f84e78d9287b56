// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box/whisker statistics for one category's sample set.
//!
//! Quartiles use the linear-interpolation rank method with a convention
//! switch matching the two common spreadsheet definitions. Whisker bounds
//! are a separate policy layered on top; they never alter the raw quartiles.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Quartile rank convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuartileMode {
    /// Ranks over `N + 1` positions; quartiles are undefined for very small
    /// sample counts. Matches spreadsheet `QUARTILE.EXC`.
    Exclusive,
    /// Ranks over `N - 1` positions; defined for any non-empty input.
    /// Matches spreadsheet `QUARTILE.INC`.
    #[default]
    Inclusive,
}

impl QuartileMode {
    /// The user-visible convention label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exclusive => "Exclusive",
            Self::Inclusive => "Inclusive",
        }
    }
}

/// Whisker bound policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WhiskerMode {
    /// Whiskers at the raw data extremes.
    #[default]
    MinMax,
    /// Whiskers at the most extreme data points within 1.5·IQR of the box.
    Standard,
    /// Whiskers at the 1.5·IQR fence values themselves, which may lie
    /// outside the data range.
    Iqr,
    /// Whiskers at user-chosen percentiles.
    Custom,
}

/// Statistics configuration for one aggregation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsConfig {
    /// Quartile rank convention.
    pub quartile_mode: QuartileMode,
    /// Whisker bound policy.
    pub whisker_mode: WhiskerMode,
    /// Lower whisker percentile for [`WhiskerMode::Custom`], in percent.
    pub lower_pct: f64,
    /// Upper whisker percentile for [`WhiskerMode::Custom`], in percent.
    pub higher_pct: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            quartile_mode: QuartileMode::default(),
            whisker_mode: WhiskerMode::default(),
            lower_pct: 5.0,
            higher_pct: 95.0,
        }
    }
}

/// Derived statistics for one box. Immutable once computed.
///
/// `min` and `max` are the resolved whisker bounds, not necessarily data
/// extremes; `quartile1`/`quartile3` are always the raw-data quartiles and
/// are `None` when the convention leaves them undefined for small `N`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxValues {
    /// Lower whisker bound.
    pub min: f64,
    /// Upper whisker bound.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (second quartile).
    pub median: f64,
    /// First quartile, when defined.
    pub quartile1: Option<f64>,
    /// Third quartile, when defined.
    pub quartile3: Option<f64>,
    /// Sample count.
    pub samples: usize,
    /// Sample sum.
    pub total: f64,
}

/// User-visible label strings describing how a box was computed.
///
/// These are contract text shown verbatim in tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxLabels {
    /// Label for the lower whisker bound row.
    pub min_value_label: String,
    /// Label for the upper whisker bound row.
    pub max_value_label: String,
    /// Quartile convention, `"Exclusive"` or `"Inclusive"`.
    pub quartile_value: String,
    /// Whisker convention, e.g. `"< 1.5IQR"` or `"Min/Max"`.
    pub whisker_value: String,
    /// Sampling column names, filled in by the series builder.
    pub sample_columns: Vec<String>,
}

/// Classification of a single sample against its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointClass {
    /// Within the resolved whisker bounds, inclusive.
    Inner,
    /// Strictly outside the resolved whisker bounds.
    Outlier,
}

/// Computes box statistics and labels for an ascending sample slice.
///
/// Returns `None` for empty input. When either quartile is undefined the
/// whisker policy falls back to [`WhiskerMode::MinMax`] regardless of the
/// configured mode, and the labels reflect the fallback.
pub fn compute_box(sorted: &[f64], config: &StatsConfig) -> Option<(BoxValues, BoxLabels)> {
    if sorted.is_empty() {
        return None;
    }
    let n = sorted.len();
    let total: f64 = sorted.iter().sum();
    let mean = total / n as f64;
    let median = rank_value(sorted, quartile_rank(config.quartile_mode, 0.5, n))
        .unwrap_or(sorted[n / 2]);
    let quartile1 = rank_value(sorted, quartile_rank(config.quartile_mode, 0.25, n));
    let quartile3 = rank_value(sorted, quartile_rank(config.quartile_mode, 0.75, n));

    let mode = match (quartile1, quartile3) {
        (Some(_), Some(_)) => config.whisker_mode,
        _ => WhiskerMode::MinMax,
    };

    let (min, max, min_label, max_label, whisker_label) = match (mode, quartile1, quartile3) {
        (WhiskerMode::Standard, Some(q1), Some(q3)) => {
            let iqr = q3 - q1;
            let lo_fence = q1 - 1.5 * iqr;
            let hi_fence = q3 + 1.5 * iqr;
            let lo = sorted
                .iter()
                .copied()
                .find(|v| *v >= lo_fence)
                .unwrap_or(sorted[0]);
            let hi = sorted
                .iter()
                .rev()
                .copied()
                .find(|v| *v <= hi_fence)
                .unwrap_or(sorted[n - 1]);
            (lo, hi, String::from("Minimum"), String::from("Maximum"), String::from("< 1.5IQR"))
        }
        (WhiskerMode::Iqr, Some(q1), Some(q3)) => {
            let iqr = q3 - q1;
            (
                q1 - 1.5 * iqr,
                q3 + 1.5 * iqr,
                String::from("Q1 - 1.5 x IQR"),
                String::from("Q3 + 1.5 x IQR"),
                String::from("= 1.5IQR"),
            )
        }
        (WhiskerMode::Custom, Some(_), Some(_)) => {
            let positions = n as f64 + 1.0;
            let lower = config.lower_pct.max((100.0 / positions).ceil()).min(100.0);
            let higher = config.higher_pct.min((100.0 - 100.0 / positions).floor()).max(0.0);
            let lo = rank_value_lenient(sorted, lower / 100.0 * positions);
            let hi = rank_value_lenient(sorted, higher / 100.0 * positions);
            (
                lo,
                hi,
                format!("Lower: {}%", fmt_pct(lower)),
                format!("Higher: {}%", fmt_pct(higher)),
                String::from("Custom"),
            )
        }
        _ => (
            sorted[0],
            sorted[n - 1],
            String::from("Minimum"),
            String::from("Maximum"),
            String::from("Min/Max"),
        ),
    };

    let values = BoxValues {
        min,
        max,
        mean,
        median,
        quartile1,
        quartile3,
        samples: n,
        total,
    };
    let labels = BoxLabels {
        min_value_label: min_label,
        max_value_label: max_label,
        quartile_value: String::from(config.quartile_mode.label()),
        whisker_value: whisker_label,
        sample_columns: Vec::new(),
    };
    Some((values, labels))
}

/// Classifies one sample against the resolved whisker bounds.
///
/// Bounds are inclusive: a value exactly on a whisker is an inner point.
pub fn classify(value: f64, values: &BoxValues) -> PointClass {
    if value < values.min || value > values.max {
        PointClass::Outlier
    } else {
        PointClass::Inner
    }
}

/// 1-based interpolation rank for the target fraction `f`.
fn quartile_rank(mode: QuartileMode, f: f64, n: usize) -> f64 {
    let (corr, corr1) = match mode {
        QuartileMode::Exclusive => (1.0, 0.0),
        QuartileMode::Inclusive => (-1.0, 1.0),
    };
    f * (n as f64 + corr) + corr1
}

/// Interpolated value at a 1-based rank; `None` when the rank needs a
/// position outside `1..=N`.
fn rank_value(sorted: &[f64], rank: f64) -> Option<f64> {
    let low = rank.floor();
    if low < 1.0 || low > sorted.len() as f64 {
        return None;
    }
    #[expect(clippy::cast_possible_truncation, reason = "bounds-checked above")]
    let idx = low as usize;
    let base = sorted[idx - 1];
    let frac = rank - low;
    if frac == 0.0 {
        return Some(base);
    }
    let next = *sorted.get(idx)?;
    Some(base + frac * (next - base))
}

/// Like [`rank_value`], but out-of-range positions read as `0.0`.
///
/// A percentile of exactly 100 produces a rank of `N + 1`, whose base
/// position is past the array; that yields `0.0` here. Long-standing output
/// behavior, kept as is (see DESIGN.md).
fn rank_value_lenient(sorted: &[f64], rank: f64) -> f64 {
    let low = rank.floor();
    #[expect(clippy::cast_possible_truncation, reason = "clamped percentiles keep rank small")]
    let idx = if low < 1.0 { 0 } else { low as usize };
    let base = if idx >= 1 {
        sorted.get(idx - 1).copied().unwrap_or(0.0)
    } else {
        0.0
    };
    let next = sorted.get(idx).copied().unwrap_or(0.0);
    base + (rank - low) * (next - base)
}

fn fmt_pct(pct: f64) -> String {
    if (pct - pct.round()).abs() < 1e-9 {
        #[expect(clippy::cast_possible_truncation, reason = "percentages stay within i64")]
        let whole = pct.round() as i64;
        format!("{whole}")
    } else {
        format!("{pct}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    /// Michelson's first speed-of-light run, the standard worked example for
    /// box plot statistics.
    fn michelson() -> Vec<f64> {
        let mut v = vec![
            850.0, 740.0, 900.0, 1070.0, 930.0, 850.0, 950.0, 980.0, 980.0, 880.0, 1000.0, 980.0,
            930.0, 650.0, 760.0, 810.0, 1000.0, 1000.0, 960.0, 960.0,
        ];
        v.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    fn config(quartile: QuartileMode, whisker: WhiskerMode) -> StatsConfig {
        StatsConfig {
            quartile_mode: quartile,
            whisker_mode: whisker,
            ..StatsConfig::default()
        }
    }

    #[test]
    fn empty_input_is_none() {
        assert!(compute_box(&[], &StatsConfig::default()).is_none());
    }

    #[test]
    fn inclusive_min_max_worked_example() {
        let cfg = config(QuartileMode::Inclusive, WhiskerMode::MinMax);
        let (values, labels) = compute_box(&michelson(), &cfg).unwrap();
        assert_eq!(values.samples, 20);
        assert_eq!(values.median, 940.0);
        assert_eq!(values.quartile1, Some(850.0));
        assert_eq!(values.quartile3, Some(980.0));
        assert_eq!(values.min, 650.0);
        assert_eq!(values.max, 1070.0);
        assert_eq!(values.total, 18180.0);
        assert!((values.mean - 909.0).abs() < 1e-9);
        assert_eq!(labels.min_value_label, "Minimum");
        assert_eq!(labels.max_value_label, "Maximum");
        assert_eq!(labels.quartile_value, "Inclusive");
        assert_eq!(labels.whisker_value, "Min/Max");
    }

    #[test]
    fn exclusive_quartiles_interpolate() {
        // Known QUARTILE.EXC results for this six-element set.
        let data = [7.0, 15.0, 36.0, 39.0, 40.0, 41.0];
        let cfg = config(QuartileMode::Exclusive, WhiskerMode::MinMax);
        let (values, _) = compute_box(&data, &cfg).unwrap();
        assert_eq!(values.quartile1, Some(13.0));
        assert_eq!(values.median, 37.5);
        assert_eq!(values.quartile3, Some(40.25));
    }

    #[test]
    fn quartile_order_invariant() {
        let sets: [&[f64]; 3] = [
            &[1.0, 2.0, 3.0, 4.0],
            &[-5.0, -1.0, 0.0, 2.0, 2.0, 9.0],
            &[0.25, 0.5, 0.5, 0.5, 11.0, 12.0, 400.0],
        ];
        for mode in [QuartileMode::Exclusive, QuartileMode::Inclusive] {
            for data in sets {
                let cfg = config(mode, WhiskerMode::MinMax);
                let (values, _) = compute_box(data, &cfg).unwrap();
                let q1 = values.quartile1.unwrap();
                let q3 = values.quartile3.unwrap();
                assert!(data[0] <= q1, "{mode:?} {data:?}");
                assert!(q1 <= values.median, "{mode:?} {data:?}");
                assert!(values.median <= q3, "{mode:?} {data:?}");
                assert!(q3 <= data[data.len() - 1], "{mode:?} {data:?}");
            }
        }
    }

    #[test]
    fn small_n_exclusive_forces_min_max() {
        let cfg = config(QuartileMode::Exclusive, WhiskerMode::Iqr);
        let (values, labels) = compute_box(&[1.0, 2.0], &cfg).unwrap();
        assert_eq!(values.quartile1, None);
        assert_eq!(values.quartile3, None);
        assert_eq!((values.min, values.max), (1.0, 2.0));
        assert_eq!(labels.whisker_value, "Min/Max");
    }

    #[test]
    fn standard_whiskers_are_data_points() {
        let data = [1.0, 2.0, 3.0, 4.0, 100.0];
        let cfg = config(QuartileMode::Inclusive, WhiskerMode::Standard);
        let (values, labels) = compute_box(&data, &cfg).unwrap();
        // q1 = 2, q3 = 4, fences at -1 and 7; nearest data inside are 1 and 4.
        assert_eq!(values.quartile1, Some(2.0));
        assert_eq!(values.quartile3, Some(4.0));
        assert_eq!((values.min, values.max), (1.0, 4.0));
        assert_eq!(labels.whisker_value, "< 1.5IQR");
        assert_eq!(classify(100.0, &values), PointClass::Outlier);
        assert_eq!(classify(4.0, &values), PointClass::Inner);
    }

    #[test]
    fn iqr_whiskers_are_fence_values() {
        let data = [1.0, 2.0, 3.0, 4.0, 100.0];
        let cfg = config(QuartileMode::Inclusive, WhiskerMode::Iqr);
        let (values, labels) = compute_box(&data, &cfg).unwrap();
        assert_eq!((values.min, values.max), (-1.0, 7.0));
        assert_eq!(labels.min_value_label, "Q1 - 1.5 x IQR");
        assert_eq!(labels.max_value_label, "Q3 + 1.5 x IQR");
        assert_eq!(labels.whisker_value, "= 1.5IQR");
    }

    #[test]
    fn custom_whiskers_at_10_and_90_percent() {
        let cfg = StatsConfig {
            quartile_mode: QuartileMode::Inclusive,
            whisker_mode: WhiskerMode::Custom,
            lower_pct: 10.0,
            higher_pct: 90.0,
        };
        let (values, labels) = compute_box(&michelson(), &cfg).unwrap();
        // Ranks 2.1 and 18.9 over 21 positions.
        assert_eq!(values.min, 742.0);
        assert_eq!(values.max, 1000.0);
        assert_eq!(labels.min_value_label, "Lower: 10%");
        assert_eq!(labels.max_value_label, "Higher: 90%");
        assert_eq!(labels.whisker_value, "Custom");
    }

    #[test]
    fn custom_percentiles_clamp() {
        let cfg = StatsConfig {
            quartile_mode: QuartileMode::Inclusive,
            whisker_mode: WhiskerMode::Custom,
            lower_pct: 0.0,
            higher_pct: 100.0,
        };
        let data = [10.0, 20.0, 30.0, 40.0];
        let (_, labels) = compute_box(&data, &cfg).unwrap();
        // N = 4: lower clamps up to ceil(100/5) = 20, higher down to
        // floor(100 - 100/5) = 80.
        assert_eq!(labels.min_value_label, "Lower: 20%");
        assert_eq!(labels.max_value_label, "Higher: 80%");
    }

    #[test]
    fn custom_rank_past_array_end_reads_zero() {
        // Regression pin: a lower percentile of 100 ranks at N + 1, one past
        // the last position, and the missing neighbors read as zero.
        let cfg = StatsConfig {
            quartile_mode: QuartileMode::Inclusive,
            whisker_mode: WhiskerMode::Custom,
            lower_pct: 100.0,
            higher_pct: 80.0,
        };
        let (values, _) = compute_box(&[10.0, 20.0, 30.0], &cfg).unwrap();
        assert_eq!(values.min, 0.0);
    }

    #[test]
    fn classification_bounds_are_inclusive() {
        let values = BoxValues {
            min: 1.0,
            max: 4.0,
            mean: 2.5,
            median: 2.5,
            quartile1: Some(2.0),
            quartile3: Some(3.0),
            samples: 4,
            total: 10.0,
        };
        assert_eq!(classify(1.0, &values), PointClass::Inner);
        assert_eq!(classify(4.0, &values), PointClass::Inner);
        assert_eq!(classify(0.999, &values), PointClass::Outlier);
        assert_eq!(classify(4.001, &values), PointClass::Outlier);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let cfg = config(QuartileMode::Inclusive, WhiskerMode::Standard);
        let data = michelson();
        assert_eq!(compute_box(&data, &cfg), compute_box(&data, &cfg));
    }

    #[test]
    fn single_sample() {
        let cfg = config(QuartileMode::Inclusive, WhiskerMode::MinMax);
        let (values, _) = compute_box(&[42.0], &cfg).unwrap();
        assert_eq!(values.median, 42.0);
        assert_eq!(values.quartile1, Some(42.0));
        assert_eq!(values.quartile3, Some(42.0));
        assert_eq!((values.min, values.max), (42.0, 42.0));
    }
}
