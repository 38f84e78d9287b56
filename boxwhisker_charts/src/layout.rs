// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-area arrangement and label fitting.
//!
//! Axis thicknesses are measured from the actual label text, then the plot
//! rectangle is what remains of the viewport. When labels still do not fit,
//! [`fit_label_stride`] and [`fit_tick_count`] thin them out rather than let
//! them collide.

use alloc::string::String;

use core::f64::consts::FRAC_1_SQRT_2;

use kurbo::Rect;

use crate::measure::TextMeasurer;
use crate::scale::Orientation;

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// How category labels are rotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelOrientation {
    /// Unrotated.
    #[default]
    Horizontal,
    /// Rotated 45°.
    Diagonal,
    /// Rotated 90°.
    Vertical,
}

/// Extent a rotated label occupies along the category axis.
pub fn label_extent(orientation: LabelOrientation, width: f64, height: f64) -> f64 {
    match orientation {
        LabelOrientation::Horizontal => width,
        LabelOrientation::Diagonal => FRAC_1_SQRT_2 * (width + height),
        LabelOrientation::Vertical => 0.75 * height,
    }
}

/// Extent a rotated label occupies perpendicular to the category axis.
pub fn label_depth(orientation: LabelOrientation, width: f64, height: f64) -> f64 {
    match orientation {
        LabelOrientation::Horizontal => height,
        LabelOrientation::Diagonal => FRAC_1_SQRT_2 * (width + height),
        LabelOrientation::Vertical => width,
    }
}

const TICK_SIZE: f64 = 5.0;
const TICK_PADDING: f64 = 6.0;

/// Thickness the value axis needs: tick mark, padding, and the widest (or
/// tallest, for horizontal charts) tick label.
pub fn value_axis_thickness(
    labels: &[String],
    measurer: &dyn TextMeasurer,
    font_size: f64,
    orientation: Orientation,
) -> f64 {
    let mut extent = 0.0_f64;
    for label in labels {
        let (w, h) = measurer.measure(label, font_size);
        extent = extent.max(match orientation {
            Orientation::Vertical => w,
            Orientation::Horizontal => h,
        });
    }
    TICK_SIZE + TICK_PADDING + extent
}

/// Thickness the category axis needs for its labels.
pub fn category_axis_thickness(
    labels: &[String],
    measurer: &dyn TextMeasurer,
    font_size: f64,
    orientation: Orientation,
    label_orientation: LabelOrientation,
) -> f64 {
    let mut extent = 0.0_f64;
    for label in labels {
        let (w, h) = measurer.measure(label, font_size);
        extent = extent.max(match orientation {
            Orientation::Vertical => label_depth(label_orientation, w, h),
            Orientation::Horizontal => w,
        });
    }
    TICK_PADDING + extent
}

/// Measured margins around the plot, ready to arrange.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartAreaSpec {
    /// Full viewport.
    pub view: Size,
    /// Padding between the viewport edge and everything else.
    pub outer_padding: f64,
    /// Thickness of the value axis (left edge when vertical, bottom when
    /// horizontal).
    pub value_axis: f64,
    /// Thickness of the category axis (the other edge).
    pub category_axis: f64,
    /// Height reserved above the plot for the legend, 0 when hidden.
    pub legend_top: f64,
    /// Chart orientation; decides which edge each axis occupies.
    pub orientation: Orientation,
}

impl ChartAreaSpec {
    /// Computes the plot rectangle left over after axes and legend.
    ///
    /// Collapses to a zero-area rectangle instead of inverting when the
    /// viewport is too small.
    pub fn plot_rect(&self) -> Rect {
        let (left_axis, bottom_axis) = match self.orientation {
            Orientation::Vertical => (self.value_axis, self.category_axis),
            Orientation::Horizontal => (self.category_axis, self.value_axis),
        };
        let x0 = self.outer_padding + left_axis;
        let y0 = self.outer_padding + self.legend_top;
        let x1 = (self.view.width - self.outer_padding).max(x0);
        let y1 = (self.view.height - self.outer_padding - bottom_axis).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Finds the smallest label stride that makes every drawn category label fit.
///
/// A stride of `k` draws every `k`-th label. Starts at 1 and grows until the
/// sampled labels fit in `available` or only one label remains, so the result
/// is never 0 and the loop always terminates.
pub fn fit_label_stride(
    labels: &[String],
    measurer: &dyn TextMeasurer,
    font_size: f64,
    orientation: LabelOrientation,
    available: f64,
) -> usize {
    let n = labels.len();
    if n == 0 {
        return 1;
    }
    let mut stride = 1;
    while stride < n {
        let total: f64 = labels
            .iter()
            .step_by(stride)
            .map(|label| {
                let (w, h) = measurer.measure(label, font_size);
                label_extent(orientation, w, h)
            })
            .sum();
        if total <= available {
            break;
        }
        stride += 1;
    }
    stride
}

/// Halves the tick count until the labels fit vertically, to a floor of 2.
pub fn fit_tick_count(mut ticks: usize, label_height: f64, available: f64) -> usize {
    while ticks > 2 && ticks as f64 * label_height > available {
        ticks = ticks.div_ceil(2);
    }
    ticks.max(2)
}
