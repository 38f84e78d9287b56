// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scales mapping data space into plot pixels.
//!
//! The category axis is a band scale; the value axis is linear or log. Tick
//! placement is not a scale concern here, the axis options already carry it.

use kurbo::Rect;

use crate::axis_options::AxisOptions;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Which plot edge carries the category axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Boxes run vertically; categories on the x axis.
    #[default]
    Vertical,
    /// Boxes run horizontally; categories on the y axis.
    Horizontal,
}

/// Value axis scale kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Linear value axis.
    #[default]
    Linear,
    /// Base-10 logarithmic value axis.
    Log,
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A base-10 logarithmic mapping from a positive domain to a continuous
/// range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLog {
    /// Creates a new log scale. The domain must be positive; non-positive
    /// inputs map to the range start.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = d0.ln();
        let denom = d1.ln() - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x.ln() - ld0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// The value axis scale, linear or log.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }
}

/// A discrete band scale for the category axis.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`, with
    /// this chart's padding convention (0.1 inner, 0.2 outer).
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.2,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the position of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + self.band_width() * 0.5
    }
}

/// The pair of scales one chart render uses.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    /// Category band scale.
    pub category: ScaleBand,
    /// Value scale.
    pub value: ScaleContinuous,
}

/// Builds the category and value scales for a plot rectangle.
///
/// Vertical orientation inverts the value range so larger values sit higher
/// on screen; horizontal maps values left to right. The caller is expected
/// to have normalized the axis domain for log scales already; non-positive
/// domains are still guarded here and collapse to the range start.
pub fn build_scales(
    axis: &AxisOptions,
    plot: Rect,
    orientation: Orientation,
    kind: ScaleKind,
    category_count: usize,
) -> Scales {
    let (cat_range, val_range) = match orientation {
        Orientation::Vertical => ((plot.x0, plot.x1), (plot.y1, plot.y0)),
        Orientation::Horizontal => ((plot.y0, plot.y1), (plot.x0, plot.x1)),
    };
    let category = ScaleBand::new(cat_range, category_count);
    let domain = (axis.min, axis.max);
    let value = match kind {
        ScaleKind::Linear => ScaleContinuous::Linear(ScaleLinear::new(domain, val_range)),
        ScaleKind::Log => ScaleContinuous::Log(ScaleLog::new(domain, val_range)),
    };
    Scales { category, value }
}
