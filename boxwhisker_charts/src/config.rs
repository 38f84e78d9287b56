// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! Settings are a plain immutable value passed by reference through the
//! pipeline. Stages that need to deviate from a setting (log scales forcing
//! the axis start, say) report the corrected value in their output instead
//! of mutating shared state.

use alloc::vec::Vec;

use crate::layout::LabelOrientation;
use crate::reference_line::ReferenceLine;
use crate::scale::{Orientation, ScaleKind};
use crate::stats::{QuartileMode, StatsConfig, WhiskerMode};

/// Everything the user can configure about one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSettings {
    /// Box direction and axis placement.
    pub orientation: Orientation,
    /// Value axis scale kind.
    pub scale_kind: ScaleKind,
    /// Quartile rank convention.
    pub quartile_mode: QuartileMode,
    /// Whisker bound policy.
    pub whisker_mode: WhiskerMode,
    /// Lower whisker percentile for [`WhiskerMode::Custom`].
    pub lower_pct: f64,
    /// Upper whisker percentile for [`WhiskerMode::Custom`].
    pub higher_pct: f64,
    /// Count missing sample cells as zero instead of dropping them.
    pub include_empty: bool,
    /// Compute and emit outlier points.
    pub show_outliers: bool,
    /// Compute and emit inner (non-outlier) points.
    pub show_inner_points: bool,
    /// Show the legend strip above the plot.
    pub show_legend: bool,
    /// User-fixed value axis start; applied only when it widens the axis.
    pub fixed_start: Option<f64>,
    /// User-fixed value axis end; applied only when it widens the axis.
    pub fixed_end: Option<f64>,
    /// Category label rotation.
    pub label_orientation: LabelOrientation,
    /// Font size for axis and legend text, in pixels.
    pub font_size: f64,
    /// Radius for inner data points, in pixels.
    pub point_radius: f64,
    /// Radius for outlier points, in pixels.
    pub outlier_radius: f64,
    /// Padding between the viewport edge and chart content, in pixels.
    pub outer_padding: f64,
    /// Reference lines to draw and fold into the axis domain.
    pub reference_lines: Vec<ReferenceLine>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            scale_kind: ScaleKind::default(),
            quartile_mode: QuartileMode::default(),
            whisker_mode: WhiskerMode::default(),
            lower_pct: 5.0,
            higher_pct: 95.0,
            include_empty: false,
            show_outliers: true,
            show_inner_points: false,
            show_legend: true,
            fixed_start: None,
            fixed_end: None,
            label_orientation: LabelOrientation::default(),
            font_size: 11.0,
            point_radius: 2.0,
            outlier_radius: 3.0,
            outer_padding: 8.0,
            reference_lines: Vec::new(),
        }
    }
}

impl ChartSettings {
    /// Sets the chart orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the value axis scale kind.
    pub fn with_scale_kind(mut self, kind: ScaleKind) -> Self {
        self.scale_kind = kind;
        self
    }

    /// Sets the quartile convention.
    pub fn with_quartile_mode(mut self, mode: QuartileMode) -> Self {
        self.quartile_mode = mode;
        self
    }

    /// Sets the whisker policy.
    pub fn with_whisker_mode(mut self, mode: WhiskerMode) -> Self {
        self.whisker_mode = mode;
        self
    }

    /// Sets the custom whisker percentiles.
    pub fn with_custom_percentiles(mut self, lower: f64, higher: f64) -> Self {
        self.lower_pct = lower;
        self.higher_pct = higher;
        self
    }

    /// Sets whether missing cells count as zero.
    pub fn with_include_empty(mut self, include_empty: bool) -> Self {
        self.include_empty = include_empty;
        self
    }

    /// Sets outlier visibility.
    pub fn with_outliers(mut self, show: bool) -> Self {
        self.show_outliers = show;
        self
    }

    /// Sets inner point visibility.
    pub fn with_inner_points(mut self, show: bool) -> Self {
        self.show_inner_points = show;
        self
    }

    /// Sets user-fixed axis bounds. `None` leaves a bound computed.
    pub fn with_fixed_bounds(mut self, start: Option<f64>, end: Option<f64>) -> Self {
        self.fixed_start = start;
        self.fixed_end = end;
        self
    }

    /// Sets the category label rotation.
    pub fn with_label_orientation(mut self, orientation: LabelOrientation) -> Self {
        self.label_orientation = orientation;
        self
    }

    /// Adds a reference line.
    pub fn with_reference_line(mut self, line: ReferenceLine) -> Self {
        self.reference_lines.push(line);
        self
    }

    /// The statistics configuration these settings imply.
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig {
            quartile_mode: self.quartile_mode,
            whisker_mode: self.whisker_mode,
            lower_pct: self.lower_pct,
            higher_pct: self.higher_pct,
        }
    }
}
