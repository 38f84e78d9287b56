// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-and-whisker chart computation.
//!
//! This crate turns tabular sample data into everything a renderer needs to
//! draw a box-and-whisker chart: per-category statistics, value axis bounds
//! and ticks, a fitted plot layout, and pixel geometry for boxes, whiskers,
//! and sample points. It does no drawing itself; hosts feed the resulting
//! [`BoxWhiskerChartData`] to whatever rendering stack they use.
//!
//! The typical entry point is [`BoxWhiskerChart::update`], which caches the
//! previous render and skips recomputation when the data view, viewport, and
//! settings are unchanged. [`convert`] runs the pipeline unconditionally.
//!
//! ## Features
//!
//! - `std` (disabled by default): use the Rust standard library.
//! - `libm` (enabled by default): use [libm](https://crates.io/crates/libm)
//!   for float math in `no_std` builds.
#![no_std]

extern crate alloc;

mod axis_options;
mod chart;
mod config;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod measure;
mod palette;
mod reference_line;
mod scale;
mod series;
mod stats;
mod tooltip;

pub use axis_options::AxisOptions;
pub use chart::{BoxWhiskerChart, BoxWhiskerChartData, convert};
pub use config::ChartSettings;
pub use data::{CategorySamples, DataView, SelectionKey, SeriesGroup};
pub use format::{DefaultValueFormatter, ValueFormatter, format_tick_with_step};
pub use layout::{
    ChartAreaSpec, LabelOrientation, Size, category_axis_thickness, fit_label_stride,
    fit_tick_count, label_depth, label_extent, value_axis_thickness,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use palette::{
    ColorPalette, DefaultPalette, NamedColor, format_hex_color, parse_color_lookup,
    parse_hex_color, resolve_color, serialize_color_lookup,
};
pub use reference_line::{LinePosition, LineStyle, ReferenceLine};
pub use scale::{
    Orientation, ScaleBand, ScaleContinuous, ScaleKind, ScaleLinear, ScaleLog, Scales,
    build_scales,
};
pub use series::{
    BoxGeometry, BoxPlot, BoxPlotSeries, LegendEntry, SeriesData, SinglePoint, build_series,
    series_key, structural_key,
};
pub use stats::{
    BoxLabels, BoxValues, PointClass, QuartileMode, StatsConfig, WhiskerMode, classify,
    compute_box,
};
pub use tooltip::{TooltipRow, TooltipSource, tooltip_rows};
