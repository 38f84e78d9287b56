// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full pipeline: data view in, drawable chart data out.
//!
//! `convert` runs the stages in order: series building, axis options over
//! the folded data range, margin measurement and plot arrangement, label
//! fitting, scales, and finally pixel geometry for every box and point.
//! [`BoxWhiskerChart`] wraps it with a previous-render cache so hosts can
//! call `update` on every frame without recomputing anything when inputs
//! have not changed.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Line, Point, Rect};

use crate::axis_options::AxisOptions;
use crate::config::ChartSettings;
use crate::data::DataView;
use crate::format::format_tick_with_step;
use crate::layout::{
    self, ChartAreaSpec, Size, fit_label_stride, fit_tick_count,
};
use crate::measure::TextMeasurer;
use crate::palette::{ColorPalette, NamedColor};
use crate::reference_line::ReferenceLine;
use crate::scale::{Orientation, ScaleKind, Scales, build_scales};
use crate::series::{
    self, BoxGeometry, BoxPlotSeries, LegendEntry, build_series,
};

/// Fraction of a series slot the box itself occupies; the rest is the gap
/// between side-by-side series.
const BOX_SLOT_FILL: f64 = 0.8;

/// Everything a renderer needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxWhiskerChartData {
    /// Category names in axis order.
    pub categories: Vec<String>,
    /// Raw data range before axis rounding, `(min, max)`.
    pub data_range: (f64, f64),
    /// Legend entries in color-assignment order.
    pub legend: Vec<LegendEntry>,
    /// Built series with geometry populated.
    pub series: Vec<BoxPlotSeries>,
    /// Reference lines, copied from settings.
    pub reference_lines: Vec<ReferenceLine>,
    /// Value axis bounds and tick layout.
    pub axis_options: AxisOptions,
    /// Draw every n-th category label.
    pub label_stride: usize,
    /// Tick count after fitting, possibly fewer than `axis_options.ticks`.
    pub tick_count: usize,
    /// Plot rectangle in viewport pixels.
    pub plot: Rect,
    /// Axis start override actually in effect: the configured fixed start
    /// when it widened the axis, or the positive start a log scale forces.
    /// `None` when the axis start came from the data alone.
    pub resolved_start: Option<f64>,
}

/// Runs the pipeline once. Returns `None` when the view has no usable data.
pub fn convert(
    view: &DataView,
    viewport: Size,
    settings: &ChartSettings,
    palette: &dyn ColorPalette,
    overrides: &[NamedColor],
    measurer: &dyn TextMeasurer,
) -> Option<BoxWhiskerChartData> {
    let mut data = build_series(view, settings, palette, overrides)?;

    let mut lo = data.min;
    let mut hi = data.max;
    for line in &settings.reference_lines {
        if line.show {
            lo = lo.min(line.value);
            hi = hi.max(line.value);
        }
    }

    let mut axis = AxisOptions::compute(lo, hi, settings.fixed_start, settings.fixed_end);
    // A fixed start only counts as applied when the axis actually took it.
    let mut resolved_start = settings.fixed_start.filter(|s| *s == axis.min);
    if settings.scale_kind == ScaleKind::Log && axis.min <= 0.0 {
        // A log axis cannot start at or below zero.
        axis.min = 1.0;
        if axis.max <= axis.min {
            axis.max = 10.0;
        }
        resolved_start = Some(1.0);
    }

    let tick_labels: Vec<String> = axis
        .tick_values()
        .iter()
        .map(|v| format_tick_with_step(*v, axis.tick_size))
        .collect();
    let value_axis = layout::value_axis_thickness(
        &tick_labels,
        measurer,
        settings.font_size,
        settings.orientation,
    );
    let category_axis = layout::category_axis_thickness(
        &data.categories,
        measurer,
        settings.font_size,
        settings.orientation,
        settings.label_orientation,
    );
    let legend_top = if settings.show_legend && !data.legend.is_empty() {
        settings.font_size + 10.0
    } else {
        0.0
    };
    let plot = ChartAreaSpec {
        view: viewport,
        outer_padding: settings.outer_padding,
        value_axis,
        category_axis,
        legend_top,
        orientation: settings.orientation,
    }
    .plot_rect();

    let (category_space, value_space) = match settings.orientation {
        Orientation::Vertical => (plot.width(), plot.height()),
        Orientation::Horizontal => (plot.height(), plot.width()),
    };
    let label_stride = fit_label_stride(
        &data.categories,
        measurer,
        settings.font_size,
        settings.label_orientation,
        category_space,
    );
    let (_, label_height) = measurer.measure("0", settings.font_size);
    let tick_count = fit_tick_count(axis.ticks, label_height, value_space);

    let scales = build_scales(
        &axis,
        plot,
        settings.orientation,
        settings.scale_kind,
        data.categories.len(),
    );
    fill_geometry(
        &mut data.series,
        &data.categories,
        &scales,
        settings.orientation,
    );

    Some(BoxWhiskerChartData {
        categories: data.categories,
        data_range: (data.min, data.max),
        legend: data.legend,
        series: data.series,
        reference_lines: settings.reference_lines.clone(),
        axis_options: axis,
        label_stride,
        tick_count,
        plot,
        resolved_start,
    })
}

/// Computes pixel geometry for every box and point, then the structural
/// keys over the finished numbers.
fn fill_geometry(
    all_series: &mut [BoxPlotSeries],
    categories: &[String],
    scales: &Scales,
    orientation: Orientation,
) {
    let index_of: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();
    let slot = scales.category.band_width() / all_series.len().max(1) as f64;
    let box_width = slot * BOX_SLOT_FILL;

    for (series_index, series) in all_series.iter_mut().enumerate() {
        for plot in &mut series.box_plots {
            let Some(&cat) = index_of.get(plot.name.as_str()) else {
                continue;
            };
            let along0 = scales.category.x(cat)
                + slot * series_index as f64
                + (slot - box_width) * 0.5;
            let center = along0 + box_width * 0.5;
            let v = &scales.value;

            let values = plot.values;
            let q1 = values.quartile1.unwrap_or(values.median);
            let q3 = values.quartile3.unwrap_or(values.median);
            let tip_half = box_width / 10.0 * 0.5;

            let geometry = match orientation {
                Orientation::Vertical => BoxGeometry {
                    box_rect: rect_spanning(
                        (along0, along0 + box_width),
                        (v.map(q1), v.map(q3)),
                        false,
                    ),
                    median: Line::new(
                        (along0, v.map(values.median)),
                        (along0 + box_width, v.map(values.median)),
                    ),
                    mean: Point::new(center, v.map(values.mean)),
                    whisker_low: Line::new((center, v.map(q1)), (center, v.map(values.min))),
                    whisker_high: Line::new((center, v.map(q3)), (center, v.map(values.max))),
                    tip_low: Line::new(
                        (center - tip_half, v.map(values.min)),
                        (center + tip_half, v.map(values.min)),
                    ),
                    tip_high: Line::new(
                        (center - tip_half, v.map(values.max)),
                        (center + tip_half, v.map(values.max)),
                    ),
                },
                Orientation::Horizontal => BoxGeometry {
                    box_rect: rect_spanning(
                        (along0, along0 + box_width),
                        (v.map(q1), v.map(q3)),
                        true,
                    ),
                    median: Line::new(
                        (v.map(values.median), along0),
                        (v.map(values.median), along0 + box_width),
                    ),
                    mean: Point::new(v.map(values.mean), center),
                    whisker_low: Line::new((v.map(q1), center), (v.map(values.min), center)),
                    whisker_high: Line::new((v.map(q3), center), (v.map(values.max), center)),
                    tip_low: Line::new(
                        (v.map(values.min), center - tip_half),
                        (v.map(values.min), center + tip_half),
                    ),
                    tip_high: Line::new(
                        (v.map(values.max), center - tip_half),
                        (v.map(values.max), center + tip_half),
                    ),
                },
            };
            plot.geometry = Some(geometry);

            for point in plot.inner_points.iter_mut().chain(&mut plot.outliers) {
                let value_px = v.map(point.value);
                point.position = Some(match orientation {
                    Orientation::Vertical => Point::new(center, value_px),
                    Orientation::Horizontal => Point::new(value_px, center),
                });
            }
            plot.key = series::structural_key(plot);
        }
        series.key = series::series_key(series);
    }
}

/// A rectangle from an along-axis span and a value-axis span, normalized so
/// `x0 <= x1` and `y0 <= y1` whichever way the scale runs.
fn rect_spanning(along: (f64, f64), value: (f64, f64), value_is_x: bool) -> Rect {
    let (v0, v1) = (value.0.min(value.1), value.0.max(value.1));
    if value_is_x {
        Rect::new(v0, along.0, v1, along.1)
    } else {
        Rect::new(along.0, v0, along.1, v1)
    }
}

#[derive(Clone, Debug)]
struct Cache {
    view: DataView,
    viewport: Size,
    settings: ChartSettings,
    data: BoxWhiskerChartData,
}

/// A chart instance holding the previous render's inputs and output.
///
/// `update` is the host's per-frame entry point; identical inputs return
/// the cached data without recomputation.
#[derive(Clone, Debug, Default)]
pub struct BoxWhiskerChart {
    cache: Option<Cache>,
}

impl BoxWhiskerChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the chart if `(view, viewport, settings)` changed since
    /// the previous call, and returns the current data.
    ///
    /// `None` means there is nothing to draw; the host shows its own empty
    /// state. Palette, overrides, and measurer are not part of the change
    /// detection: hosts that swap those must call [`reset`] first.
    ///
    /// [`reset`]: BoxWhiskerChart::reset
    pub fn update(
        &mut self,
        view: &DataView,
        viewport: Size,
        settings: &ChartSettings,
        palette: &dyn ColorPalette,
        overrides: &[NamedColor],
        measurer: &dyn TextMeasurer,
    ) -> Option<&BoxWhiskerChartData> {
        let unchanged = self.cache.as_ref().is_some_and(|c| {
            c.view == *view && c.viewport == viewport && c.settings == *settings
        });
        if !unchanged {
            match convert(view, viewport, settings, palette, overrides, measurer) {
                Some(data) => {
                    self.cache = Some(Cache {
                        view: view.clone(),
                        viewport,
                        settings: settings.clone(),
                        data,
                    });
                }
                None => {
                    self.cache = None;
                    return None;
                }
            }
        }
        self.cache.as_ref().map(|c| &c.data)
    }

    /// Drops the cached render, forcing the next [`update`] to recompute.
    ///
    /// [`update`]: BoxWhiskerChart::update
    pub fn reset(&mut self) {
        self.cache = None;
    }
}
