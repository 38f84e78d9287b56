// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series construction: from a [`DataView`] to per-category box plots.
//!
//! This stage owns everything that happens before coordinates exist:
//! sample gathering and filtering, per-category statistics, legend and
//! color assignment, and the running data range the axis needs. Geometry
//! fields stay `None` until the chart stage fills them in.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Line, Point, Rect};
use peniko::Color;

use crate::config::ChartSettings;
use crate::data::{DataView, SelectionKey};
use crate::palette::{ColorPalette, NamedColor, resolve_color};
use crate::stats::{self, BoxLabels, BoxValues, PointClass};

/// Alpha applied to the box fill, leaving the stroke at full opacity.
const FILL_ALPHA: f32 = 175.0 / 255.0;

/// One sample drawn as a dot, either inside the whiskers or an outlier.
#[derive(Clone, Debug, PartialEq)]
pub struct SinglePoint {
    /// Sample value in data units.
    pub value: f64,
    /// Category the sample belongs to.
    pub category: String,
    /// Series the sample belongs to, if the data has series.
    pub series: Option<String>,
    /// Dot color.
    pub color: Color,
    /// Dot radius in pixels.
    pub radius: f64,
    /// Inner point or outlier.
    pub class: PointClass,
    /// Pixel position, filled in once scales exist.
    pub position: Option<Point>,
}

/// Drawable geometry of one box, in plot pixels.
///
/// When the quartiles are undefined the box rectangle collapses onto the
/// median line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    /// The interquartile box.
    pub box_rect: Rect,
    /// Median line across the box.
    pub median: Line,
    /// Mean marker position.
    pub mean: Point,
    /// Whisker from the lower box edge to the lower bound.
    pub whisker_low: Line,
    /// Whisker from the upper box edge to the upper bound.
    pub whisker_high: Line,
    /// Crossbar at the lower bound.
    pub tip_low: Line,
    /// Crossbar at the upper bound.
    pub tip_high: Line,
}

/// One category's box plot within a series.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlot {
    /// Category name.
    pub name: String,
    /// Owning series name, if the data has series.
    pub series: Option<String>,
    /// Stroke color.
    pub color: Color,
    /// Translucent fill derived from `color`.
    pub fill_color: Color,
    /// Computed statistics.
    pub values: BoxValues,
    /// User-visible convention labels.
    pub labels: BoxLabels,
    /// Samples inside the whiskers, when enabled.
    pub inner_points: Vec<SinglePoint>,
    /// Samples outside the whiskers, when enabled.
    pub outliers: Vec<SinglePoint>,
    /// Pixel geometry, filled in once scales exist.
    pub geometry: Option<BoxGeometry>,
    /// Whether the host has cross-highlighted this category.
    pub highlight: bool,
    /// Host selection identity.
    pub selection: SelectionKey,
    /// Structural key: identical data and settings produce identical keys,
    /// letting renderers skip untouched boxes.
    pub key: u64,
}

/// A named run of box plots.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlotSeries {
    /// Series name.
    pub name: String,
    /// One box per category that had samples.
    pub box_plots: Vec<BoxPlot>,
    /// Combined structural key of the member boxes.
    pub key: u64,
}

/// One legend entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Display name.
    pub name: String,
    /// Swatch color.
    pub color: Color,
}

/// Output of the series stage.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesData {
    /// Built series, in input order.
    pub series: Vec<BoxPlotSeries>,
    /// Deduplicated legend entries; first occurrence wins color order.
    pub legend: Vec<LegendEntry>,
    /// Category names in first-seen order across all series.
    pub categories: Vec<String>,
    /// Smallest of all whisker bounds, means, and medians.
    pub min: f64,
    /// Largest of all whisker bounds, means, and medians.
    pub max: f64,
}

/// Builds box plot series from a data view.
///
/// Returns `None` when no category yields any usable sample. A view without
/// a series dimension produces one series named after the value title, and
/// its categories double as legend entries.
pub fn build_series(
    view: &DataView,
    settings: &ChartSettings,
    palette: &dyn ColorPalette,
    overrides: &[NamedColor],
) -> Option<SeriesData> {
    let stats_config = settings.stats_config();
    let has_series = view.series.iter().any(|s| s.name.is_some());

    let mut categories: Vec<String> = Vec::new();
    let mut seen_categories: HashSet<String> = HashSet::new();
    let mut legend: Vec<LegendEntry> = Vec::new();
    let mut seen_legend: HashSet<String> = HashSet::new();
    let mut series_out: Vec<BoxPlotSeries> = Vec::new();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    let legend_color = |legend: &mut Vec<LegendEntry>,
                            seen: &mut HashSet<String>,
                            name: &str| {
        if seen.insert(String::from(name)) {
            let color = resolve_color(name, legend.len(), overrides, palette);
            legend.push(LegendEntry {
                name: String::from(name),
                color,
            });
            color
        } else {
            legend
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.color)
                .unwrap_or_else(|| palette.color_by_index(0))
        }
    };

    for group in &view.series {
        let series_name = group
            .name
            .clone()
            .unwrap_or_else(|| view.value_title.clone());
        let mut box_plots = Vec::with_capacity(group.categories.len());

        for category in &group.categories {
            let mut samples: Vec<f64> = category
                .samples
                .iter()
                .filter_map(|cell| match cell {
                    Some(v) if v.is_finite() => Some(*v),
                    Some(_) => None,
                    None if settings.include_empty => Some(0.0),
                    None => None,
                })
                .collect();
            if samples.is_empty() {
                continue;
            }
            samples.sort_unstable_by(|a, b| a.total_cmp(b));

            let Some((values, mut labels)) = stats::compute_box(&samples, &stats_config) else {
                continue;
            };
            labels.sample_columns = view.sample_columns.clone();

            if seen_categories.insert(category.name.clone()) {
                categories.push(category.name.clone());
            }
            let legend_name = if has_series { &series_name } else { &category.name };
            let color = legend_color(&mut legend, &mut seen_legend, legend_name);

            for v in [values.min, values.max, values.mean, values.median] {
                min = min.min(v);
                max = max.max(v);
            }

            let mut inner_points = Vec::new();
            let mut outliers = Vec::new();
            if settings.show_inner_points || settings.show_outliers {
                for &value in &samples {
                    let class = stats::classify(value, &values);
                    let (wanted, radius) = match class {
                        PointClass::Inner => (settings.show_inner_points, settings.point_radius),
                        PointClass::Outlier => (settings.show_outliers, settings.outlier_radius),
                    };
                    if !wanted {
                        continue;
                    }
                    let point = SinglePoint {
                        value,
                        category: category.name.clone(),
                        series: group.name.clone(),
                        color,
                        radius,
                        class,
                        position: None,
                    };
                    match class {
                        PointClass::Inner => inner_points.push(point),
                        PointClass::Outlier => outliers.push(point),
                    }
                }
            }

            box_plots.push(BoxPlot {
                name: category.name.clone(),
                series: group.name.clone(),
                color,
                fill_color: color.with_alpha(FILL_ALPHA),
                values,
                labels,
                inner_points,
                outliers,
                geometry: None,
                highlight: category.highlight,
                selection: category.selection,
                key: 0,
            });
        }

        if !box_plots.is_empty() {
            series_out.push(BoxPlotSeries {
                name: series_name,
                box_plots,
                key: 0,
            });
        }
    }

    if series_out.is_empty() {
        return None;
    }
    Some(SeriesData {
        series: series_out,
        legend,
        categories,
        min,
        max,
    })
}

/// Deterministic structural key over a box's numbers and color.
///
/// A plain sum, not a hash: the goal is "same data, same key" so renderers
/// can skip, not collision resistance.
pub fn structural_key(plot: &BoxPlot) -> u64 {
    let v = &plot.values;
    let mut acc = v.min
        + v.max
        + v.mean
        + v.median
        + v.quartile1.unwrap_or(0.0)
        + v.quartile3.unwrap_or(0.0)
        + v.samples as f64
        + v.total;
    if let Some(g) = &plot.geometry {
        acc += g.box_rect.x0 + g.box_rect.y0 + g.box_rect.x1 + g.box_rect.y1;
        for line in [g.median, g.whisker_low, g.whisker_high, g.tip_low, g.tip_high] {
            acc += line.p0.x + line.p0.y + line.p1.x + line.p1.y;
        }
        acc += g.mean.x + g.mean.y;
    }
    let rgba = plot.color.to_rgba8();
    let color_int = (u32::from(rgba.r) << 16) | (u32::from(rgba.g) << 8) | u32::from(rgba.b);
    acc += f64::from(color_int);
    acc.to_bits()
}

/// Combined key for a whole series.
pub fn series_key(series: &BoxPlotSeries) -> u64 {
    series
        .box_plots
        .iter()
        .fold(0_u64, |acc, b| acc.wrapping_add(b.key))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::data::{CategorySamples, SeriesGroup};
    use crate::palette::DefaultPalette;
    use crate::stats::WhiskerMode;

    fn category(name: &str, samples: &[Option<f64>]) -> CategorySamples {
        CategorySamples {
            name: name.to_string(),
            selection: SelectionKey::from_raw(0),
            highlight: false,
            samples: samples.to_vec(),
        }
    }

    fn plain_view() -> DataView {
        DataView {
            value_title: "Sales".to_string(),
            sample_columns: vec!["Day".to_string()],
            series: vec![SeriesGroup {
                name: None,
                categories: vec![
                    category("North", &[Some(3.0), Some(1.0), Some(2.0)]),
                    category("South", &[Some(9.0), Some(7.0), None, Some(8.0)]),
                ],
            }],
        }
    }

    #[test]
    fn no_series_dimension_synthesizes_one() {
        let data = build_series(
            &plain_view(),
            &ChartSettings::default(),
            &DefaultPalette,
            &[],
        )
        .unwrap();
        assert_eq!(data.series.len(), 1);
        assert_eq!(data.series[0].name, "Sales");
        assert_eq!(data.categories, vec!["North", "South"]);
        // Categories double as legend values with distinct colors.
        assert_eq!(data.legend.len(), 2);
        assert_ne!(data.legend[0].color, data.legend[1].color);
        assert_eq!(data.series[0].box_plots[0].color, data.legend[0].color);
    }

    #[test]
    fn sample_columns_flow_into_labels() {
        let data = build_series(
            &plain_view(),
            &ChartSettings::default(),
            &DefaultPalette,
            &[],
        )
        .unwrap();
        assert_eq!(
            data.series[0].box_plots[0].labels.sample_columns,
            vec!["Day"]
        );
    }

    #[test]
    fn include_empty_turns_missing_into_zero() {
        let view = plain_view();
        let dropped = build_series(&view, &ChartSettings::default(), &DefaultPalette, &[]).unwrap();
        assert_eq!(dropped.series[0].box_plots[1].values.samples, 3);

        let settings = ChartSettings::default().with_include_empty(true);
        let kept = build_series(&view, &settings, &DefaultPalette, &[]).unwrap();
        let south = &kept.series[0].box_plots[1];
        assert_eq!(south.values.samples, 4);
        assert_eq!(south.values.min, 0.0, "the zero becomes the data minimum");
    }

    #[test]
    fn unsorted_and_non_finite_input_is_handled() {
        let view = DataView {
            value_title: "V".to_string(),
            sample_columns: vec![],
            series: vec![SeriesGroup {
                name: None,
                categories: vec![category(
                    "A",
                    &[Some(5.0), Some(f64::NAN), Some(1.0), Some(3.0)],
                )],
            }],
        };
        let data = build_series(&view, &ChartSettings::default(), &DefaultPalette, &[]).unwrap();
        let values = data.series[0].box_plots[0].values;
        assert_eq!(values.samples, 3, "NaN cells are dropped");
        assert_eq!((values.min, values.max), (1.0, 5.0));
    }

    #[test]
    fn empty_view_is_none() {
        assert!(
            build_series(
                &DataView::default(),
                &ChartSettings::default(),
                &DefaultPalette,
                &[]
            )
            .is_none()
        );
        let all_missing = DataView {
            series: vec![SeriesGroup {
                name: None,
                categories: vec![category("A", &[None, None])],
            }],
            ..DataView::default()
        };
        assert!(
            build_series(
                &all_missing,
                &ChartSettings::default(),
                &DefaultPalette,
                &[]
            )
            .is_none()
        );
    }

    #[test]
    fn legend_dedup_across_series() {
        let view = DataView {
            value_title: "V".to_string(),
            sample_columns: vec![],
            series: vec![
                SeriesGroup {
                    name: Some("2024".to_string()),
                    categories: vec![category("A", &[Some(1.0), Some(2.0)])],
                },
                SeriesGroup {
                    name: Some("2025".to_string()),
                    categories: vec![category("A", &[Some(3.0), Some(4.0)])],
                },
                SeriesGroup {
                    name: Some("2024".to_string()),
                    categories: vec![category("B", &[Some(5.0)])],
                },
            ],
        };
        let data = build_series(&view, &ChartSettings::default(), &DefaultPalette, &[]).unwrap();
        assert_eq!(data.legend.len(), 2, "duplicate series name deduplicated");
        assert_eq!(data.legend[0].name, "2024");
        assert_eq!(data.categories, vec!["A", "B"]);
        // The repeated series name reuses the first occurrence's color.
        assert_eq!(data.series[0].box_plots[0].color, data.series[2].box_plots[0].color);
    }

    #[test]
    fn overrides_win_color_assignment() {
        let overrides = vec![NamedColor {
            name: "North".to_string(),
            color: "#010203".to_string(),
        }];
        let data = build_series(
            &plain_view(),
            &ChartSettings::default(),
            &DefaultPalette,
            &overrides,
        )
        .unwrap();
        let rgba = data.legend[0].color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (1, 2, 3));
    }

    #[test]
    fn global_range_covers_whisker_bounds() {
        let view = DataView {
            value_title: "V".to_string(),
            sample_columns: vec![],
            series: vec![SeriesGroup {
                name: None,
                categories: vec![category(
                    "A",
                    &[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(100.0)],
                )],
            }],
        };
        let settings = ChartSettings::default().with_whisker_mode(WhiskerMode::Iqr);
        let data = build_series(&view, &settings, &DefaultPalette, &[]).unwrap();
        // IQR fences (-1, 7) extend past the data on the low side; the mean
        // (22) extends past the upper fence.
        assert_eq!(data.min, -1.0);
        assert_eq!(data.max, 22.0);
    }

    #[test]
    fn point_flags_control_population() {
        let view = DataView {
            value_title: "V".to_string(),
            sample_columns: vec![],
            series: vec![SeriesGroup {
                name: None,
                categories: vec![category(
                    "A",
                    &[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(100.0)],
                )],
            }],
        };
        let settings = ChartSettings::default()
            .with_whisker_mode(WhiskerMode::Standard)
            .with_inner_points(true)
            .with_outliers(true);
        let data = build_series(&view, &settings, &DefaultPalette, &[]).unwrap();
        let plot = &data.series[0].box_plots[0];
        assert_eq!(plot.inner_points.len(), 4);
        assert_eq!(plot.outliers.len(), 1);
        assert_eq!(plot.outliers[0].value, 100.0);
        assert_eq!(plot.outliers[0].class, PointClass::Outlier);

        let none = ChartSettings::default()
            .with_whisker_mode(WhiskerMode::Standard)
            .with_inner_points(false)
            .with_outliers(false);
        let data = build_series(&view, &none, &DefaultPalette, &[]).unwrap();
        let plot = &data.series[0].box_plots[0];
        assert!(plot.inner_points.is_empty() && plot.outliers.is_empty());
    }

    #[test]
    fn structural_key_is_stable_and_sensitive() {
        let data = build_series(
            &plain_view(),
            &ChartSettings::default(),
            &DefaultPalette,
            &[],
        )
        .unwrap();
        let mut a = data.series[0].box_plots[0].clone();
        let b = a.clone();
        assert_eq!(structural_key(&a), structural_key(&b));
        a.values.median += 1.0;
        assert_ne!(structural_key(&a), structural_key(&b));
    }
}
