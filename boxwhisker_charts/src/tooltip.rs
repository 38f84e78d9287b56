// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip content.
//!
//! Interaction geometry carries a [`TooltipSource`] describing what was hit;
//! the host asks for rows when it actually shows a tooltip. Keeping this a
//! plain enum (rather than callbacks captured at build time) keeps the chart
//! data `PartialEq` and cheaply cacheable.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::format::ValueFormatter;
use crate::reference_line::ReferenceLine;
use crate::series::{BoxPlot, SinglePoint};
use crate::stats::PointClass;

/// What a tooltip describes.
#[derive(Clone, Copy, Debug)]
pub enum TooltipSource<'a> {
    /// A whole box.
    Box(&'a BoxPlot),
    /// One sample dot.
    Point(&'a SinglePoint),
    /// A reference line.
    ReferenceLine(&'a ReferenceLine),
}

/// One display row in a tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    /// Row label.
    pub label: String,
    /// Formatted value text.
    pub value: String,
    /// Swatch color.
    pub color: Color,
}

/// Builds the rows for one tooltip.
///
/// Box tooltips lead with the statistics, upper bound first, then the
/// convention rows so users can tell which definitions produced the numbers.
pub fn tooltip_rows(source: TooltipSource<'_>, formatter: &dyn ValueFormatter) -> Vec<TooltipRow> {
    let mut rows = Vec::new();
    match source {
        TooltipSource::Box(plot) => {
            let v = &plot.values;
            let labels = &plot.labels;
            let mut push = |label: String, value: String| {
                rows.push(TooltipRow {
                    label,
                    value,
                    color: plot.color,
                });
            };
            push(labels.max_value_label.clone(), formatter.format(v.max));
            if let Some(q3) = v.quartile3 {
                push(String::from("Quartile 3"), formatter.format(q3));
            }
            push(String::from("Median"), formatter.format(v.median));
            push(String::from("Average"), formatter.format(v.mean));
            if let Some(q1) = v.quartile1 {
                push(String::from("Quartile 1"), formatter.format(q1));
            }
            push(labels.min_value_label.clone(), formatter.format(v.min));
            push(String::from("Samples"), alloc::format!("{}", v.samples));
            push(
                String::from("Quartile Calculation"),
                labels.quartile_value.clone(),
            );
            push(String::from("Whisker Type"), labels.whisker_value.clone());
        }
        TooltipSource::Point(point) => {
            let label = match (&point.series, point.class) {
                (Some(series), _) => alloc::format!("{} - {}", series, point.category),
                (None, PointClass::Outlier) => alloc::format!("{} (outlier)", point.category),
                (None, PointClass::Inner) => point.category.clone(),
            };
            rows.push(TooltipRow {
                label,
                value: formatter.format(point.value),
                color: point.color,
            });
        }
        TooltipSource::ReferenceLine(line) => {
            rows.push(TooltipRow {
                label: line.name.clone(),
                value: formatter.format(line.value),
                color: line.color,
            });
        }
    }
    rows
}
