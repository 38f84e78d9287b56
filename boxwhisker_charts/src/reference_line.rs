// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference lines drawn across the value axis.

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

/// Dash style of a reference line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Solid stroke.
    #[default]
    Solid,
    /// Dashed stroke.
    Dashed,
    /// Dotted stroke.
    Dotted,
}

/// Whether a reference line draws in front of or behind the boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinePosition {
    /// Behind the boxes.
    #[default]
    Behind,
    /// In front of the boxes.
    InFront,
}

/// One reference line at a fixed value.
///
/// Shown lines participate in the axis domain: the pipeline folds their
/// values into the data range before axis options are computed, so a line at
/// 0 keeps the zero gridline visible even when all data is far from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceLine {
    /// Display name, used in the tooltip and the optional label.
    pub name: String,
    /// Value the line sits at, in data units.
    pub value: f64,
    /// Whether the line is drawn at all.
    pub show: bool,
    /// Stroke style.
    pub style: LineStyle,
    /// Draw order relative to the boxes.
    pub position: LinePosition,
    /// Stroke color.
    pub color: Color,
    /// Whether to draw the value label next to the line.
    pub show_label: bool,
}

impl ReferenceLine {
    /// Creates a visible solid gray line at `value`.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            show: true,
            style: LineStyle::default(),
            position: LinePosition::default(),
            color: css::GRAY,
            show_label: false,
        }
    }

    /// Sets the stroke style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the draw order.
    pub fn with_position(mut self, position: LinePosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Shows or hides the value label.
    pub fn with_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    /// Shows or hides the whole line.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }
}
