// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color assignment for series, legends, and persisted overrides.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use serde::{Deserialize, Serialize};

/// Palette service injected by the host.
///
/// Index-based so legend order, not data order, decides color assignment.
pub trait ColorPalette {
    /// Color for the legend entry at `index`.
    fn color_by_index(&self, index: usize) -> Color;

    /// Whether the host is in a high-contrast mode. Hosts that are should
    /// also return foreground-derived colors from [`color_by_index`].
    ///
    /// [`color_by_index`]: ColorPalette::color_by_index
    fn is_high_contrast(&self) -> bool {
        false
    }
}

/// Default categorical palette, repeating after eight entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPalette;

impl ColorPalette for DefaultPalette {
    fn color_by_index(&self, index: usize) -> Color {
        const COLORS: [Color; 8] = [
            css::CORNFLOWER_BLUE,
            css::ORANGE,
            css::MEDIUM_SEA_GREEN,
            css::CRIMSON,
            css::GOLDENROD,
            css::SLATE_BLUE,
            css::DARK_CYAN,
            css::HOT_PINK,
        ];
        COLORS[index % COLORS.len()]
    }
}

/// One persisted name → color assignment, stored as `#rrggbb` text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Legend entry name the color applies to.
    pub name: String,
    /// Hex color, `#rrggbb`.
    pub color: String,
}

/// Parses a persisted `[{name, color}]` blob.
///
/// Malformed input yields an empty list; the palette then assigns colors
/// by index as if nothing was persisted.
pub fn parse_color_lookup(json: &str) -> Vec<NamedColor> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Serializes a color lookup for persistence.
pub fn serialize_color_lookup(lookup: &[NamedColor]) -> String {
    serde_json::to_string(lookup).unwrap_or_default()
}

/// Parses `#rrggbb` (or `#rrggbbaa`) into a [`Color`].
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let color = if digits.len() == 8 {
        Color::from_rgba8(r, g, b, channel(6)?)
    } else {
        Color::from_rgb8(r, g, b)
    };
    Some(color)
}

/// Formats a [`Color`] as `#rrggbb`, dropping alpha.
pub fn format_hex_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    alloc::format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Resolves the color for a legend entry: persisted override first, then the
/// palette by index.
pub fn resolve_color(
    name: &str,
    index: usize,
    overrides: &[NamedColor],
    palette: &dyn ColorPalette,
) -> Color {
    overrides
        .iter()
        .find(|nc| nc.name == name)
        .and_then(|nc| parse_hex_color(&nc.color))
        .unwrap_or_else(|| palette.color_by_index(index))
}
