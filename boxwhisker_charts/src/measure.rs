// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement abstraction.
//!
//! Layout needs text sizes, but this crate does not depend on a text stack.
//! Hosts provide a [`TextMeasurer`]; [`HeuristicTextMeasurer`] is a dependency-free
//! approximation for tests and headless use.

/// Measures rendered text so axis and label layout can reserve space.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels for `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A crude measurer assuming an average glyph advance of 0.6em and a line
/// height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = text.chars().count() as f64 * font_size * 0.6;
        (width, font_size)
    }
}
