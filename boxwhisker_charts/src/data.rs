// Copyright 2026 the BoxWhisker Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing input data model.
//!
//! The host adapts whatever tabular source it has into a [`DataView`]. The
//! pipeline never sees the host's row objects, only values, names, and opaque
//! selection keys it hands back on interaction geometry.

use alloc::string::String;
use alloc::vec::Vec;

/// Opaque host identity for a category's underlying data, round-tripped
/// through the produced geometry so the host can wire up selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionKey(u64);

impl SelectionKey {
    /// Wraps a raw host key.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw key, as passed to [`from_raw`].
    ///
    /// [`from_raw`]: SelectionKey::from_raw
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// One category's samples within a series.
///
/// `samples` keeps missing values as `None`; whether they count as zero or
/// are dropped is a chart setting, not a data property.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategorySamples {
    /// Category axis label.
    pub name: String,
    /// Host selection identity.
    pub selection: SelectionKey,
    /// Whether the host has cross-highlighted this category.
    pub highlight: bool,
    /// Raw sample values, `None` for missing cells.
    pub samples: Vec<Option<f64>>,
}

/// One series worth of categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesGroup {
    /// Series name; `None` when the host data has no series dimension.
    pub name: Option<String>,
    /// Categories in host order.
    pub categories: Vec<CategorySamples>,
}

/// The complete input to one chart computation.
///
/// Structural equality is what the previous-render cache compares, so two
/// views with identical content always compare equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataView {
    /// Title of the measure column, used to name the synthesized series when
    /// no series dimension exists.
    pub value_title: String,
    /// Names of the sampling columns, surfaced in tooltips.
    pub sample_columns: Vec<String>,
    /// Series in host order. Empty means no data.
    pub series: Vec<SeriesGroup>,
}

impl DataView {
    /// True when no series contains any category.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.categories.is_empty())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn structural_equality() {
        let make = || DataView {
            value_title: "Sales".to_string(),
            sample_columns: vec!["Day".to_string()],
            series: vec![SeriesGroup {
                name: None,
                categories: vec![CategorySamples {
                    name: "North".to_string(),
                    selection: SelectionKey::from_raw(7),
                    highlight: false,
                    samples: vec![Some(1.0), None, Some(3.0)],
                }],
            }],
        };
        assert_eq!(make(), make());
        let mut other = make();
        other.series[0].categories[0].samples[1] = Some(2.0);
        assert_ne!(make(), other);
    }

    #[test]
    fn emptiness() {
        assert!(DataView::default().is_empty());
        let view = DataView {
            series: vec![SeriesGroup::default()],
            ..DataView::default()
        };
        assert!(view.is_empty());
    }
}
