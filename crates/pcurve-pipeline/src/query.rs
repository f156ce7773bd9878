//! Sorting and aggregation over borrowed curve subsets.

use pcurve_geometry::{AnyCurve, Curve, CurveKind};
use serde::Serialize;

/// Sort borrowed curves by ascending characteristic radius.
///
/// Equal radii keep no particular order.
pub fn sort_by_radius(curves: &mut [&AnyCurve]) {
    curves.sort_unstable_by(|a, b| {
        a.characteristic_radius()
            .total_cmp(&b.characteristic_radius())
    });
}

/// Sum of characteristic radii; `0.0` for an empty slice.
pub fn total_radius(curves: &[&AnyCurve]) -> f64 {
    curves
        .iter()
        .fold(0.0, |acc, c| acc + c.characteristic_radius())
}

/// Sorted radii of one curve kind and their sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiusSummary {
    pub kind: CurveKind,
    pub radii: Vec<f64>,
    pub total: f64,
}

impl RadiusSummary {
    /// Build from curves that are already sorted.
    pub fn from_sorted(kind: CurveKind, sorted: &[&AnyCurve]) -> Self {
        Self {
            kind,
            radii: sorted.iter().map(|c| c.characteristic_radius()).collect(),
            total: total_radius(sorted),
        }
    }
}
