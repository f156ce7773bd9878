//! Ordered, append-only storage of curves.

use pcurve_geometry::{AnyCurve, Curve, CurveKind};
use pcurve_math::{Point3, Vector3};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::query::{self, RadiusSummary};

/// One curve evaluated at a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Position of the curve in its collection.
    pub index: usize,
    pub kind: CurveKind,
    pub point: Point3,
    pub derivative: Vector3,
}

/// Curves of mixed kinds in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CurveCollection {
    curves: Vec<AnyCurve>,
}

impl CurveCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, curve: impl Into<AnyCurve>) {
        let curve = curve.into();
        debug!(index = self.curves.len(), kind = %curve.kind(), "curve added");
        self.curves.push(curve);
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnyCurve> {
        self.curves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyCurve> {
        self.curves.iter()
    }

    pub fn as_slice(&self) -> &[AnyCurve] {
        &self.curves
    }

    /// Evaluate position and derivative of every curve at `t`, in order.
    #[instrument(skip(self), fields(curves = self.curves.len()))]
    pub fn evaluate_all(&self, t: f64) -> Vec<Evaluation> {
        self.curves
            .iter()
            .enumerate()
            .map(|(index, curve)| Evaluation {
                index,
                kind: curve.kind(),
                point: curve.point_at(t),
                derivative: curve.derivative_at(t),
            })
            .collect()
    }

    /// Borrow the curves of one kind, keeping their relative order.
    pub fn of_kind(&self, kind: CurveKind) -> Vec<&AnyCurve> {
        self.curves.iter().filter(|c| c.kind() == kind).collect()
    }

    /// How many curves of each kind the collection holds.
    pub fn count_by_kind(&self) -> [(CurveKind, usize); 3] {
        CurveKind::ALL.map(|kind| (kind, self.iter().filter(|c| c.kind() == kind).count()))
    }

    /// Filter to `kind`, sort ascending by radius, and total the radii.
    #[instrument(skip(self), fields(curves = self.curves.len()))]
    pub fn summarize(&self, kind: CurveKind) -> RadiusSummary {
        let mut selected = self.of_kind(kind);
        query::sort_by_radius(&mut selected);
        let summary = RadiusSummary::from_sorted(kind, &selected);
        info!(selected = summary.radii.len(), total = summary.total, "summary computed");
        summary
    }
}

impl FromIterator<AnyCurve> for CurveCollection {
    fn from_iter<I: IntoIterator<Item = AnyCurve>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}

impl Extend<AnyCurve> for CurveCollection {
    fn extend<I: IntoIterator<Item = AnyCurve>>(&mut self, iter: I) {
        for curve in iter {
            self.push(curve);
        }
    }
}

impl<'a> IntoIterator for &'a CurveCollection {
    type Item = &'a AnyCurve;
    type IntoIter = std::slice::Iter<'a, AnyCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
