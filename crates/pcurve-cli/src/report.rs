//! Text and JSON rendering of a pipeline run.

use std::io::Write;

use pcurve_core::Result;
use pcurve_geometry::tessellate::curve_bounds;
use pcurve_geometry::CurveKind;
use pcurve_math::{Aabb3, DVec3};
use pcurve_pipeline::{CurveCollection, Evaluation, RadiusSummary};
use serde::Serialize;

/// One evaluated curve, optionally with its bounds.
#[derive(Debug, Serialize)]
pub struct CurveRow {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Aabb3>,
}

/// Number of curves of one kind in the collection.
#[derive(Debug, Serialize)]
pub struct KindCount {
    pub kind: CurveKind,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub t: f64,
    pub counts: Vec<KindCount>,
    pub curves: Vec<CurveRow>,
    /// Union of every curve's bounds, present only with bounds requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_bounds: Option<Aabb3>,
    pub summary: RadiusSummary,
}

fn fmt_vec(v: DVec3) -> String {
    format!("({:.4}, {:.4}, {:.4})", v.x, v.y, v.z)
}

fn plural(kind: CurveKind) -> String {
    format!("{}s", kind.name().to_lowercase())
}

impl Report {
    /// Run the evaluation and summary stages over `curves`.
    ///
    /// With `bounds_tolerance` set, every curve is also tessellated over
    /// one revolution to report its bounding box.
    pub fn build(
        curves: &CurveCollection,
        t: f64,
        target: CurveKind,
        bounds_tolerance: Option<f64>,
    ) -> Self {
        let rows: Vec<CurveRow> = curves
            .evaluate_all(t)
            .into_iter()
            .zip(curves.iter())
            .map(|(evaluation, curve)| CurveRow {
                evaluation,
                bounds: bounds_tolerance.and_then(|tol| curve_bounds(curve, tol)),
            })
            .collect();
        let overall_bounds = rows
            .iter()
            .filter_map(|row| row.bounds)
            .reduce(|acc, b| acc.merge(&b));
        let counts = curves
            .count_by_kind()
            .into_iter()
            .map(|(kind, count)| KindCount { kind, count })
            .collect();
        Self {
            t,
            counts,
            curves: rows,
            overall_bounds,
            summary: curves.summarize(target),
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Evaluated at t = {:.4}", self.t)?;
        let counts: Vec<String> = self
            .counts
            .iter()
            .map(|c| format!("{} {}", c.kind, c.count))
            .collect();
        writeln!(out, "Curve counts: {}", counts.join(", "))?;
        for row in &self.curves {
            let e = &row.evaluation;
            writeln!(out, "Curve type: {}", e.kind)?;
            writeln!(out, "Point: {}", fmt_vec(e.point))?;
            writeln!(out, "Derivative: {}", fmt_vec(e.derivative))?;
            if let Some(b) = &row.bounds {
                writeln!(out, "Bounds: {} .. {}", fmt_vec(b.min), fmt_vec(b.max))?;
            }
        }

        if let Some(b) = &self.overall_bounds {
            writeln!(out, "All bounds: {} .. {}", fmt_vec(b.min), fmt_vec(b.max))?;
        }

        writeln!(out, "Sorted {}:", plural(self.summary.kind))?;
        if self.summary.radii.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for r in &self.summary.radii {
            writeln!(out, "Radius: {:.4}", r)?;
        }
        writeln!(out, "Total radius sum: {:.4}", self.summary.total)?;
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self).map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}
