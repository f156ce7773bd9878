use std::f64::consts::PI;
use std::io;
use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;
use pcurve_geometry::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Spiral};
use pcurve_math::dvec3;
use pcurve_pipeline::{assemble_random, sort_by_radius, total_radius, CurveCollection, SampleRanges};
use pcurve_sampler::FixedSequence;
use tracing::Level;

fn circles_and_ellipse() -> CurveCollection {
    [
        AnyCurve::from(Circle::new(5.0).unwrap()),
        AnyCurve::from(Ellipse::new(3.0, 1.0).unwrap()),
        AnyCurve::from(Circle::new(2.0).unwrap()),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_filter_keeps_only_target_kind() {
    let curves = circles_and_ellipse();
    let circles = curves.of_kind(CurveKind::Circle);
    assert_eq!(circles.len(), 2);
    assert!(circles.iter().all(|c| c.kind() == CurveKind::Circle));
    // relative order preserved
    assert_eq!(circles[0].characteristic_radius(), 5.0);
    assert_eq!(circles[1].characteristic_radius(), 2.0);
}

#[test]
fn test_sort_and_sum_circles() {
    let curves = circles_and_ellipse();
    let mut circles = curves.of_kind(CurveKind::Circle);
    sort_by_radius(&mut circles);
    assert_eq!(*circles[0], AnyCurve::from(Circle::new(2.0).unwrap()));
    assert_eq!(*circles[1], AnyCurve::from(Circle::new(5.0).unwrap()));
    assert_eq!(total_radius(&circles), 7.0);
}

#[test]
fn test_summary_matches_manual_pipeline() {
    let curves = circles_and_ellipse();
    let summary = curves.summarize(CurveKind::Circle);
    assert_eq!(summary.kind, CurveKind::Circle);
    assert_eq!(summary.radii, vec![2.0, 5.0]);
    assert_eq!(summary.total, 7.0);

    let ellipses = curves.summarize(CurveKind::Ellipse);
    assert_eq!(ellipses.radii, vec![3.0]);
}

#[test]
fn test_no_target_curves_sums_to_zero() {
    let curves = circles_and_ellipse();
    let summary = curves.summarize(CurveKind::Spiral);
    assert!(summary.radii.is_empty());
    assert_eq!(summary.total, 0.0);
}

#[test]
fn test_pipeline_leaves_collection_intact() {
    let curves = circles_and_ellipse();
    let before = curves.as_slice().to_vec();
    let _ = curves.evaluate_all(1.0);
    let _ = curves.summarize(CurveKind::Circle);
    assert_eq!(curves.as_slice(), before.as_slice());
    assert_eq!((&curves).into_iter().count(), 3);
}

#[test]
fn test_end_to_end_quarter_turn() {
    let mut sampler = FixedSequence::new([3.0, 4.0, 2.0, 2.0, 0.3]);
    let curves = assemble_random(&mut sampler, &SampleRanges::default(), 1).unwrap();

    let evals = curves.evaluate_all(PI / 4.0);
    assert_eq!(evals.len(), 3);
    assert_eq!(evals[0].kind, CurveKind::Circle);
    assert_abs_diff_eq!(evals[0].point, dvec3(2.1213, 2.1213, 0.0), epsilon = 1e-3);
    assert_eq!(evals[1].kind, CurveKind::Ellipse);
    assert_abs_diff_eq!(evals[1].point, dvec3(2.8284, 1.4142, 0.0), epsilon = 1e-3);
    assert_eq!(evals[2].kind, CurveKind::Spiral);
    assert_abs_diff_eq!(evals[2].point, dvec3(1.4142, 1.4142, 0.0375), epsilon = 1e-3);

    let summary = curves.summarize(CurveKind::Circle);
    assert_eq!(summary.radii, vec![3.0]);
    assert_eq!(summary.total, 3.0);
}

#[test]
fn test_large_mixed_collection_sorted() {
    let mut curves = CurveCollection::new();
    for i in 0..50 {
        let r = ((i * 37) % 50 + 1) as f64;
        curves.push(Circle::new(r).unwrap());
        curves.push(Spiral::new(r, -0.2).unwrap());
    }
    let summary = curves.summarize(CurveKind::Circle);
    assert_eq!(summary.radii.len(), 50);
    assert!(summary.radii.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(summary.total, (1..=50).sum::<i32>() as f64);
}

#[test]
fn test_evaluations_serialize() {
    let curves = circles_and_ellipse();
    let json = serde_json::to_value(curves.evaluate_all(0.0)).unwrap();
    assert_eq!(json[1]["kind"], "ellipse");
    assert_eq!(json[1]["point"][0], 3.0);
    let json = serde_json::to_value(curves.summarize(CurveKind::Circle)).unwrap();
    assert_eq!(json["total"], 7.0);
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_summary_logged_at_info() {
    let curves = circles_and_ellipse();
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || curves.summarize(CurveKind::Circle));

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("summary computed"), "missing info event: {output}");
    assert!(output.contains("selected=2"));
}
