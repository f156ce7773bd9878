use std::f64::consts::FRAC_PI_4;

use clap::{ArgAction, Parser};
use pcurve_core::Tolerance;
use pcurve_geometry::CurveKind;

/// Evaluate random parametric curves and summarise one kind by radius.
#[derive(Debug, Parser)]
#[command(name = "pcurve", version, about)]
pub struct Args {
    /// Curve parameter at which every curve is evaluated.
    #[arg(short, long, default_value_t = FRAC_PI_4, allow_negative_numbers = true)]
    pub t: f64,

    /// Seed for reproducible sampling; system entropy otherwise.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of (circle, ellipse, spiral) groups to generate.
    #[arg(long, default_value_t = 1)]
    pub sets: usize,

    /// Curve kind to filter, sort and sum: circle, ellipse or spiral.
    #[arg(long, default_value_t = CurveKind::Circle)]
    pub target: CurveKind,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also report the bounding box of one revolution of each curve.
    #[arg(long)]
    pub bounds: bool,

    /// Chord tolerance used when tessellating curves for `--bounds`.
    #[arg(long, default_value_t = Tolerance::DEFAULT_CHORD)]
    pub tolerance: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
