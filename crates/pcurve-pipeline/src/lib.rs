//! Heterogeneous curve collections and the queries run over them.
//!
//! The pipeline runs in a fixed order against a populated
//! [`CurveCollection`]: evaluate every curve at one parameter, keep the
//! curves of one [`CurveKind`](pcurve_geometry::CurveKind), sort them by
//! characteristic radius, then sum those radii. Every stage borrows from
//! the collection; nothing is moved out of it.

pub mod assemble;
pub mod collection;
pub mod query;

pub use assemble::{assemble_random, SampleRanges};
pub use collection::{CurveCollection, Evaluation};
pub use query::{sort_by_radius, total_radius, RadiusSummary};
