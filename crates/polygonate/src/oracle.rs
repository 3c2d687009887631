//! Pluggable geometry services behind the melt engine.
//!
//! Purpose
//! - The engine needs exactly two geometric capabilities: an initial
//!   triangulation of the cloud, and a convexity test phrased as "how many
//!   points of this subset are hull vertices". Both sit behind
//!   [`GeometryOracle`] so a caller can substitute e.g. an exact-arithmetic
//!   kernel; [`BuiltinOracle`] is the f64 implementation shipped here.

use nalgebra::Vector2;

use crate::delaunay::{self, Triangulation};
use crate::error::Error;
use crate::geom2;

pub trait GeometryOracle {
    /// Triangulate the full cloud. The triangles must tile the convex hull
    /// of `points` exactly once (no gaps, no overlaps), CCW, with neighbor
    /// lists using the [`crate::delaunay::BOUNDARY`] sentinel.
    fn triangulate(&self, points: &[Vector2<f64>]) -> Result<Triangulation, Error>;

    /// Number of strictly extreme points on the convex hull of `points`.
    ///
    /// The melt engine treats a vertex loop as convex iff this equals the
    /// loop length; the comparison is exact, so implementations must not
    /// count collinear or duplicated points as hull vertices.
    fn hull_vertex_count(&self, points: &[Vector2<f64>]) -> usize;
}

/// Default oracle: Bowyer–Watson triangulation and monotone-chain hulls.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinOracle;

impl GeometryOracle for BuiltinOracle {
    fn triangulate(&self, points: &[Vector2<f64>]) -> Result<Triangulation, Error> {
        delaunay::triangulate(points)
    }

    fn hull_vertex_count(&self, points: &[Vector2<f64>]) -> usize {
        geom2::hull_vertex_count(points)
    }
}
