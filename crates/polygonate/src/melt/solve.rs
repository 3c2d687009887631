//! Fixpoint loop and public entry points.
//!
//! Each iteration flows one way: graph → detect → pick → melt → graph. The
//! loop halts when detection returns no candidate; since every melt removes
//! exactly one shape, it runs at most `initial_shape_count - 1` times.

use nalgebra::Vector2;
use tracing::debug;

use crate::error::Error;
use crate::oracle::{BuiltinOracle, GeometryOracle};

use super::detect::detect_candidates;
use super::graph::ShapeGraph;
use super::types::{Candidate, MeltCfg, Shape, WallPolicy};

/// Partition the cloud into convex, non-overlapping polygons covering its
/// convex hull, using the built-in oracle and default tolerances.
pub fn polygonate(points: &[Vector2<f64>], policy: WallPolicy) -> Result<Vec<Shape>, Error> {
    polygonate_with(points, policy, &BuiltinOracle, MeltCfg::default())
}

/// As [`polygonate`], with an explicit geometry oracle and selection
/// tolerances.
pub fn polygonate_with<O: GeometryOracle + ?Sized>(
    points: &[Vector2<f64>],
    policy: WallPolicy,
    oracle: &O,
    cfg: MeltCfg,
) -> Result<Vec<Shape>, Error> {
    let tri = oracle.triangulate(points)?;
    let mut graph = ShapeGraph::from_triangulation(&tri);
    melt_to_fixpoint(&mut graph, points, policy, oracle, cfg)?;
    Ok(graph.into_shapes())
}

/// Run {detect → select → melt} until no removable wall remains. Returns
/// the number of melts applied.
pub fn melt_to_fixpoint<O: GeometryOracle + ?Sized>(
    graph: &mut ShapeGraph,
    points: &[Vector2<f64>],
    policy: WallPolicy,
    oracle: &O,
    cfg: MeltCfg,
) -> Result<usize, Error> {
    let mut melts = 0usize;
    loop {
        let mut cands = detect_candidates(graph, points, oracle)?;
        if cands.is_empty() {
            debug!(melts, shapes = graph.shape_count(), "no removable wall left");
            return Ok(melts);
        }
        let picked = policy.pick(&cands, cfg);
        let cand = cands.swap_remove(picked);
        debug!(
            wall = ?cand.wall,
            pair = ?cand.pair,
            shapes = graph.shape_count(),
            "melting"
        );
        graph.melt(cand.pair.0, cand.pair.1, cand.merged);
        melts += 1;
    }
}

/// One triangulation plus one detection pass: every wall that could be
/// melted right now, without running the loop.
pub fn removable_walls(points: &[Vector2<f64>]) -> Result<Vec<Candidate>, Error> {
    removable_walls_with(points, &BuiltinOracle)
}

/// As [`removable_walls`], with an explicit geometry oracle.
pub fn removable_walls_with<O: GeometryOracle + ?Sized>(
    points: &[Vector2<f64>],
    oracle: &O,
) -> Result<Vec<Candidate>, Error> {
    let tri = oracle.triangulate(points)?;
    let graph = ShapeGraph::from_triangulation(&tri);
    detect_candidates(&graph, points, oracle)
}
