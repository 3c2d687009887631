//! Greedy wall-removal engine ("melting" adjacent convex shapes).
//!
//! Purpose
//! - Starting from a triangulation, repeatedly merge neighboring shapes
//!   across a shared wall whenever the union stays convex: detection scans
//!   all adjacent pairs, a policy picks one wall, the melt operator rewrites
//!   the graph, repeat until no removable wall remains.
//!
//! Why this design
//! - All state lives in one owned [`ShapeGraph`] passed by mutable borrow
//!   into the single writer (`melt`); detection and selection are pure
//!   readers. Each iteration's dataflow is one-directional, which keeps the
//!   whole loop deterministic and easy to test against its invariants
//!   (convexity, adjacency symmetry, shrink-by-one).
//!
//! Code cross-refs: `ShapeGraph`, `Candidate`, `WallPolicy`,
//! `crate::oracle::GeometryOracle`.

mod detect;
mod graph;
mod policy;
mod solve;
mod types;

pub use detect::detect_candidates;
pub use graph::ShapeGraph;
pub use solve::{
    melt_to_fixpoint, polygonate, polygonate_with, removable_walls, removable_walls_with,
};
pub use types::{Candidate, MeltCfg, Shape, Wall, WallPolicy, WallStats};
