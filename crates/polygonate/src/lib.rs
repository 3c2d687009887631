//! Convex partitioning of 2D point clouds by greedy wall removal.
//!
//! A cloud is triangulated, then adjacent shapes are repeatedly merged
//! ("melted") across shared walls whenever the union stays convex, until no
//! removable wall remains. The result partitions the convex hull of the
//! input into convex, non-overlapping polygons.
//!
//! The engine is deterministic: identical points and policy produce
//! identical output. Which wall melts first is governed by [`WallPolicy`];
//! the geometry primitives (triangulation and the hull-vertex-count
//! convexity test) sit behind [`GeometryOracle`] and default to the built-in
//! Bowyer–Watson / monotone-chain implementation.
//!
//! Entry points: [`polygonate`] for the full fixpoint run,
//! [`removable_walls`] for a single detection pass.

pub mod delaunay;
pub mod error;
pub mod geom2;
pub mod melt;
pub mod oracle;
pub mod sample;

pub use error::Error;
pub use melt::{
    polygonate, polygonate_with, removable_walls, Candidate, MeltCfg, Shape, ShapeGraph, Wall,
    WallPolicy,
};
pub use oracle::{BuiltinOracle, GeometryOracle};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers can spell point slices as `&[Vec2<f64>]`.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::delaunay::{triangulate, Triangulation, BOUNDARY};
    pub use crate::melt::{
        detect_candidates, melt_to_fixpoint, polygonate, polygonate_with, removable_walls,
        removable_walls_with, Candidate, MeltCfg, Shape, ShapeGraph, Wall, WallPolicy, WallStats,
    };
    pub use crate::oracle::{BuiltinOracle, GeometryOracle};
    pub use crate::sample::{draw_points_uniform, ReplayToken, ScatterCfg};
    pub use crate::Error;
    pub use nalgebra::Vector2 as Vec2;
}
