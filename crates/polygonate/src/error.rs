//! Error taxonomy for triangulation seeding and the melt engine.
//!
//! Structural variants (`InvalidWall`, `WallNotAnEdge`) indicate a corrupted
//! or inconsistent upstream triangulation. They are never retried or skipped:
//! the whole computation aborts and no partial result is returned.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Fewer than 3 input points; no triangulation exists.
    #[error("not enough points to triangulate: need at least 3, got {0}")]
    NotEnoughPoints(usize),

    /// Every input point lies on a single line; no triangulation exists.
    #[error("input points are collinear")]
    CollinearInput,

    /// Two shapes recorded as neighbors share a number of vertices other
    /// than the two endpoints of a single wall.
    #[error("shapes {a} and {b} are neighbors but share {shared} vertices instead of 2")]
    InvalidWall { a: usize, b: usize, shared: usize },

    /// A shared wall's endpoints are not consecutive vertices of the shape.
    #[error("wall between shapes {a} and {b} is not an edge of shape {shape}")]
    WallNotAnEdge { a: usize, b: usize, shape: usize },
}
