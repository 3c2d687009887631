//! Data types for shapes, walls, candidates, and melt configuration.
//!
//! Kept small and explicit to make `graph`, `detect`, and `solve` easy to
//! read.

use nalgebra::Vector2;

/// Ordered vertex loop of a simple convex polygon, as indices into the
/// caller's point slice. Consecutive entries (wrapping) are edges; loops are
/// kept CCW.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub verts: Vec<usize>,
}

impl Shape {
    #[inline]
    pub fn new(verts: Vec<usize>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.verts.contains(&v)
    }

    /// Coordinates of the loop in vertex order.
    pub fn coords(&self, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        self.verts.iter().map(|&v| points[v]).collect()
    }

    /// Shoelace area of the loop. Positive iff CCW.
    pub fn signed_area(&self, points: &[Vector2<f64>]) -> f64 {
        let n = self.verts.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0;
        for k in 0..n {
            let p = points[self.verts[k]];
            let q = points[self.verts[(k + 1) % n]];
            acc += p.x * q.y - q.x * p.y;
        }
        0.5 * acc
    }
}

/// Unordered pair of point indices shared by two adjacent shapes; stored
/// with the smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wall {
    pub lo: usize,
    pub hi: usize,
}

impl Wall {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Direction vector from `lo` to `hi`.
    #[inline]
    pub fn direction(&self, points: &[Vector2<f64>]) -> Vector2<f64> {
        points[self.hi] - points[self.lo]
    }

    #[inline]
    pub fn length(&self, points: &[Vector2<f64>]) -> f64 {
        self.direction(points).norm()
    }
}

/// Geometric characteristics of a removable wall; used only by the
/// selection policy.
#[derive(Clone, Copy, Debug)]
pub struct WallStats {
    /// Euclidean length of the wall.
    pub length: f64,
    /// Unsigned cosines between the wall direction and the four edges
    /// incident to its endpoints in the two source shapes, sorted
    /// descending.
    pub cos_angles: [f64; 4],
}

/// A wall whose removal keeps the union convex, plus everything needed to
/// apply the merge.
///
/// Candidates are recomputed from scratch every iteration: a melt renumbers
/// shape indices, so a candidate is stale as soon as any melt is applied.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub wall: Wall,
    /// Source shape indices, `pair.0 < pair.1`.
    pub pair: (usize, usize),
    /// The union loop, CCW, without the wall edge.
    pub merged: Shape,
    pub stats: WallStats,
}

/// Rule for choosing which removable wall to melt next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallPolicy {
    /// Melt the shortest wall first.
    Shortest,
    /// Melt the longest wall first.
    Longest,
    /// Melt the wall with the most extreme incident angle first (largest
    /// |cos|, i.e. angle closest to 0° or 180°).
    Sharpest,
}

/// Melt configuration (selection tolerances).
///
/// The convexity decision is an exact integer comparison and takes no
/// epsilon; these tolerances only widen ties in the selection policy so
/// near-equal candidates resolve to detection order.
#[derive(Clone, Copy, Debug)]
pub struct MeltCfg {
    pub eps_len: f64,
    pub eps_cos: f64,
}

impl Default for MeltCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-12,
            eps_cos: 1e-12,
        }
    }
}
