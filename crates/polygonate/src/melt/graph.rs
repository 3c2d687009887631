//! Shape list, neighbor relation, and the melt (merge) operator.
//!
//! Purpose
//! - Own the mutable state of the computation: a dense shape list and
//!   per-shape neighbor lists. `melt` is the only mutator; detection and
//!   selection read through the accessors.
//!
//! Invariants
//! - Neighbor lists are sorted ascending and deduplicated, which makes the
//!   detector's pair visitation order deterministic.
//! - The relation is symmetric: `b ∈ neighbors(a) ⇔ a ∈ neighbors(b)`.
//! - Shape indices are dense positions, not stable handles: every melt
//!   renumbers them. References held across a melt are invalid.

use crate::delaunay::{Triangulation, BOUNDARY};

use super::types::Shape;

#[derive(Clone, Debug)]
pub struct ShapeGraph {
    shapes: Vec<Shape>,
    neighbors: Vec<Vec<usize>>,
}

impl ShapeGraph {
    /// Seed from shapes and raw neighbor lists. `BOUNDARY` entries mark
    /// outer edges and are dropped; lists are sorted and deduplicated.
    pub fn new(shapes: Vec<Shape>, neighbor_lists: Vec<Vec<usize>>) -> Self {
        debug_assert_eq!(shapes.len(), neighbor_lists.len());
        let neighbors = neighbor_lists
            .into_iter()
            .map(|mut ns| {
                ns.retain(|&s| s != BOUNDARY);
                ns.sort_unstable();
                ns.dedup();
                ns
            })
            .collect();
        Self { shapes, neighbors }
    }

    pub fn from_triangulation(tri: &Triangulation) -> Self {
        let shapes = tri
            .triangles
            .iter()
            .map(|t| Shape::new(t.to_vec()))
            .collect();
        let neighbor_lists = tri.neighbors.iter().map(|ns| ns.to_vec()).collect();
        Self::new(shapes, neighbor_lists)
    }

    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn shape_at(&self, i: usize) -> &Shape {
        &self.shapes[i]
    }

    /// Sorted indices of the shapes sharing a wall with shape `i`.
    #[inline]
    pub fn neighbors_of(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    /// Merge shapes `i` and `j` (`i < j`) into `merged`.
    ///
    /// Both source shapes are removed (higher index first) and `merged` is
    /// appended at the new final index `k`. Every stored neighbor reference
    /// is then renumbered with one rule applied graph-wide: `i` or `j` → `k`;
    /// indices below `i` unchanged; strictly between `i` and `j` shift down
    /// by 1; above `j` shift down by 2. The shape count drops by exactly 1.
    pub fn melt(&mut self, i: usize, j: usize, merged: Shape) {
        debug_assert!(i < j && j < self.shapes.len());
        self.shapes.remove(j);
        self.shapes.remove(i);
        let k = self.shapes.len();
        self.shapes.push(merged);

        let nj = self.neighbors.remove(j);
        let ni = self.neighbors.remove(i);
        let merged_ns: Vec<usize> = ni
            .into_iter()
            .chain(nj)
            .filter(|&s| s != i && s != j)
            .collect();
        self.neighbors.push(merged_ns);

        for ns in self.neighbors.iter_mut() {
            for s in ns.iter_mut() {
                *s = if *s == i || *s == j {
                    k
                } else if *s < i {
                    *s
                } else if *s < j {
                    *s - 1
                } else {
                    *s - 2
                };
            }
            ns.sort_unstable();
            ns.dedup();
        }
        debug_assert!(self.is_symmetric(), "melt must preserve adjacency symmetry");
    }

    /// Whether the neighbor relation is symmetric. Used by debug assertions
    /// and tests.
    pub fn is_symmetric(&self) -> bool {
        self.neighbors.iter().enumerate().all(|(a, ns)| {
            ns.iter().all(|&b| {
                self.neighbors
                    .get(b)
                    .map_or(false, |back| back.binary_search(&a).is_ok())
            })
        })
    }
}
