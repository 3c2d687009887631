//! Candidate detection: every wall whose removal keeps the union convex.
//!
//! Visits each undirected neighbor pair exactly once, `i` ascending then `j`
//! ascending (neighbor lists are sorted), so the candidate order, and with it
//! every tie-break in the selection policy, is deterministic.

use nalgebra::Vector2;

use crate::error::Error;
use crate::geom2::abs_cos_angle;
use crate::oracle::GeometryOracle;

use super::graph::ShapeGraph;
use super::types::{Candidate, Shape, Wall, WallStats};

/// Scan all adjacent shape pairs and return the removable walls, in
/// deterministic detection order.
///
/// Structural inconsistencies (a neighbor pair not sharing exactly one wall)
/// are fatal: they signal a corrupted triangulation, not a skippable pair.
pub fn detect_candidates<O: GeometryOracle + ?Sized>(
    graph: &ShapeGraph,
    points: &[Vector2<f64>],
    oracle: &O,
) -> Result<Vec<Candidate>, Error> {
    let mut out = Vec::new();
    for i in 0..graph.shape_count() {
        for &j in graph.neighbors_of(i) {
            if j <= i {
                continue;
            }
            if let Some(cand) = try_pair(graph, points, oracle, i, j)? {
                out.push(cand);
            }
        }
    }
    Ok(out)
}

/// Test one neighbor pair; `None` means the merged loop would not be convex.
fn try_pair<O: GeometryOracle + ?Sized>(
    graph: &ShapeGraph,
    points: &[Vector2<f64>],
    oracle: &O,
    i: usize,
    j: usize,
) -> Result<Option<Candidate>, Error> {
    let s1 = graph.shape_at(i);
    let s2 = graph.shape_at(j);

    let shared: Vec<usize> = s1
        .verts
        .iter()
        .copied()
        .filter(|&v| s2.contains_vertex(v))
        .collect();
    if shared.len() != 2 {
        return Err(Error::InvalidWall {
            a: i,
            b: j,
            shared: shared.len(),
        });
    }
    let wall = Wall::new(shared[0], shared[1]);

    let loop1 = align_to_wall(s1, wall).ok_or(Error::WallNotAnEdge {
        a: i,
        b: j,
        shape: i,
    })?;
    let loop2 = align_to_wall(s2, wall).ok_or(Error::WallNotAnEdge {
        a: i,
        b: j,
        shape: j,
    })?;

    // Union loop: walk shape i from wall.lo to wall.hi, then shape j back
    // from wall.hi to wall.lo, dropping the wall endpoints at each join.
    let mut verts = Vec::with_capacity(loop1.len() + loop2.len() - 2);
    verts.extend_from_slice(&loop1[..loop1.len() - 1]);
    verts.extend(loop2.iter().rev().take(loop2.len() - 1));
    let mut merged = Shape::new(verts);

    // Convex iff every vertex of the union is a hull vertex. The count
    // comparison is exact; it also rejects duplicated vertices.
    if oracle.hull_vertex_count(&merged.coords(points)) != merged.len() {
        return Ok(None);
    }
    if merged.signed_area(points) < 0.0 {
        merged.verts.reverse();
    }

    let wall_dir = wall.direction(points);
    let edge = |a: usize, b: usize| points[b] - points[a];
    let mut cos = [
        abs_cos_angle(wall_dir, edge(loop1[0], loop1[1])),
        abs_cos_angle(wall_dir, edge(loop1[loop1.len() - 2], loop1[loop1.len() - 1])),
        abs_cos_angle(wall_dir, edge(loop2[0], loop2[1])),
        abs_cos_angle(wall_dir, edge(loop2[loop2.len() - 2], loop2[loop2.len() - 1])),
    ];
    cos.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    Ok(Some(Candidate {
        wall,
        pair: (i, j),
        merged,
        stats: WallStats {
            length: wall_dir.norm(),
            cos_angles: cos,
        },
    }))
}

/// Rotate (and flip if needed) the vertex loop so `wall.lo` comes first and
/// `wall.hi` last; the closing edge is then the wall itself. `None` if the
/// wall endpoints are not cyclically adjacent in the loop.
fn align_to_wall(shape: &Shape, wall: Wall) -> Option<Vec<usize>> {
    let n = shape.len();
    let p0 = shape.verts.iter().position(|&v| v == wall.lo)?;
    let p1 = shape.verts.iter().position(|&v| v == wall.hi)?;
    let mut out = Vec::with_capacity(n);
    if (p1 + 1) % n == p0 {
        // hi immediately precedes lo: starting at lo puts hi last.
        out.extend(shape.verts[p0..].iter().copied());
        out.extend(shape.verts[..p0].iter().copied());
    } else if (p0 + 1) % n == p1 {
        // lo immediately precedes hi: start at hi, then flip.
        out.extend(shape.verts[p1..].iter().copied());
        out.extend(shape.verts[..p1].iter().copied());
        out.reverse();
    } else {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_puts_wall_endpoints_at_the_rim() {
        let shape = Shape::new(vec![7, 2, 9, 4]);
        for wall in [Wall::new(2, 7), Wall::new(9, 2), Wall::new(4, 9), Wall::new(4, 7)] {
            let aligned = align_to_wall(&shape, wall).unwrap();
            assert_eq!(aligned[0], wall.lo);
            assert_eq!(*aligned.last().unwrap(), wall.hi);
            // Same cyclic loop: same multiset of vertices.
            let mut sorted = aligned.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![2, 4, 7, 9]);
        }
        // Diagonal (non-edge) pair.
        assert!(align_to_wall(&shape, Wall::new(7, 9)).is_none());
        assert!(align_to_wall(&shape, Wall::new(2, 4)).is_none());
    }
}
