//! Bowyer–Watson Delaunay triangulation with per-triangle neighbor lists.
//!
//! Purpose
//! - Built-in triangulation service: turn a point cloud into CCW triangles
//!   tiling the convex hull exactly once, plus for each triangle the indices
//!   of the triangles across its three edges (`BOUNDARY` for outer edges).
//!
//! Method
//! - Classic incremental insertion: wrap the cloud in a large super-triangle,
//!   insert points one by one by carving out the cavity of triangles whose
//!   circumcircle contains the new point, then drop every triangle touching a
//!   super-vertex. Duplicated points never enter any triangle.
//! - Cavity boundary edges are sorted before re-triangulating, so the output
//!   triangle order is a pure function of the input point order.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::error::Error;
use crate::geom2::{incircle, orient2d};

/// Absent-neighbor sentinel in [`Triangulation::neighbors`].
pub const BOUNDARY: usize = usize::MAX;

const SQRT_3: f64 = 1.7320508075688772;

/// Triangles (CCW vertex indices) plus adjacency.
///
/// `neighbors[t][k]` is the index of the triangle sharing the edge
/// `(triangles[t][k], triangles[t][(k + 1) % 3])`, or [`BOUNDARY`] when that
/// edge lies on the outer hull.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub triangles: Vec<[usize; 3]>,
    pub neighbors: Vec<[usize; 3]>,
}

/// Delaunay-triangulate `points`.
///
/// Fails on fewer than 3 points or an all-collinear cloud; both leave no
/// valid triangle set to seed the melt engine with.
pub fn triangulate(points: &[Vector2<f64>]) -> Result<Triangulation, Error> {
    if points.len() < 3 {
        return Err(Error::NotEnoughPoints(points.len()));
    }
    let mut pts = points.to_vec();

    // Super-triangle: equilateral, far outside the bounding box so that
    // circumcircles of boundary triangles are not distorted.
    let (minx, miny, maxx, maxy) = bbox(&pts);
    let delta = (maxx - minx).max(maxy - miny);
    let r = 64.0 * delta + 1.0;
    let cx = 0.5 * (minx + maxx);
    let cy = 0.5 * (miny + maxy);
    let s0 = pts.len();
    pts.push(Vector2::new(cx, cy + 2.0 * r));
    pts.push(Vector2::new(cx - SQRT_3 * r, cy - r));
    pts.push(Vector2::new(cx + SQRT_3 * r, cy - r));

    let mut tris: Vec<[usize; 3]> = vec![[s0, s0 + 1, s0 + 2]];
    for pid in 0..s0 {
        insert_point(pid, &pts, &mut tris);
    }

    // Drop super-triangles, enforce CCW, cull degenerates.
    let mut triangles: Vec<[usize; 3]> = Vec::with_capacity(tris.len());
    for t in tris {
        if t[0] >= s0 || t[1] >= s0 || t[2] >= s0 {
            continue;
        }
        let o = orient2d(pts[t[0]], pts[t[1]], pts[t[2]]);
        if o == 0.0 {
            continue;
        }
        if o < 0.0 {
            triangles.push([t[0], t[2], t[1]]);
        } else {
            triangles.push(t);
        }
    }
    if triangles.is_empty() {
        return Err(Error::CollinearInput);
    }
    let neighbors = neighbor_lists(&triangles);
    Ok(Triangulation {
        triangles,
        neighbors,
    })
}

fn bbox(pts: &[Vector2<f64>]) -> (f64, f64, f64, f64) {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for p in pts {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    (minx, miny, maxx, maxy)
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// Insert one point: remove every triangle whose circumcircle strictly
/// contains it, then fan the cavity boundary around the new point.
fn insert_point(pid: usize, pts: &[Vector2<f64>], tris: &mut Vec<[usize; 3]>) {
    let p = pts[pid];
    let mut bad: Vec<usize> = Vec::new();
    for (ti, t) in tris.iter().enumerate() {
        if incircle(pts[t[0]], pts[t[1]], pts[t[2]], p) > 0.0 {
            bad.push(ti);
        }
    }
    if bad.is_empty() {
        // Coincides with an existing vertex (or sits exactly on a
        // circumcircle boundary with no interior hit): nothing to carve.
        return;
    }

    // Cavity boundary = edges belonging to exactly one bad triangle.
    let mut edge_count: HashMap<(usize, usize), u32> = HashMap::new();
    for &ti in &bad {
        let t = tris[ti];
        for k in 0..3 {
            *edge_count.entry(edge_key(t[k], t[(k + 1) % 3])).or_insert(0) += 1;
        }
    }
    let mut boundary: Vec<(usize, usize)> = edge_count
        .into_iter()
        .filter_map(|(e, c)| if c == 1 { Some(e) } else { None })
        .collect();
    // HashMap order is not deterministic; the triangle list must be.
    boundary.sort_unstable();

    for &ti in bad.iter().rev() {
        tris.swap_remove(ti);
    }
    for (a, b) in boundary {
        if orient2d(pts[a], pts[b], p) > 0.0 {
            tris.push([a, b, pid]);
        } else {
            tris.push([a, pid, b]);
        }
    }
}

/// Pair up triangles across shared edges.
fn neighbor_lists(triangles: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut by_edge: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for (ti, t) in triangles.iter().enumerate() {
        for k in 0..3 {
            by_edge
                .entry(edge_key(t[k], t[(k + 1) % 3]))
                .or_default()
                .push(ti);
        }
    }
    let mut neighbors = vec![[BOUNDARY; 3]; triangles.len()];
    for (ti, t) in triangles.iter().enumerate() {
        for k in 0..3 {
            let owners = &by_edge[&edge_key(t[k], t[(k + 1) % 3])];
            if owners.len() == 2 {
                neighbors[ti][k] = if owners[0] == ti { owners[1] } else { owners[0] };
            }
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{convex_hull, polygon_signed_area};
    use crate::sample::{draw_points_uniform, ReplayToken, ScatterCfg};

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn rejects_degenerate_input() {
        let err = triangulate(&[v(0.0, 0.0), v(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, Error::NotEnoughPoints(2));
        let line: Vec<_> = (0..5).map(|k| v(k as f64, 2.0 * k as f64)).collect();
        assert_eq!(triangulate(&line).unwrap_err(), Error::CollinearInput);
    }

    #[test]
    fn unit_square_gives_two_adjacent_triangles() {
        let points = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        let tri = triangulate(&points).unwrap();
        assert_eq!(tri.triangles.len(), 2);
        for (ti, ns) in tri.neighbors.iter().enumerate() {
            let real: Vec<usize> = ns.iter().copied().filter(|&n| n != BOUNDARY).collect();
            assert_eq!(real, vec![1 - ti]);
        }
    }

    #[test]
    fn triangles_are_ccw_and_tile_the_hull() {
        let points = draw_points_uniform(
            ScatterCfg {
                count: 50,
                extent: 1.0,
            },
            ReplayToken { seed: 11, index: 0 },
        );
        let tri = triangulate(&points).unwrap();
        let mut total = 0.0;
        for t in &tri.triangles {
            let area = 0.5 * orient2d(points[t[0]], points[t[1]], points[t[2]]);
            assert!(area > 0.0);
            total += area;
        }
        let hull_area = polygon_signed_area(&convex_hull(&points));
        assert!((total - hull_area).abs() < 1e-9);
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let points = draw_points_uniform(
            ScatterCfg {
                count: 30,
                extent: 1.0,
            },
            ReplayToken { seed: 5, index: 0 },
        );
        let tri = triangulate(&points).unwrap();
        for (ti, ns) in tri.neighbors.iter().enumerate() {
            for &n in ns.iter().filter(|&&n| n != BOUNDARY) {
                assert!(tri.neighbors[n].contains(&ti));
            }
        }
    }

    #[test]
    fn duplicate_points_never_enter_a_triangle() {
        let points = [
            v(0.0, 0.0),
            v(1.0, 0.0),
            v(0.5, 1.0),
            v(1.0, 0.0), // duplicate of index 1
        ];
        let tri = triangulate(&points).unwrap();
        assert_eq!(tri.triangles.len(), 1);
        assert!(tri.triangles[0].iter().all(|&vtx| vtx != 3));
    }
}
