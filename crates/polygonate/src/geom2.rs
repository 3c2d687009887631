//! 2D predicates and convex-hull utilities.
//!
//! Purpose
//! - Small, allocation-light primitives shared by the triangulator and the
//!   melt engine: orientation and incircle signs, Andrew's monotone chain,
//!   the hull-vertex-count convexity test, and shoelace areas.
//!
//! Conventions
//! - Hulls keep only strictly extreme points: collinear or duplicated points
//!   never count as hull vertices. This makes `hull_vertex_count(pts) ==
//!   pts.len()` an exact test for "all points in strictly convex position",
//!   with no epsilon in the decision itself.

use nalgebra::Vector2;

/// Twice the signed area of triangle (a, b, c). Positive iff CCW.
#[inline]
pub fn orient2d(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Incircle sign for a CCW triangle (a, b, c): positive iff `p` lies
/// strictly inside the circumcircle.
pub fn incircle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
) -> f64 {
    let ad = a - p;
    let bd = b - p;
    let cd = c - p;
    let alift = ad.norm_squared();
    let blift = bd.norm_squared();
    let clift = cd.norm_squared();
    ad.x * (bd.y * clift - cd.y * blift) - ad.y * (bd.x * clift - cd.x * blift)
        + alift * (bd.x * cd.y - cd.x * bd.y)
}

/// Unsigned cosine of the angle between `a` and `b`.
///
/// Callers must not pass zero-length vectors.
#[inline]
pub fn abs_cos_angle(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.dot(&b) / (a.norm() * b.norm())).abs()
}

/// Andrew's monotone chain convex hull, CCW order, strictly extreme points
/// only. Degenerate inputs (all collinear, fewer than 3 distinct points)
/// yield fewer than 3 hull points.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| a.x == b.x && a.y == b.y);
    if pts.len() < 2 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && orient2d(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && orient2d(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Number of strictly extreme points on the convex hull of `points`.
#[inline]
pub fn hull_vertex_count(points: &[Vector2<f64>]) -> usize {
    convex_hull(points).len()
}

/// Shoelace area of a closed vertex loop. Positive iff CCW.
pub fn polygon_signed_area(verts: &[Vector2<f64>]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..verts.len() {
        let p = verts[k];
        let q = verts[(k + 1) % verts.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn hull_counts_extreme_points_only() {
        let square = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        assert_eq!(hull_vertex_count(&square), 4);

        // Center point is interior, edge midpoint is collinear: neither counts.
        let with_center = [
            v(0.0, 0.0),
            v(1.0, 0.0),
            v(1.0, 1.0),
            v(0.0, 1.0),
            v(0.5, 0.5),
        ];
        assert_eq!(hull_vertex_count(&with_center), 4);
        let with_mid = [v(0.0, 0.0), v(0.5, 0.0), v(1.0, 0.0), v(0.5, 1.0)];
        assert_eq!(hull_vertex_count(&with_mid), 3);
    }

    #[test]
    fn hull_degenerates_below_three() {
        let collinear = [v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0)];
        assert_eq!(hull_vertex_count(&collinear), 2);
        let duplicated = [v(0.5, 0.5), v(0.5, 0.5), v(0.5, 0.5)];
        assert_eq!(hull_vertex_count(&duplicated), 1);
    }

    #[test]
    fn hull_is_ccw() {
        let pts = [v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(1.0, 1.0)];
        let hull = convex_hull(&pts);
        assert!(polygon_signed_area(&hull) > 0.0);
    }

    #[test]
    fn orientation_and_incircle_signs() {
        let (a, b, c) = (v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
        assert!(orient2d(a, b, c) > 0.0);
        assert!(orient2d(a, c, b) < 0.0);
        assert_eq!(orient2d(a, b, v(2.0, 0.0)), 0.0);
        // Circumcenter region vs far point.
        assert!(incircle(a, b, c, v(0.3, 0.3)) > 0.0);
        assert!(incircle(a, b, c, v(5.0, 5.0)) < 0.0);
    }

    #[test]
    fn shoelace_unit_square() {
        let sq = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        assert!((polygon_signed_area(&sq) - 1.0).abs() < 1e-15);
        let rev = [v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(1.0, 0.0)];
        assert!((polygon_signed_area(&rev) + 1.0).abs() < 1e-15);
    }

    #[test]
    fn cos_angle_is_unsigned() {
        let e = v(1.0, 0.0);
        assert!((abs_cos_angle(e, v(-2.0, 0.0)) - 1.0).abs() < 1e-15);
        assert!(abs_cos_angle(e, v(0.0, 3.0)).abs() < 1e-15);
        assert!((abs_cos_angle(e, v(1.0, 1.0)) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}
