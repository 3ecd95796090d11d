//! # Bowyer–Watson Delaunay Triangulation
//!
//! Incremental Delaunay triangulation of a point set using Shewchuk's
//! adaptive predicates from the `robust` crate, so in-circle decisions are
//! exact for the given floating-point inputs.

use std::collections::HashMap;

use glam::DVec2;
use robust::{incircle, Coord};

/// Super-triangle size relative to the input extent.
const SUPER_SCALE: f64 = 100.0;

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Returns true if `d` lies strictly inside the circumcircle of the
/// counter-clockwise triangle `a, b, c`.
#[inline]
fn in_circumcircle(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    incircle(coord(a), coord(b), coord(c), coord(d)) > 0.0
}

/// Triangulates distinct points and returns counter-clockwise index triples.
///
/// The points must be pairwise distinct. Fewer than three points, or a
/// fully collinear set, produces no triangles.
pub fn delaunay(points: &[DVec2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let (min, max) = points
        .iter()
        .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
    let center = (min + max) / 2.0;
    let extent = (max - min).max_element().max(1.0) * SUPER_SCALE;

    let mut vertices = points.to_vec();
    vertices.push(center + DVec2::new(-extent, -extent));
    vertices.push(center + DVec2::new(extent, -extent));
    vertices.push(center + DVec2::new(0.0, extent));

    let mut triangles: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];

    for (index, &p) in points.iter().enumerate() {
        let (bad, good): (Vec<[usize; 3]>, Vec<[usize; 3]>) =
            triangles.into_iter().partition(|&[a, b, c]| {
                in_circumcircle(vertices[a], vertices[b], vertices[c], p)
            });

        // Cavity boundary: edges of bad triangles not shared by two of them.
        let mut edge_uses: HashMap<(usize, usize), u32> = HashMap::new();
        for tri in &bad {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                *edge_uses.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }

        triangles = good;
        for tri in &bad {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                if edge_uses.get(&(a.min(b), a.max(b))) == Some(&1) {
                    triangles.push([a, b, index]);
                }
            }
        }
    }

    triangles.retain(|tri| tri.iter().all(|&i| i < n));
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(points: &[DVec2], tri: &[usize; 3]) -> f64 {
        0.5 * (points[tri[1]] - points[tri[0]]).perp_dot(points[tri[2]] - points[tri[0]])
    }

    #[test]
    fn test_delaunay_too_few_points() {
        assert!(delaunay(&[]).is_empty());
        assert!(delaunay(&[DVec2::ZERO, DVec2::X]).is_empty());
    }

    #[test]
    fn test_delaunay_square() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let tris = delaunay(&pts);
        assert_eq!(tris.len(), 2);
        let total: f64 = tris.iter().map(|t| area(&pts, t)).sum();
        assert!((total - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_delaunay_triangles_are_ccw() {
        let pts: Vec<DVec2> = (0..12)
            .map(|i| {
                let a = i as f64 * 0.7;
                DVec2::new(a.cos() * (1.0 + i as f64), a.sin() * (2.0 + i as f64 * 0.5))
            })
            .collect();
        let tris = delaunay(&pts);
        assert!(!tris.is_empty());
        for tri in &tris {
            assert!(area(&pts, tri) > 0.0);
        }
    }

    #[test]
    fn test_delaunay_collinear_points() {
        let pts = [DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)];
        assert!(delaunay(&pts).is_empty());
    }
}
