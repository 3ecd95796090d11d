//! # Polygon Triangulation
//!
//! Triangulates a polygon with holes: a Delaunay triangulation of every
//! boundary point is filtered down to the triangles whose centroid lies
//! inside the outer loop and outside all holes.
//!
//! Points on a boundary count as inside that loop. A centroid on the outer
//! edge is kept; one on a hole edge is dropped.

pub mod delaunay;


use std::collections::HashSet;

use config::params::Tolerances;
use glam::DVec2;

use crate::profile::{Polygon2D, Profile2D};

pub use delaunay::delaunay;

/// Triangulates `polygon` and returns counter-clockwise triangles.
///
/// An empty or zero-area polygon yields no triangles; that is logged, not
/// reported as an error.
pub fn triangulate(polygon: &Polygon2D, tolerances: &Tolerances) -> Vec<[DVec2; 3]> {
    let outer_area = polygon.outer.signed_area().abs();
    if polygon.outer.unique_points().len() < 3 || outer_area < tolerances.epsilon {
        tracing::warn!(
            points = polygon.outer.len(),
            area = outer_area,
            "degenerate polygon, nothing to triangulate"
        );
        return Vec::new();
    }

    let points = collect_points(polygon);
    let triangles: Vec<[DVec2; 3]> = delaunay(&points)
        .into_iter()
        .map(|[a, b, c]| [points[a], points[b], points[c]])
        .filter(|tri| {
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            keeps_centroid(polygon, centroid, tolerances.epsilon)
        })
        .collect();

    tracing::debug!(
        points = points.len(),
        holes = polygon.holes.len(),
        triangles = triangles.len(),
        "triangulated polygon"
    );
    triangles
}

/// Whether a candidate triangle with this centroid belongs to `polygon`.
pub(crate) fn keeps_centroid(polygon: &Polygon2D, centroid: DVec2, epsilon: f64) -> bool {
    contains(&polygon.outer, centroid, epsilon)
        && !polygon
            .holes
            .iter()
            .any(|hole| contains(hole, centroid, epsilon))
}

/// Returns true if `point` is inside `loop_` or within `epsilon` of its boundary.
///
/// The loop is treated as closed whether or not its last point repeats the first.
pub fn contains(loop_: &Profile2D, point: DVec2, epsilon: f64) -> bool {
    let pts = loop_.unique_points();
    if pts.len() < 3 {
        return false;
    }

    let mut inside = false;
    for (i, &a) in pts.iter().enumerate() {
        let b = pts[(i + 1) % pts.len()];
        if on_segment(a, b, point, epsilon) {
            return true;
        }
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment(a: DVec2, b: DVec2, p: DVec2, epsilon: f64) -> bool {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= epsilon * epsilon {
        return p.distance(a) <= epsilon;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t) <= epsilon
}

/// Every distinct boundary point, closing duplicates removed.
fn collect_points(polygon: &Polygon2D) -> Vec<DVec2> {
    let mut seen = HashSet::new();
    std::iter::once(&polygon.outer)
        .chain(polygon.holes.iter())
        .flat_map(|loop_| loop_.unique_points().iter().copied())
        .filter(|p| seen.insert((p.x.to_bits(), p.y.to_bits())))
        .collect()
}
