//! # Ring Loft
//!
//! Connects two rings with a ruled quad strip.
//!
//! A counter-clockwise ring lofted from the lower to the higher sweep
//! position with `outward = true` gets normals pointing away from the region
//! the ring encloses; `outward = false` reverses every triangle.

use glam::DVec3;

use crate::axis::Axis;
use crate::error::{MeshError, Result};
use crate::mesh::Mesh;
use crate::profile::Profile2D;

/// A loop of points at a fixed sweep position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    /// Loop points in order, closing duplicate included.
    pub points: Vec<DVec3>,
}

impl Ring {
    /// Wraps existing points.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Lifts a profile onto the plane `along = position` of `axis`.
    pub fn lift(profile: &Profile2D, axis: Axis, position: f64) -> Self {
        Self {
            points: profile
                .points()
                .iter()
                .map(|&uv| axis.embed(uv, position))
                .collect(),
        }
    }

    /// Moves every point by `offset`.
    pub fn translated(mut self, offset: DVec3) -> Self {
        for p in &mut self.points {
            *p += offset;
        }
        self
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a ring without points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lofts `a` to `b` into a new mesh with `2 * (N - 1)` triangles.
///
/// # Errors
///
/// [`MeshError::ShapeMismatch`] when the rings differ in point count.
pub fn loft(a: &Ring, b: &Ring, outward: bool) -> Result<Mesh> {
    let mut mesh = Mesh::with_capacity(4 * a.len(), 2 * a.len());
    loft_into(&mut mesh, a, b, outward)?;
    Ok(mesh)
}

/// Appends the loft of `a` to `b` to an existing mesh.
///
/// Nothing is appended on error.
pub fn loft_into(mesh: &mut Mesh, a: &Ring, b: &Ring, outward: bool) -> Result<()> {
    if a.len() != b.len() {
        return Err(MeshError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    for i in 0..a.len().saturating_sub(1) {
        mesh.add_quad(
            [a.points[i], a.points[i + 1], b.points[i + 1], b.points[i]],
            outward,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_rings(size: f64, height: f64) -> (Ring, Ring) {
        let square = Profile2D::square(size);
        (
            Ring::lift(&square, Axis::Z, 0.0),
            Ring::lift(&square, Axis::Z, height),
        )
    }

    #[test]
    fn test_loft_triangle_count() {
        let (a, b) = square_rings(4.0, 2.0);
        let mesh = loft(&a, &b, true).unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_loft_outward_normals_point_away_from_centroid() {
        for axis in Axis::ALL {
            let square = Profile2D::square(4.0);
            let a = Ring::lift(&square, axis, -1.0);
            let b = Ring::lift(&square, axis, 3.0);
            let centroid = axis.unit();

            let mesh = loft(&a, &b, true).unwrap();
            for i in 0..mesh.triangle_count() {
                let outward = mesh.triangle_centroid(i) - centroid;
                assert!(mesh.face_normal(i).dot(outward) > 0.0, "{axis:?} triangle {i}");
            }

            let inward = loft(&a, &b, false).unwrap();
            for i in 0..inward.triangle_count() {
                let outward = inward.triangle_centroid(i) - centroid;
                assert!(inward.face_normal(i).dot(outward) < 0.0);
            }
        }
    }

    #[test]
    fn test_loft_shape_mismatch() {
        let (a, _) = square_rings(4.0, 1.0);
        let b = Ring::lift(&Profile2D::circle(glam::DVec2::ZERO, 4.0, 8), Axis::Z, 1.0);
        assert_eq!(
            loft(&a, &b, true),
            Err(MeshError::ShapeMismatch { left: 5, right: 9 })
        );
    }

    #[test]
    fn test_loft_between_tapered_rings() {
        let a = Ring::lift(&Profile2D::square(10.0), Axis::Z, 0.0);
        let b = Ring::lift(&Profile2D::square(6.0), Axis::Z, 2.0);
        let mesh = loft(&a, &b, true).unwrap();
        // Sloped walls still face outward and up.
        for i in 0..mesh.triangle_count() {
            let n = mesh.face_normal(i);
            assert!(n.z > 0.0);
        }
    }

    #[test]
    fn test_ring_translated() {
        let ring = Ring::new(vec![DVec3::ZERO, DVec3::X]).translated(DVec3::Z);
        assert_eq!(ring.points, vec![DVec3::Z, DVec3::new(1.0, 0.0, 1.0)]);
    }
}
