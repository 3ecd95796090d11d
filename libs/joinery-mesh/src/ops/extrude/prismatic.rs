//! # Prismatic Extrusion
//!
//! Extrudes a polygon with holes from `z = 0` to `z = height`.

use config::params::Tolerances;
use glam::DVec3;

use crate::axis::Axis;
use crate::error::{require_positive, Result};
use crate::mesh::Mesh;
use crate::ops::cleanup::cleanup;
use crate::ops::loft::{loft_into, Ring};
use crate::profile::{Polygon2D, Profile2D};
use crate::triangulate::triangulate;

/// Extrudes `polygon` straight up by `height`.
///
/// The outer loop is oriented counter-clockwise and every hole clockwise
/// before building, so the input orientation does not matter. The bottom cap
/// faces `-Z`, the top cap `+Z`, and the walls face away from the material.
/// The result is cleaned up.
///
/// A degenerate polygon yields an empty mesh.
///
/// # Errors
///
/// [`crate::MeshError::Configuration`] for a non-positive height.
///
/// # Example
///
/// ```rust
/// use config::params::Tolerances;
/// use joinery_mesh::ops::extrude::extrude_prismatic;
/// use joinery_mesh::{Polygon2D, Profile2D};
///
/// let slab = extrude_prismatic(&Polygon2D::new(Profile2D::square(10.0)), 2.0, &Tolerances::default()).unwrap();
/// assert!(slab.is_watertight());
/// ```
pub fn extrude_prismatic(
    polygon: &Polygon2D,
    height: f64,
    tolerances: &Tolerances,
) -> Result<Mesh> {
    let height = require_positive("extrude_height", height)?;

    let outer = polygon.outer.clone().closed().oriented(true);
    let holes: Vec<Profile2D> = polygon
        .holes
        .iter()
        .map(|hole| hole.clone().closed().oriented(false))
        .collect();
    let normalized = Polygon2D::with_holes(outer, holes);

    let caps = triangulate(&normalized, tolerances);
    if caps.is_empty() {
        tracing::warn!(height, "nothing to extrude, polygon has no area");
        return Ok(Mesh::new());
    }

    let loops = std::iter::once(&normalized.outer).chain(normalized.holes.iter());
    let wall_points: usize = loops.clone().map(Profile2D::len).sum();
    let mut mesh = Mesh::with_capacity(
        6 * caps.len() + 4 * wall_points,
        2 * caps.len() + 2 * wall_points,
    );

    for [a, b, c] in &caps {
        let base = mesh.add_vertex(DVec3::new(a.x, a.y, 0.0));
        mesh.add_vertex(DVec3::new(b.x, b.y, 0.0));
        mesh.add_vertex(DVec3::new(c.x, c.y, 0.0));
        mesh.add_triangle(base, base + 2, base + 1);

        let top = mesh.add_vertex(DVec3::new(a.x, a.y, height));
        mesh.add_vertex(DVec3::new(b.x, b.y, height));
        mesh.add_vertex(DVec3::new(c.x, c.y, height));
        mesh.add_triangle(top, top + 1, top + 2);
    }

    for loop_ in loops {
        let bottom = Ring::lift(loop_, Axis::Z, 0.0);
        let top = Ring::lift(loop_, Axis::Z, height);
        loft_into(&mut mesh, &bottom, &top, true)?;
    }

    cleanup(mesh, tolerances)
}
