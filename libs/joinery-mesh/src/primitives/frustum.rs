//! # Tapered Frustum
//!
//! A box-like solid with an opening face `(a0, b0)` and an inner face shrunk
//! by `taper` per side, `depth` away along a principal axis. A taper equal
//! to the depth gives a 45° lip that prints without support.
//!
//! The solid is centered at the origin: the opening face sits at
//! `±depth / 2` on the chosen side of the axis and the inner face on the
//! other side.

use config::constants::approx_equal;
use config::params::Tolerances;
use glam::{DVec2, DVec3};

use crate::axis::Axis;
use crate::error::{require_non_negative, require_positive, Result};
use crate::mesh::Mesh;

/// Opening face (0..4), inner face (4..8), then the four sides.
const FACES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [0, 2, 3],
    [4, 6, 5],
    [4, 7, 6],
    [0, 4, 5],
    [0, 5, 1],
    [1, 5, 6],
    [1, 6, 2],
    [2, 6, 7],
    [2, 7, 3],
    [3, 7, 4],
    [3, 4, 0],
];

/// Corner signs, counter-clockwise in the `(u, v)` plane.
const CORNERS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Parameters for [`tapered_frustum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumParams {
    /// Distance between the two faces
    pub depth: f64,
    /// Opening face extent along the first plane coordinate
    pub open_a: f64,
    /// Opening face extent along the second plane coordinate
    pub open_b: f64,
    /// Inward shrink per side from opening to inner face
    pub taper: f64,
    /// Axis between the two faces
    pub axis: Axis,
    /// Opening face on the positive side of the axis
    pub open_positive: bool,
}

impl FrustumParams {
    /// Square-or-rectangular frustum along +Z.
    pub fn new(depth: f64, open_a: f64, open_b: f64, taper: f64) -> Self {
        Self {
            depth,
            open_a,
            open_b,
            taper,
            axis: Axis::Z,
            open_positive: true,
        }
    }

    /// Reorients the frustum onto `axis`, opening on the chosen side.
    pub fn with_axis(mut self, axis: Axis, open_positive: bool) -> Self {
        self.axis = axis;
        self.open_positive = open_positive;
        self
    }

    /// Inner face extents, each clamped to `min_face_size`.
    pub fn inner_face(&self, tolerances: &Tolerances) -> (f64, f64) {
        let clamp = tolerances.min_face_size;
        (
            (self.open_a - 2.0 * self.taper).max(clamp),
            (self.open_b - 2.0 * self.taper).max(clamp),
        )
    }

    fn validate(&self) -> Result<()> {
        require_positive("depth", self.depth)?;
        require_positive("open_a", self.open_a)?;
        require_positive("open_b", self.open_b)?;
        require_non_negative("taper", self.taper)?;
        Ok(())
    }
}

/// Builds the frustum: 8 vertices, 12 outward-wound triangles.
///
/// # Errors
///
/// [`crate::MeshError::Configuration`] for a non-positive depth or opening,
/// or a negative taper. A taper that would collapse the inner face is not an
/// error: the face is clamped and a warning is logged.
///
/// # Example
///
/// ```rust
/// use config::params::Tolerances;
/// use joinery_mesh::primitives::{tapered_frustum, FrustumParams};
///
/// let params = FrustumParams::new(3.0, 96.0, 96.0, 3.0);
/// let mesh = tapered_frustum(&params, &Tolerances::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn tapered_frustum(params: &FrustumParams, tolerances: &Tolerances) -> Result<Mesh> {
    params.validate()?;

    let (inner_a, inner_b) = params.inner_face(tolerances);
    let clamped = !approx_equal(inner_a, params.open_a - 2.0 * params.taper)
        || !approx_equal(inner_b, params.open_b - 2.0 * params.taper);
    if clamped {
        tracing::warn!(
            open_a = params.open_a,
            open_b = params.open_b,
            taper = params.taper,
            clamp = tolerances.min_face_size,
            "frustum taper clamped to minimum inner face"
        );
    }

    let half = params.depth / 2.0;
    let faces = [
        (params.open_a / 2.0, params.open_b / 2.0, half),
        (inner_a / 2.0, inner_b / 2.0, -half),
    ];

    let mut mesh = Mesh::with_capacity(8, 12);
    for (ha, hb, along) in faces {
        for (su, sv) in CORNERS {
            let mut p: DVec3 = params.axis.embed(DVec2::new(su * ha, sv * hb), along);
            if !params.open_positive {
                p = params.axis.mirror(p);
            }
            mesh.add_vertex(p);
        }
    }
    for [a, b, c] in FACES {
        mesh.add_triangle(a, b, c);
    }

    // Mirroring reverses orientation; flip back so the opening stays outward.
    if !params.open_positive {
        mesh.flip_winding();
    }

    Ok(mesh)
}
