//! # Edge Block
//!
//! L-shaped block that joins two plates at 90°. Plate studs drop into open
//! slot receivers: X-slots open on the face `x = 0`, Y-slots on `y = 0`.
//!
//! The L-body is two overlapping open boxes. Each box leaves out its `x = 0`
//! and `y = 0` faces so the slot mouths stay open, which means the block is
//! not a closed solid; slicers fill it from the remaining walls.

use config::params::{EdgeBlockConfig, Tolerances};
use glam::{DVec2, DVec3};
use joinery_mesh::joinery::{positions_along, socket_channel, socket_profile, JointFit};
use joinery_mesh::ops::SweepPath;
use joinery_mesh::{cleanup, Axis, Mesh, MeshError};

use crate::error::Result;

/// Builds the edge block in its local frame: `x, y ∈ [0, block_size]`,
/// `z ∈ [0, length]`.
///
/// # Errors
///
/// Configuration error for a non-positive dimension, a leg at least as thick
/// as the block, a stud not thinner than the bore, or socket margins that
/// leave no room along the block.
pub fn generate_edge_block(cfg: &EdgeBlockConfig, tolerances: &Tolerances) -> Result<Mesh> {
    for (parameter, value) in [
        ("block_size", cfg.block_size),
        ("leg_thickness", cfg.leg_thickness),
        ("length", cfg.length),
    ] {
        if !(value > 0.0) {
            return Err(MeshError::configuration(parameter, value, "must be positive").into());
        }
    }
    if cfg.leg_thickness >= cfg.block_size {
        return Err(MeshError::configuration(
            "leg_thickness",
            cfg.leg_thickness,
            format!("must be thinner than the block size {}", cfg.block_size),
        )
        .into());
    }

    let fit = JointFit {
        peg_diameter: cfg.stud_diameter,
        bore_diameter: cfg.socket_bore_diameter,
        clearance: cfg.slot_clearance,
    };
    fit.validate()?;

    let z_positions = positions_along(cfg.length, cfg.sockets_per_edge, cfg.socket_end_margin)?;
    let profile = socket_profile(
        cfg.socket_bore_diameter / 2.0,
        fit.opening_width(),
        cfg.sections,
    )?;
    let transposed = profile.clone().transposed();

    let (b, t, l) = (cfg.block_size, cfg.leg_thickness, cfg.length);
    let mut parts = vec![
        open_box([0.0, b], [0.0, t], [0.0, l]),
        open_box([0.0, t], [0.0, b], [0.0, l]),
    ];

    for &zc in &z_positions {
        let x_slot =
            SweepPath::new(Axis::X, 0.0, t).with_offset(DVec2::new(cfg.socket_offset, zc));
        parts.push(socket_channel(&profile, &x_slot)?);

        // Y embeds (u, v) as (z, x), so the profile is transposed to keep
        // its width along x and its height along z.
        let y_slot =
            SweepPath::new(Axis::Y, 0.0, t).with_offset(DVec2::new(zc, cfg.socket_offset));
        parts.push(socket_channel(&transposed, &y_slot)?);
    }

    let block = cleanup(Mesh::concatenate(parts), tolerances)?;
    tracing::debug!(
        sockets = 2 * z_positions.len(),
        vertices = block.vertex_count(),
        triangles = block.triangle_count(),
        "generated edge block"
    );
    Ok(block)
}

/// Axis-aligned box without its `x = x0` and `y = y0` faces.
fn open_box([x0, x1]: [f64; 2], [y0, y1]: [f64; 2], [z0, z1]: [f64; 2]) -> Mesh {
    let p = DVec3::new;
    let mut mesh = Mesh::with_capacity(16, 8);
    // bottom, top, +x, +y
    mesh.add_quad([p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0), p(x1, y0, z0)], true);
    mesh.add_quad([p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)], true);
    mesh.add_quad([p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1), p(x1, y0, z1)], true);
    mesh.add_quad([p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0)], true);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerances {
        Tolerances::default()
    }

    #[test]
    fn test_open_box_faces_point_outward() {
        let mesh = open_box([0.0, 2.0], [0.0, 3.0], [0.0, 4.0]);
        let center = DVec3::new(1.0, 1.5, 2.0);
        for i in 0..mesh.triangle_count() {
            let outward = mesh.triangle_centroid(i) - center;
            assert!(mesh.face_normal(i).dot(outward) > 0.0, "triangle {i}");
        }
        assert!(!mesh.is_watertight());
    }

    #[test]
    fn test_default_block_triangle_count() {
        let block = generate_edge_block(&EdgeBlockConfig::default(), &tol()).unwrap();
        // 2 boxes x 4 quads, plus 10 channels of 34 quads each
        assert_eq!(block.triangle_count(), 16 + 10 * 68);
    }

    #[test]
    fn test_block_stays_in_local_frame() {
        let cfg = EdgeBlockConfig::default();
        let block = generate_edge_block(&cfg, &tol()).unwrap();
        let (min, max) = block.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(18.0, 18.0, 120.0));
    }

    #[test]
    fn test_slot_mouths_on_open_faces() {
        let cfg = EdgeBlockConfig::default();
        let block = generate_edge_block(&cfg, &tol()).unwrap();

        // Each mouth has four distinct points on its flat side: the two
        // opening corners and the two arc ends.
        let on_x0 = block
            .vertices()
            .iter()
            .filter(|v| v.x == 0.0 && (v.y - cfg.socket_offset).abs() < 1e-9)
            .count();
        let on_y0 = block
            .vertices()
            .iter()
            .filter(|v| v.y == 0.0 && (v.x - cfg.socket_offset).abs() < 1e-9)
            .count();
        assert_eq!(on_x0, 4 * cfg.sockets_per_edge);
        assert_eq!(on_y0, 4 * cfg.sockets_per_edge);
    }

    #[test]
    fn test_rejects_stud_wider_than_bore() {
        let cfg = EdgeBlockConfig {
            socket_bore_diameter: 3.0,
            ..EdgeBlockConfig::default()
        };
        assert!(matches!(
            generate_edge_block(&cfg, &tol()),
            Err(crate::PartError::Mesh(MeshError::Configuration {
                parameter: "peg_diameter",
                ..
            }))
        ));
    }

    #[test]
    fn test_rejects_leg_as_thick_as_block() {
        let cfg = EdgeBlockConfig {
            leg_thickness: 18.0,
            ..EdgeBlockConfig::default()
        };
        assert!(generate_edge_block(&cfg, &tol()).is_err());
    }

    #[test]
    fn test_rejects_single_socket() {
        let cfg = EdgeBlockConfig {
            sockets_per_edge: 1,
            ..EdgeBlockConfig::default()
        };
        assert!(generate_edge_block(&cfg, &tol()).is_err());
    }
}
