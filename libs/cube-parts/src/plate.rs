//! # Universal Plate
//!
//! One plate fits every cube face. The outside (marker) face is at `z = 0`
//! and prints face-down; the inside face is at `z = thickness`. Studs
//! protrude from the inside face, so they print upward without supports.
//!
//! The perimeter is a 45° miter: a loft from the outside square to the
//! inside square. An optional relief ring just above the outside face
//! absorbs elephant-foot.

use config::params::{PlateConfig, Tolerances};
use glam::{DVec2, DVec3};
use joinery_mesh::joinery::{boss, peg, BossParams, EdgeLayout, PegParams};
use joinery_mesh::ops::loft::loft_into;
use joinery_mesh::triangulate::triangulate;
use joinery_mesh::{cleanup, Axis, Mesh, MeshError, Polygon2D, Profile2D, Ring};

use crate::error::Result;

/// Builds the bare plate body: caps, miter loft and optional relief.
///
/// # Errors
///
/// Configuration error when the size or thickness is not positive, or the
/// miter leaves no inside face (`size - 2 * thickness <= 0`).
pub fn plate_shell(cfg: &PlateConfig, tolerances: &Tolerances) -> Result<Mesh> {
    if !(cfg.size > 0.0) {
        return Err(MeshError::configuration("size", cfg.size, "must be positive").into());
    }
    if !(cfg.thickness > 0.0) {
        return Err(MeshError::configuration("thickness", cfg.thickness, "must be positive").into());
    }
    let inside = cfg.inside_size();
    if !(inside > 0.0) {
        return Err(MeshError::configuration(
            "thickness",
            cfg.thickness,
            format!("too large for a 45° miter on a {} plate", cfg.size),
        )
        .into());
    }

    let outside_square = Profile2D::square(cfg.size);
    let inside_square = Profile2D::square(inside);

    let mut mesh = Mesh::new();
    add_cap(&mut mesh, &outside_square, 0.0, true, tolerances);
    add_cap(&mut mesh, &inside_square, cfg.thickness, false, tolerances);

    let outside_ring = Ring::lift(&outside_square, Axis::Z, 0.0);
    let inside_ring = Ring::lift(&inside_square, Axis::Z, cfg.thickness);
    if cfg.relief_fits() {
        let relief_ring = Ring::lift(
            &Profile2D::square(cfg.size - 2.0 * cfg.relief_inset),
            Axis::Z,
            cfg.relief_height,
        );
        loft_into(&mut mesh, &outside_ring, &relief_ring, true)?;
        loft_into(&mut mesh, &relief_ring, &inside_ring, true)?;
    } else {
        loft_into(&mut mesh, &outside_ring, &inside_ring, true)?;
    }

    Ok(cleanup(mesh, tolerances)?)
}

/// Builds the complete plate: body, collars and studs.
///
/// Stud placement is validated before any geometry is built.
pub fn generate_plate(cfg: &PlateConfig, tolerances: &Tolerances) -> Result<Mesh> {
    let centers = EdgeLayout {
        size: cfg.size,
        edge_offset: cfg.stud_edge_offset,
        count_per_edge: cfg.studs_per_edge,
        end_margin: cfg.stud_end_margin,
    }
    .centers(tolerances)?;

    let shell = plate_shell(cfg, tolerances)?;

    let stud = peg(
        &PegParams {
            diameter: cfg.stud_diameter,
            length: cfg.stud_length,
            tip_chamfer: cfg.stud_tip_chamfer,
            segments: cfg.segments,
        },
        tolerances,
    )?;

    let mut bosses = Vec::new();
    if cfg.bosses_enabled() {
        for &center in &centers {
            let collar = boss(
                &BossParams {
                    center,
                    outer_diameter: cfg.boss_outer_diameter,
                    inner_diameter: cfg.stud_diameter,
                    height: cfg.boss_height,
                    segments: cfg.segments,
                },
                tolerances,
            )?;
            bosses.push(collar.translated(DVec3::new(0.0, 0.0, cfg.thickness)));
        }
    }

    let studs = centers
        .iter()
        .map(|c| stud.clone().translated(DVec3::new(c.x, c.y, cfg.thickness)));

    let plate = Mesh::concatenate(std::iter::once(shell).chain(bosses).chain(studs));
    let plate = cleanup(plate, tolerances)?;

    tracing::debug!(
        studs = centers.len(),
        vertices = plate.vertex_count(),
        triangles = plate.triangle_count(),
        "generated plate"
    );
    Ok(plate)
}

/// Adds a triangulated flat cap at height `z`, facing down when `flip`.
fn add_cap(mesh: &mut Mesh, outline: &Profile2D, z: f64, flip: bool, tolerances: &Tolerances) {
    let lift = |p: DVec2| DVec3::new(p.x, p.y, z);
    for [a, b, c] in triangulate(&Polygon2D::new(outline.clone()), tolerances) {
        let i = mesh.add_vertex(lift(a));
        mesh.add_vertex(lift(b));
        mesh.add_vertex(lift(c));
        if flip {
            mesh.add_triangle(i, i + 2, i + 1);
        } else {
            mesh.add_triangle(i, i + 1, i + 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tol() -> Tolerances {
        Tolerances::default()
    }

    #[test]
    fn test_shell_is_watertight_frustum() {
        let cfg = PlateConfig {
            relief_enabled: false,
            ..PlateConfig::default()
        };
        let shell = plate_shell(&cfg, &tol()).unwrap();
        assert!(shell.is_watertight());
        assert_eq!(shell.vertex_count(), 8);

        let (s, i, t) = (120.0, 110.0, 5.0);
        assert_relative_eq!(
            shell.signed_volume(),
            t / 3.0 * (s * s + i * i + s * i),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_shell_with_relief() {
        let shell = plate_shell(&PlateConfig::default(), &tol()).unwrap();
        assert!(shell.is_watertight());
        assert_eq!(shell.vertex_count(), 12);
        let relief: Vec<_> = shell
            .vertices()
            .iter()
            .filter(|v| (v.z - 0.3).abs() < 1e-12)
            .collect();
        assert_eq!(relief.len(), 4);
        assert!(relief.iter().all(|v| (v.x.abs() - 59.75).abs() < 1e-12));
    }

    #[test]
    fn test_shell_rejects_thick_miter() {
        let cfg = PlateConfig {
            size: 10.0,
            thickness: 5.0,
            ..PlateConfig::default()
        };
        assert!(plate_shell(&cfg, &tol()).is_err());

        let unmitered = PlateConfig {
            miter_enabled: false,
            ..cfg
        };
        assert!(plate_shell(&unmitered, &tol()).is_ok());
    }

    #[test]
    fn test_plate_has_studs_on_inside_face() {
        let cfg = PlateConfig::default();
        let plate = generate_plate(&cfg, &tol()).unwrap();

        let (min, max) = plate.bounding_box();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, cfg.thickness + cfg.stud_length, epsilon = 1e-12);
        assert_relative_eq!(min.x, -60.0);
        assert_relative_eq!(max.y, 60.0);

        let apexes = plate
            .vertices()
            .iter()
            .filter(|v| (v.z - max.z).abs() < 1e-9)
            .count();
        assert_eq!(apexes, 20);
    }

    #[test]
    fn test_plate_without_bosses() {
        let cfg = PlateConfig {
            boss_height: 0.0,
            ..PlateConfig::default()
        };
        let plate = generate_plate(&cfg, &tol()).unwrap();
        let collar_tops = plate
            .vertices()
            .iter()
            .filter(|v| (v.z - (cfg.thickness + 2.0)).abs() < 1e-9)
            .count();
        assert_eq!(collar_tops, 0);
    }

    #[test]
    fn test_plate_placement_error_before_geometry() {
        let cfg = PlateConfig {
            stud_end_margin: 65.0,
            ..PlateConfig::default()
        };
        assert!(matches!(
            generate_plate(&cfg, &tol()),
            Err(crate::PartError::Mesh(MeshError::Configuration {
                parameter: "end_margin",
                ..
            }))
        ));
    }
}
