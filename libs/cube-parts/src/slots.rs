//! # Cube Slots and Plate Plug
//!
//! The hollow cube receives a plate in a shallow tapered slot on each of its
//! five printable faces. The slot cutters are plain frustum meshes placed on
//! the cube faces; subtracting them is left to whatever boolean backend the
//! caller has. The plate plug is the matching positive, shrunk by the fit
//! clearance.

use config::params::{CubeConfig, Tolerances};
use glam::DVec3;
use joinery_mesh::primitives::{tapered_frustum, FrustumParams};
use joinery_mesh::{Axis, Mesh, MeshError};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A cube face that carries a slot. The bottom face has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotFace {
    /// The `+z` face.
    Top,
    /// The `+x` face.
    PosX,
    /// The `-x` face.
    NegX,
    /// The `+y` face.
    PosY,
    /// The `-y` face.
    NegY,
}

impl SlotFace {
    /// Every slotted face.
    pub const ALL: [SlotFace; 5] = [
        SlotFace::Top,
        SlotFace::PosX,
        SlotFace::NegX,
        SlotFace::PosY,
        SlotFace::NegY,
    ];

    /// Axis of the face normal and whether the face is on its positive side.
    pub fn axis(self) -> (Axis, bool) {
        match self {
            SlotFace::Top => (Axis::Z, true),
            SlotFace::PosX => (Axis::X, true),
            SlotFace::NegX => (Axis::X, false),
            SlotFace::PosY => (Axis::Y, true),
            SlotFace::NegY => (Axis::Y, false),
        }
    }
}

/// Slot cutters for the five slotted faces of a cube centered at the origin.
///
/// Each frustum's opening lies on its cube face and its inner face is
/// `slot_depth` inside the wall.
///
/// # Errors
///
/// Configuration error for a non-positive cube edge, slot size or depth.
pub fn slot_frustums(
    cfg: &CubeConfig,
    tolerances: &Tolerances,
) -> Result<Vec<(SlotFace, Mesh)>> {
    if !(cfg.cube_edge > 0.0) {
        return Err(
            MeshError::configuration("cube_edge", cfg.cube_edge, "must be positive").into(),
        );
    }
    let slot = cfg.slot_size();
    let depth = cfg.slot_depth;
    let seat = cfg.cube_edge / 2.0 - depth / 2.0;

    SlotFace::ALL
        .into_iter()
        .map(|face| {
            let (axis, positive) = face.axis();
            let params = FrustumParams::new(depth, slot, slot, cfg.effective_taper())
                .with_axis(axis, positive);
            let sign = if positive { 1.0 } else { -1.0 };
            let cutter = tapered_frustum(&params, tolerances)?;
            Ok((face, cutter.translated(axis.unit() * sign * seat)))
        })
        .collect()
}

/// The plug plate that seats in a slot, with its lower-left corner at the
/// origin and its opening (widest) face on top at `z = slot_depth`.
///
/// The optional flange sits flush with the plug top and overhangs the slot
/// by `flange_overhang` on every side.
///
/// # Errors
///
/// Configuration error when the clearance closes the plug
/// (`slot_size - 2 * clearance <= 0`) or the slot depth is not positive.
pub fn plate_plug(cfg: &CubeConfig, tolerances: &Tolerances) -> Result<Mesh> {
    let slot = cfg.slot_size();
    let depth = cfg.slot_depth;
    let open = slot - 2.0 * cfg.clearance;
    if !(open > 0.0) {
        return Err(MeshError::configuration(
            "clearance",
            cfg.clearance,
            format!("leaves no plug in a {slot} slot"),
        )
        .into());
    }

    let inner = tolerances
        .min_plug_face
        .max(slot - 2.0 * cfg.effective_taper() - 2.0 * cfg.clearance);
    let plug_taper = ((open - inner) / 2.0).max(0.0);

    let plug = tapered_frustum(&FrustumParams::new(depth, open, open, plug_taper), tolerances)?;
    let (min, _) = plug.bounding_box();
    let plug = plug.translated(-min);

    if !cfg.flange_enabled {
        return Ok(plug);
    }

    let thickness = cfg.flange_thickness.min(depth);
    let side = slot + 2.0 * cfg.flange_overhang;
    let flange = tapered_frustum(&FrustumParams::new(thickness, side, side, 0.0), tolerances)?
        .translated(DVec3::new(open / 2.0, open / 2.0, depth - thickness / 2.0));

    tracing::debug!(side, thickness, "added plug flange");
    Ok(Mesh::concatenate([plug, flange]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tol() -> Tolerances {
        Tolerances::default()
    }

    #[test]
    fn test_five_cutters_sit_on_their_faces() {
        let cfg = CubeConfig::default();
        let cutters = slot_frustums(&cfg, &tol()).unwrap();
        assert_eq!(cutters.len(), 5);

        let h = cfg.cube_edge / 2.0;
        for (face, mesh) in &cutters {
            let (axis, positive) = face.axis();
            let (min, max) = mesh.bounding_box();
            if positive {
                assert_relative_eq!(axis.component(max), h, epsilon = 1e-9);
                assert_relative_eq!(axis.component(min), h - cfg.slot_depth, epsilon = 1e-9);
            } else {
                assert_relative_eq!(axis.component(min), -h, epsilon = 1e-9);
                assert_relative_eq!(axis.component(max), -h + cfg.slot_depth, epsilon = 1e-9);
            }
            assert!(mesh.is_watertight(), "{face:?}");
            assert!(mesh.signed_volume() > 0.0, "{face:?}");
        }
    }

    #[test]
    fn test_cutter_opening_is_on_the_face() {
        let cfg = CubeConfig::default();
        let cutters = slot_frustums(&cfg, &tol()).unwrap();
        let (_, top) = &cutters[0];
        let widest = top
            .vertices()
            .iter()
            .filter(|v| (v.z - cfg.cube_edge / 2.0).abs() < 1e-9)
            .map(|v| v.x.abs())
            .fold(0.0, f64::max);
        assert_relative_eq!(widest, cfg.slot_size() / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_plug_dimensions() {
        let cfg = CubeConfig::default();
        let plug = plate_plug(&cfg, &tol()).unwrap();
        let (min, max) = plug.bounding_box();

        let open = cfg.slot_size() - 2.0 * cfg.clearance;
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(min.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, open, epsilon = 1e-9);
        assert_relative_eq!(max.z, cfg.slot_depth, epsilon = 1e-12);

        // 45° seat: the bottom face is inset by the taper on every side
        let bottom: Vec<_> = plug.vertices().iter().filter(|v| v.z.abs() < 1e-9).collect();
        assert_eq!(bottom.len(), 4);
        let taper = cfg.effective_taper();
        assert!(bottom
            .iter()
            .all(|v| (v.x - taper).abs() < 1e-9 || (v.x - (open - taper)).abs() < 1e-9));
        assert!(plug.is_watertight());
    }

    #[test]
    fn test_plug_inner_face_clamped() {
        let cfg = CubeConfig {
            cube_edge: 6.0,
            slot_fraction: 1.0,
            slot_depth: 2.4,
            slot_miter: 2.4,
            ..CubeConfig::default()
        };
        let plug = plate_plug(&cfg, &tol()).unwrap();
        let bottom_x: Vec<f64> = plug
            .vertices()
            .iter()
            .filter(|v| v.z.abs() < 1e-9)
            .map(|v| v.x)
            .collect();
        let width = bottom_x.iter().cloned().fold(f64::MIN, f64::max)
            - bottom_x.iter().cloned().fold(f64::MAX, f64::min);
        assert_relative_eq!(width, tol().min_plug_face, epsilon = 1e-9);
    }

    #[test]
    fn test_plug_rejects_excess_clearance() {
        let cfg = CubeConfig {
            clearance: 80.0,
            ..CubeConfig::default()
        };
        assert!(matches!(
            plate_plug(&cfg, &tol()),
            Err(crate::PartError::Mesh(MeshError::Configuration {
                parameter: "clearance",
                ..
            }))
        ));
    }

    #[test]
    fn test_plug_flange_flush_with_top() {
        let cfg = CubeConfig {
            flange_enabled: true,
            ..CubeConfig::default()
        };
        let plug = plate_plug(&cfg, &tol()).unwrap();
        assert_eq!(plug.triangle_count(), 24);

        let open = cfg.slot_size() - 2.0 * cfg.clearance;
        let (min, max) = plug.bounding_box();
        assert_relative_eq!(max.z, cfg.slot_depth, epsilon = 1e-12);
        let flange_edge = open / 2.0 - cfg.slot_size() / 2.0 - cfg.flange_overhang;
        assert_relative_eq!(min.x, flange_edge, epsilon = 1e-9);
    }
}
