//! # Joinery Tests

use super::*;
use crate::axis::Axis;
use crate::error::MeshError;
use crate::ops::sweep::SweepPath;
use approx::assert_relative_eq;
use config::params::Tolerances;
use glam::{DVec2, DVec3};

fn tol() -> Tolerances {
    Tolerances::default()
}

fn plate_layout() -> EdgeLayout {
    EdgeLayout {
        size: 120.0,
        edge_offset: 12.0,
        count_per_edge: 5,
        end_margin: 25.0,
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

#[test]
fn test_running_positions() {
    assert_eq!(running_positions(-35.0, 35.0, 5), vec![-35.0, -17.5, 0.0, 17.5, 35.0]);
    assert_eq!(running_positions(1.0, 2.0, 1), vec![1.0]);
    assert!(running_positions(1.0, 2.0, 0).is_empty());
}

#[test]
fn test_plate_layout_centers() {
    let layout = plate_layout();
    assert_eq!(layout.running().unwrap(), vec![-35.0, -17.5, 0.0, 17.5, 35.0]);

    let centers = layout.centers(&tol()).unwrap();
    assert_eq!(centers.len(), 20);
    assert_eq!(centers[0], DVec2::new(-35.0, 48.0));
    assert_eq!(centers[5], DVec2::new(-35.0, -48.0));
    assert_eq!(centers[10], DVec2::new(48.0, -35.0));
    assert_eq!(centers[15], DVec2::new(-48.0, -35.0));
}

#[test]
fn test_corner_centers_deduplicated() {
    let layout = EdgeLayout {
        size: 120.0,
        edge_offset: 35.0,
        count_per_edge: 3,
        end_margin: 35.0,
    };
    let centers = layout.centers(&tol()).unwrap();
    assert_eq!(centers.len(), 8);
    assert_eq!(centers.iter().filter(|c| **c == DVec2::new(25.0, 25.0)).count(), 1);
}

#[test]
fn test_placement_errors() {
    let wide_margin = EdgeLayout {
        end_margin: 65.0,
        ..plate_layout()
    };
    assert!(matches!(
        wide_margin.centers(&tol()),
        Err(MeshError::Configuration { parameter: "end_margin", .. })
    ));

    let single = EdgeLayout {
        count_per_edge: 1,
        ..plate_layout()
    };
    assert!(matches!(
        single.centers(&tol()),
        Err(MeshError::Configuration { parameter: "count_per_edge", .. })
    ));
}

#[test]
fn test_positions_along() {
    assert_eq!(positions_along(120.0, 5, 14.0).unwrap(), vec![14.0, 37.0, 60.0, 83.0, 106.0]);
    assert!(positions_along(120.0, 5, 60.0).is_err());
    assert!(positions_along(120.0, 1, 14.0).is_err());
}

// =============================================================================
// PEG
// =============================================================================

fn stud() -> PegParams {
    PegParams {
        diameter: 3.15,
        length: 2.7,
        tip_chamfer: 0.6,
        segments: 48,
    }
}

#[test]
fn test_peg_heights() {
    let params = stud();
    assert_relative_eq!(params.tip_height(&tol()), 0.6);
    assert_relative_eq!(params.cylinder_height(&tol()), 2.1, epsilon = 1e-12);

    let long_tip = PegParams {
        tip_chamfer: 5.0,
        ..stud()
    };
    assert_relative_eq!(long_tip.tip_height(&tol()), 2.7 * 0.8, epsilon = 1e-12);
}

#[test]
fn test_peg_cone_sits_on_cylinder() {
    let params = stud();
    let mesh = peg(&params, &tol()).unwrap();
    assert!(mesh.is_watertight());

    let r = params.diameter / 2.0;
    let top = params.cylinder_height(&tol());

    let (min, max) = mesh.bounding_box();
    assert_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, 2.7);

    // Cylinder top ring is the cone base: full radius at the seam.
    let seam: Vec<&DVec3> = mesh
        .vertices()
        .iter()
        .filter(|v| (v.z - top).abs() < 1e-12)
        .collect();
    assert_eq!(seam.len(), 48);
    for v in seam {
        assert_relative_eq!(v.truncate().length(), r, epsilon = 1e-12);
    }

    // Nothing between the seam and the apex but the apex itself.
    let above: Vec<&DVec3> = mesh.vertices().iter().filter(|v| v.z > top + 1e-12).collect();
    assert_eq!(above.len(), 1);
    assert_relative_eq!(above[0].z, 2.7);
}

#[test]
fn test_peg_without_tip() {
    let params = PegParams {
        tip_chamfer: 0.0,
        ..stud()
    };
    let mesh = peg(&params, &tol()).unwrap();
    assert!(mesh.is_watertight());
    assert_eq!(mesh.vertex_count(), 96);
}

#[test]
fn test_peg_negligible_tip_is_flat() {
    let params = PegParams {
        tip_chamfer: 1e-12,
        ..stud()
    };
    let mesh = peg(&params, &tol()).unwrap();
    assert!(mesh.is_watertight());
    assert_eq!(mesh.vertex_count(), 96);
    assert_relative_eq!(mesh.bounding_box().1.z, 2.7);
}

#[test]
fn test_peg_rejects_bad_dimensions() {
    let bad = PegParams {
        diameter: 0.0,
        ..stud()
    };
    assert!(peg(&bad, &tol()).is_err());
    let bad = PegParams {
        segments: 2,
        ..stud()
    };
    assert!(peg(&bad, &tol()).is_err());
}

// =============================================================================
// SOCKET
// =============================================================================

#[test]
fn test_socket_profile_shape() {
    let profile = socket_profile(1.575, 3.75, 32).unwrap();
    assert_eq!(profile.len(), 35);
    assert!(profile.is_closed());
    assert!(profile.signed_area() > 0.0);
    assert_eq!(profile.points()[1], DVec2::new(0.0, 1.875));
    assert_eq!(profile.points()[2], DVec2::new(0.0, 1.575));
    assert_eq!(profile.points()[33], DVec2::new(0.0, -1.575));
    // Bore stays behind the mouth.
    assert!(profile.points().iter().all(|p| p.x <= 0.0));
}

#[test]
fn test_socket_channel_mouth_stays_open() {
    let profile = socket_profile(1.575, 3.75, 31).unwrap();
    assert_eq!(profile.len(), 34);

    let channel = socket_channel(&profile, &SweepPath::new(Axis::X, 0.0, 6.0)).unwrap();
    assert_eq!(channel.triangle_count(), 2 * 33);

    for i in 0..channel.triangle_count() {
        let on_mouth = channel
            .triangle(i)
            .iter()
            .all(|&v| channel.vertex(v).x == 0.0);
        assert!(!on_mouth, "triangle {i} caps the mouth");
    }
}

#[test]
fn test_socket_channel_faces_into_bore() {
    let offset = DVec2::new(12.0, 30.0);
    let profile = socket_profile(1.575, 3.75, 32).unwrap();
    let path = SweepPath::new(Axis::X, 0.0, 6.0).with_offset(offset);
    let channel = socket_channel(&profile, &path).unwrap();

    let mut arc_faces = 0;
    for i in 0..channel.triangle_count() {
        let c = channel.triangle_centroid(i);
        let radial = DVec3::new(0.0, c.y - offset.x, c.z - offset.y);
        if c.y < offset.x - 1e-9 {
            arc_faces += 1;
            assert!(channel.face_normal(i).dot(radial) < 0.0);
        }
    }
    assert_eq!(arc_faces, 2 * 31);
}

#[test]
fn test_socket_profile_errors() {
    assert!(socket_profile(0.0, 3.75, 32).is_err());
    assert!(socket_profile(1.575, 0.0, 32).is_err());
    assert!(socket_profile(1.575, 3.75, 1).is_err());
}

#[test]
fn test_joint_fit() {
    let fit = JointFit {
        peg_diameter: 3.15,
        bore_diameter: 3.25,
        clearance: 0.6,
    };
    assert!(fit.validate().is_ok());
    assert_relative_eq!(fit.opening_width(), 3.75);

    let tight = JointFit {
        bore_diameter: 3.15,
        ..fit
    };
    assert!(matches!(
        tight.validate(),
        Err(MeshError::Configuration { parameter: "peg_diameter", .. })
    ));

    let negative = JointFit {
        clearance: -0.1,
        ..fit
    };
    assert!(negative.validate().is_err());
}

// =============================================================================
// BOSS
// =============================================================================

#[test]
fn test_boss_collar() {
    let params = BossParams {
        center: DVec2::new(-35.0, 48.0),
        outer_diameter: 8.0,
        inner_diameter: 3.15,
        height: 2.0,
        segments: 48,
    };
    let mesh = boss(&params, &tol()).unwrap();
    assert!(mesh.is_watertight());
    assert!(mesh.signed_volume() > 0.0);

    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.x, -39.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 52.0, epsilon = 1e-9);
    assert_eq!(min.z, 0.0);
    assert_eq!(max.z, 2.0);
}

#[test]
fn test_boss_errors() {
    let base = BossParams {
        center: DVec2::ZERO,
        outer_diameter: 8.0,
        inner_diameter: 3.15,
        height: 2.0,
        segments: 48,
    };
    let thin = BossParams {
        outer_diameter: 3.0,
        ..base
    };
    assert!(matches!(
        boss(&thin, &tol()),
        Err(MeshError::Configuration { parameter: "boss_outer_diameter", .. })
    ));
    let flat = BossParams { height: 0.0, ..base };
    assert!(boss(&flat, &tol()).is_err());
}
