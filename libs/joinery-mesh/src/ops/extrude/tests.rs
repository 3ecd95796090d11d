//! # Extrusion Tests

use super::*;
use crate::error::MeshError;
use crate::profile::{Polygon2D, Profile2D};
use approx::assert_relative_eq;
use config::params::Tolerances;
use glam::DVec2;

fn tol() -> Tolerances {
    Tolerances::default()
}

#[test]
fn test_extrude_square() {
    let square = Polygon2D::new(Profile2D::square(10.0));
    let mesh = extrude_prismatic(&square, 20.0, &tol()).unwrap();

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.is_watertight());
    assert_relative_eq!(mesh.signed_volume(), 2000.0, epsilon = 1e-9);

    let (min, max) = mesh.bounding_box();
    assert_eq!(min.z, 0.0);
    assert_eq!(max.z, 20.0);
}

#[test]
fn test_extrude_orientation_independent() {
    let ccw = Polygon2D::new(Profile2D::square(4.0));
    let cw = Polygon2D::new(Profile2D::square(4.0).reversed());
    let a = extrude_prismatic(&ccw, 1.0, &tol()).unwrap();
    let b = extrude_prismatic(&cw, 1.0, &tol()).unwrap();
    assert_relative_eq!(a.signed_volume(), 16.0, epsilon = 1e-9);
    assert_relative_eq!(b.signed_volume(), 16.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_annulus_is_watertight_collar() {
    let collar = Polygon2D::annulus(DVec2::new(23.0, -48.0), 8.0, 3.15, 48);
    let mesh = extrude_prismatic(&collar, 2.0, &tol()).unwrap();

    assert!(mesh.is_watertight());
    assert_relative_eq!(mesh.signed_volume(), collar.area() * 2.0, epsilon = 1e-6);

    // Inner wall faces the bore.
    let center = glam::DVec3::new(23.0, -48.0, 1.0);
    let mut inner_walls = 0;
    for i in 0..mesh.triangle_count() {
        let c = mesh.triangle_centroid(i);
        let n = mesh.face_normal(i);
        let radial = (c - center).truncate().length();
        if n.z.abs() < 1e-9 && radial < 2.0 {
            inner_walls += 1;
            assert!(n.dot(c - center) < 0.0);
        }
    }
    assert_eq!(inner_walls, 96);
}

#[test]
fn test_extrude_rejects_bad_height() {
    let square = Polygon2D::new(Profile2D::square(1.0));
    assert!(matches!(
        extrude_prismatic(&square, 0.0, &tol()),
        Err(MeshError::Configuration { parameter: "extrude_height", .. })
    ));
}

#[test]
fn test_extrude_degenerate_polygon_is_empty() {
    let flat = Profile2D::new(vec![DVec2::ZERO, DVec2::X, DVec2::new(3.0, 0.0)]);
    let mesh = extrude_prismatic(&Polygon2D::new(flat), 1.0, &tol()).unwrap();
    assert!(mesh.is_empty());
}
