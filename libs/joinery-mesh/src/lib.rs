//! # Joinery Mesh
//!
//! Boundary-mesh kernel for 3D-printable joinery. Every solid is built
//! directly as vertex/triangle arrays; there is no boolean CSG backend.
//!
//! ## Architecture
//!
//! ```text
//! placement ─┐
//!            ├─> peg / socket / boss ─┐
//! profile ───┤                        ├─> Mesh::concatenate ─> cleanup ─> exporter
//! triangulate┴─> loft / sweep / extrude ┘
//!            frustum / revolve ───────┘
//! ```
//!
//! ## Conventions
//!
//! - Units are millimeters.
//! - Triangles wind counter-clockwise seen from outside (right-hand rule).
//! - Tolerances are passed explicitly as [`config::params::Tolerances`].
//! - Degenerate input is absorbed with a `tracing` warning; structural
//!   errors are returned as [`MeshError`].
//!
//! ## Usage
//!
//! ```rust
//! use config::params::Tolerances;
//! use joinery_mesh::joinery::{peg, PegParams};
//!
//! let tol = Tolerances::default();
//! let stud = peg(&PegParams { diameter: 3.15, length: 2.7, tip_chamfer: 0.6, segments: 48 }, &tol)?;
//! assert!(stud.is_watertight());
//! # Ok::<(), joinery_mesh::MeshError>(())
//! ```

pub mod axis;
pub mod error;
pub mod joinery;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;
pub mod triangulate;

pub use axis::Axis;
pub use error::{MeshError, Result};
pub use mesh::Mesh;
pub use ops::cleanup::cleanup;
pub use ops::loft::Ring;
pub use profile::{Polygon2D, Profile2D};
