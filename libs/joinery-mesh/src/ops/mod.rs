//! # Mesh Operations
//!
//! Builders and passes that take rings, profiles and polygons to meshes:
//!
//! - [`cleanup`]: best-effort sanitation run on every generator output
//! - [`loft`]: quad strip between two compatible rings
//! - [`sweep`]: uncapped channel wall from a profile and a straight run
//! - [`extrude`]: capped prismatic extrusion of a polygon with holes

pub mod cleanup;
pub mod extrude;
pub mod loft;
pub mod sweep;

pub use cleanup::cleanup;
pub use extrude::extrude_prismatic;
pub use loft::{loft, loft_into, Ring};
pub use sweep::{sweep_profile, SweepPath};
