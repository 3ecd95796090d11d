//! # Primitives
//!
//! Closed solids emitted directly as vertex/triangle arrays (tapered
//! frustums, solids of revolution).

pub mod frustum;
pub mod revolve;

pub use frustum::{tapered_frustum, FrustumParams};
pub use revolve::revolve_stations;
