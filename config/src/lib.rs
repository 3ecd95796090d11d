//! # Config Crate
//!
//! Centralized constants and dimensional parameters for the joinery cube kit.
//! All magic numbers and tunable dimensions are defined here so every
//! generator receives them explicitly instead of hiding literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_FACE_SIZE, VERTEX_MERGE_EPSILON};
//! use config::params::{PlateConfig, Tolerances};
//!
//! let tol = Tolerances::default();
//! assert_eq!(tol.min_face_size, MIN_FACE_SIZE);
//! assert_eq!(tol.merge_distance, VERTEX_MERGE_EPSILON);
//!
//! let plate = PlateConfig::default();
//! assert_eq!(plate.studs_per_edge, 5);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit**: Components take a [`params::Tolerances`] value, never a global
//! - **Partial Loading**: Parameter sets deserialize from incomplete input

pub mod constants;
pub mod params;
