//! # Cube Parts
//!
//! Printable parts of the drop-in joinery cube kit, built on
//! [`joinery_mesh`] without any boolean CSG.
//!
//! ## Parts
//!
//! | Part | Generator |
//! |------|-----------|
//! | Universal plate | [`plate::generate_plate`] |
//! | Edge block | [`edge_block::generate_edge_block`] |
//! | Slot cutters | [`slots::slot_frustums`] |
//! | Plate plug | [`slots::plate_plug`] |
//! | Marker inlay | [`marker::marker_tiles`] |
//! | Open-top test cube | [`cube::open_top_cube`] |
//! | Test cube wall markers | [`cube::cube_markers`] |
//!
//! Every generator is a pure function of its parameters and the shared
//! [`config::params::Tolerances`], and returns a cleaned [`Mesh`].
//! [`batch::generate_batch`] runs many of them in parallel and hands the
//! results to a caller-supplied [`PartExporter`].
//!
//! ## Usage
//!
//! ```rust
//! use config::params::{PlateConfig, Tolerances};
//! use cube_parts::plate::generate_plate;
//!
//! let plate = generate_plate(&PlateConfig::default(), &Tolerances::default())?;
//! assert!(!plate.is_empty());
//! # Ok::<(), cube_parts::PartError>(())
//! ```

pub mod batch;
pub mod cube;
pub mod edge_block;
pub mod error;
pub mod marker;
pub mod plate;
pub mod slots;

pub use batch::{generate_batch, BatchReport, PartExporter, PartJob, PartKind};
pub use error::{PartError, Result};
pub use joinery_mesh::Mesh;
pub use marker::{MarkerSource, ModuleGrid};
