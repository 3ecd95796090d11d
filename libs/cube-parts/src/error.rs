//! # Part Errors
//!
//! A failed part aborts only that part; batch generation reports it and
//! carries on with the others.

use joinery_mesh::MeshError;
use thiserror::Error;

/// Why a part could not be produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartError {
    /// Geometry construction failed (bad dimension, ring mismatch, ...).
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The marker source could not supply a usable module grid.
    #[error("Marker {marker_id}: {message}")]
    Marker {
        /// Id requested from the source
        marker_id: u32,
        /// What went wrong
        message: String,
    },

    /// The exporter rejected a finished mesh.
    #[error("Export of '{name}' failed: {message}")]
    Export {
        /// Job name handed to the exporter
        name: String,
        /// Exporter's reason
        message: String,
    },
}

impl PartError {
    /// Creates a marker error.
    pub fn marker(marker_id: u32, message: impl Into<String>) -> Self {
        Self::Marker {
            marker_id,
            message: message.into(),
        }
    }

    /// Creates an export error.
    pub fn export(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type for part generation.
pub type Result<T> = std::result::Result<T, PartError>;
