//! # Mesh Errors
//!
//! Error types for B-rep construction.
//!
//! Degenerate input (a clamped frustum face, a zero-area polygon) is never
//! an error: the component logs a warning and substitutes a safe result.

use thiserror::Error;

/// Errors that can occur during mesh construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A supplied dimension makes the requested feature impossible.
    ///
    /// Raised before any geometry is built.
    #[error("Invalid configuration: {parameter} = {value}: {reason}")]
    Configuration {
        /// Offending parameter name
        parameter: &'static str,
        /// Value supplied
        value: f64,
        /// Why it was rejected
        reason: String,
    },

    /// Two rings meant for lofting have different point counts.
    #[error("Ring shape mismatch: {left} points vs {right} points")]
    ShapeMismatch {
        /// Points in the first ring
        left: usize,
        /// Points in the second ring
        right: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexViolation {
        /// Index of the offending triangle
        triangle: usize,
        /// Out-of-range vertex index
        index: u32,
        /// Vertices actually present
        vertex_count: usize,
    },

    /// A best-effort cleanup step could not run.
    #[error("Cleanup step '{step}' failed: {message}")]
    CleanupStep {
        /// Name of the step
        step: &'static str,
        /// What went wrong
        message: String,
    },
}

impl MeshError {
    /// Creates a configuration error for a named parameter.
    pub fn configuration(parameter: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            value,
            reason: reason.into(),
        }
    }

    /// Creates a cleanup step error.
    pub fn cleanup_step(step: &'static str, message: impl Into<String>) -> Self {
        Self::CleanupStep {
            step,
            message: message.into(),
        }
    }
}

/// Result alias for mesh construction.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Rejects a non-positive or non-finite dimension.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::configuration(parameter, value, "must be positive"))
    }
}

/// Rejects a negative or non-finite dimension.
pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MeshError::configuration(parameter, value, "must be non-negative"))
    }
}
