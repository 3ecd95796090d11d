//! # Configuration Constants
//!
//! Centralized constants for the joinery kernel. Every tolerance, clamp and
//! tessellation default the generators rely on is defined here, so no
//! generator carries a hidden literal.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison and cleanup tolerances
//! - **Clamps**: Minimum face sizes that keep tapered solids from collapsing
//! - **Placement**: Rounding used to deduplicate feature centers
//! - **Resolution**: Default tessellation counts for round features

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for point-on-segment tests during triangulation filtering and for
/// general "is this zero" checks.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Area below which a triangle is considered degenerate (mm²).
///
/// Cleanup drops every triangle whose area is under this threshold.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// Distance under which two vertices are merged during cleanup (mm).
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn vertices_should_merge(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() <= VERTEX_MERGE_EPSILON
/// }
///
/// assert!(vertices_should_merge([0.0; 3], [0.0, 0.0, 5e-9]));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// CLAMP CONSTANTS
// =============================================================================

/// Smallest edge a tapered frustum's inner face may shrink to (mm).
///
/// A large taper relative to the opening would otherwise invert the inner
/// face and self-intersect the side walls.
pub const MIN_FACE_SIZE: f64 = 0.8;

/// Smallest inner face of a plate plug (mm).
pub const MIN_PLUG_FACE: f64 = 1.0;

/// Largest share of a peg's length its chamfered tip may take.
pub const MAX_TIP_FRACTION: f64 = 0.8;

/// How far face marker tiles sink into the wall they sit on (mm).
///
/// The overlap fuses the two materials; a tile resting exactly on the face
/// would share a coplanar contact and print as a separate body.
pub const MARKER_EMBED_DEPTH: f64 = 0.4;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Decimal places used when deduplicating feature centers.
///
/// Two centers that agree after rounding to this many decimals are the same
/// center (typically a corner shared by two edges).
pub const PLACEMENT_DECIMALS: u32 = 4;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of segments around pegs and collars.
pub const DEFAULT_SEGMENTS: u32 = 48;

/// Default number of arc samples in a socket's C-profile.
pub const DEFAULT_SLOT_SECTIONS: u32 = 32;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Rounds a value to `decimals` decimal places and returns it as a hashable key.
///
/// # Example
///
/// ```rust
/// use config::constants::rounded_key;
///
/// assert_eq!(rounded_key(1.000_04, 4), rounded_key(1.0, 4));
/// assert_ne!(rounded_key(1.0006, 4), rounded_key(1.0, 4));
/// ```
#[inline]
pub fn rounded_key(value: f64, decimals: u32) -> i64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() as i64
}
