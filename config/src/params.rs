//! # Dimensional Parameters
//!
//! Flat, serde-loadable parameter sets for each part family. Every field has
//! the default the kit was tuned with, and `#[serde(default)]` lets a caller
//! override only the fields it cares about.
//!
//! No cross-field validation happens here: each generator checks the
//! combinations it depends on and reports the offending parameter.
//!
//! All lengths are millimeters.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SEGMENTS, DEFAULT_SLOT_SECTIONS, DEGENERATE_AREA_EPSILON, EPSILON, MARKER_EMBED_DEPTH,
    MAX_TIP_FRACTION, MIN_FACE_SIZE, MIN_PLUG_FACE, PLACEMENT_DECIMALS, VERTEX_MERGE_EPSILON,
};

// =============================================================================
// TOLERANCES
// =============================================================================

/// Numeric tolerances handed explicitly to every kernel component.
///
/// # Example
///
/// ```rust
/// use config::params::Tolerances;
///
/// let tol = Tolerances {
///     min_face_size: 1.2,
///     ..Tolerances::default()
/// };
/// assert_eq!(tol.placement_decimals, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Generic comparison epsilon
    pub epsilon: f64,
    /// Triangles with a smaller area are degenerate (mm²)
    pub degenerate_area: f64,
    /// Vertices closer than this are merged (mm)
    pub merge_distance: f64,
    /// Clamp for a frustum's inner face edge (mm)
    pub min_face_size: f64,
    /// Clamp for a plate plug's inner face edge (mm)
    pub min_plug_face: f64,
    /// Largest fraction of a peg's length used by its tip
    pub max_tip_fraction: f64,
    /// Rounding used to deduplicate feature centers
    pub placement_decimals: u32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            degenerate_area: DEGENERATE_AREA_EPSILON,
            merge_distance: VERTEX_MERGE_EPSILON,
            min_face_size: MIN_FACE_SIZE,
            min_plug_face: MIN_PLUG_FACE,
            max_tip_fraction: MAX_TIP_FRACTION,
            placement_decimals: PLACEMENT_DECIMALS,
        }
    }
}

// =============================================================================
// PLATE
// =============================================================================

/// Universal face plate: mitered square slab with studs along all four edges
/// on the inside face.
///
/// The outside (marker) face sits at `z = 0` and the inside face at
/// `z = thickness`; studs protrude above the inside face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateConfig {
    /// Outside edge length (mm).
    pub size: f64,
    /// Slab thickness from the outside face to the inside face.
    pub thickness: f64,

    /// 45° miter: the inside face is inset by `thickness` on every side.
    pub miter_enabled: bool,

    /// Anti-elephant-foot relief on the outside perimeter.
    pub relief_enabled: bool,
    /// Per-side inset of the relief step.
    pub relief_inset: f64,
    /// Height of the relief step above the outside face.
    pub relief_height: f64,

    /// Studs on each of the four edges before corner deduplication.
    pub studs_per_edge: usize,
    /// Keeps studs away from the corners.
    pub stud_end_margin: f64,
    /// Stud centerline distance from the outer edge toward the plate center.
    /// Must match [`EdgeBlockConfig::socket_offset`].
    pub stud_edge_offset: f64,
    /// Stud shaft diameter.
    pub stud_diameter: f64,
    /// Stud length above the inside face, tip included.
    pub stud_length: f64,
    /// Height of the conical tip; clamped to part of the stud length.
    pub stud_tip_chamfer: f64,

    /// Reinforcing collar around each stud root. Skipped unless
    /// `boss_outer_diameter > stud_diameter` and `boss_height > 0`.
    pub boss_outer_diameter: f64,
    /// Collar height above the inside face.
    pub boss_height: f64,

    /// Segments around studs and collars.
    pub segments: u32,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            size: 120.0,
            thickness: 5.0,
            miter_enabled: true,
            relief_enabled: true,
            relief_inset: 0.25,
            relief_height: 0.30,
            studs_per_edge: 5,
            stud_end_margin: 25.0,
            stud_edge_offset: 12.0,
            stud_diameter: 3.15,
            stud_length: 2.7,
            stud_tip_chamfer: 0.6,
            boss_outer_diameter: 8.0,
            boss_height: 2.0,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl PlateConfig {
    /// Inside face edge: `size - 2 * thickness` with the miter, `size` without.
    ///
    /// Not validated here; a non-positive result is rejected by the plate
    /// generator.
    pub fn inside_size(&self) -> f64 {
        if self.miter_enabled {
            self.size - 2.0 * self.thickness
        } else {
            self.size
        }
    }

    /// True when the elephant-foot relief is enabled and fits the plate.
    pub fn relief_fits(&self) -> bool {
        self.relief_enabled
            && self.relief_inset > 0.0
            && self.relief_height > 0.0
            && self.relief_height < self.thickness
            && self.size - 2.0 * self.relief_inset > 0.0
    }

    /// Collars are built only when wider than the stud and of some height.
    pub fn bosses_enabled(&self) -> bool {
        self.boss_outer_diameter > self.stud_diameter && self.boss_height > 0.0
    }
}

// =============================================================================
// EDGE BLOCK
// =============================================================================

/// L-shaped edge block joining two plates at 90° through open slot receivers.
///
/// Block local frame: `x, y ∈ [0, block_size]`, `z ∈ [0, length]`. X-slots
/// open on the face `x = 0`, Y-slots on the face `y = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeBlockConfig {
    /// Outer extent of the L section along x and y.
    pub block_size: f64,
    /// Thickness of each leg of the L.
    pub leg_thickness: f64,
    /// Should match the plate size.
    pub length: f64,

    /// Slot receivers on each open face.
    pub sockets_per_edge: usize,
    /// Distance from either block end to the nearest receiver.
    pub socket_end_margin: f64,
    /// Must equal [`PlateConfig::stud_edge_offset`].
    pub socket_offset: f64,

    /// Diameter of the stud the slot receives.
    pub stud_diameter: f64,
    /// Nominal bore of the receiving channel; strictly larger than the stud.
    pub socket_bore_diameter: f64,
    /// Extra width of the slot mouth over the stud diameter.
    pub slot_clearance: f64,
    /// Arc samples in the receiver's C-profile.
    pub sections: u32,
}

impl Default for EdgeBlockConfig {
    fn default() -> Self {
        Self {
            block_size: 18.0,
            leg_thickness: 6.0,
            length: 120.0,
            sockets_per_edge: 5,
            socket_end_margin: 14.0,
            socket_offset: 12.0,
            stud_diameter: 3.15,
            socket_bore_diameter: 3.25,
            slot_clearance: 0.6,
            sections: DEFAULT_SLOT_SECTIONS,
        }
    }
}

// =============================================================================
// CUBE SLOTS / PLATE PLUG
// =============================================================================

/// Hollow cube with tapered face slots and the plug plates that seat in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Outer cube edge length.
    pub cube_edge: f64,

    /// Slot edge as a fraction of the cube edge.
    pub slot_fraction: f64,
    /// Slot depth into the wall.
    pub slot_depth: f64,
    /// Slot taper per side; equal to `slot_depth` for a true 45° seat.
    pub slot_miter: f64,

    /// Per-side gap between plug and slot.
    pub clearance: f64,

    /// Bezel flange on the plug top. Off by default: later revisions drop it
    /// to get rid of floating cantilevers.
    pub flange_enabled: bool,
    /// Per-side overhang of the flange beyond the slot opening.
    pub flange_overhang: f64,
    /// Flange thickness, capped at the slot depth.
    pub flange_thickness: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            cube_edge: 150.0,
            slot_fraction: 0.85,
            slot_depth: 2.4,
            slot_miter: 2.4,
            clearance: 0.2,
            flange_enabled: false,
            flange_overhang: 0.8,
            flange_thickness: 0.8,
        }
    }
}

impl CubeConfig {
    /// Slot opening edge length.
    pub fn slot_size(&self) -> f64 {
        self.cube_edge * self.slot_fraction
    }

    /// Slot taper clamped into `[0, slot_depth]`.
    pub fn effective_taper(&self) -> f64 {
        self.slot_miter.clamp(0.0, self.slot_depth.max(0.0))
    }
}

// =============================================================================
// MARKER
// =============================================================================

/// Marker inlay tiles printed as the first material of a face-down plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Data modules per side, without the border.
    pub modules: usize,
    /// Border width in modules on each side.
    pub border_bits: usize,
    /// Edge length of the whole marker including its border.
    pub marker_size: f64,
    /// Tile height; tiles occupy `z ∈ [0, inlay_depth]`.
    pub inlay_depth: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            modules: 4,
            border_bits: 1,
            marker_size: 70.0,
            inlay_depth: 0.6,
        }
    }
}

impl MarkerConfig {
    /// Cells per side of the full grid, border included.
    pub fn grid_size(&self) -> usize {
        self.modules + 2 * self.border_bits
    }
}

// =============================================================================
// OPEN-TOP CUBE
// =============================================================================

/// Test cube: five walls around an open top, with marker tiles on the five
/// walls' outer faces.
///
/// The cube is centered at the origin; the open face is `+z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenCubeConfig {
    /// Outer edge length.
    pub outer_edge: f64,
    /// Thickness of each wall.
    pub wall_thickness: f64,
    /// Marker grid and tile dimensions. `inlay_depth` is the tile thickness.
    pub marker: MarkerConfig,
    /// Margin removed from each side of the marker to leave a quiet zone.
    pub marker_inset: f64,
    /// Depth the tiles sink into the wall.
    pub marker_embed: f64,
}

impl Default for OpenCubeConfig {
    fn default() -> Self {
        Self {
            outer_edge: 60.0,
            wall_thickness: 3.0,
            marker: MarkerConfig {
                marker_size: 40.0,
                ..MarkerConfig::default()
            },
            marker_inset: 0.5,
            marker_embed: MARKER_EMBED_DEPTH,
        }
    }
}

impl OpenCubeConfig {
    /// Marker edge left after the inset on both sides.
    pub fn usable_marker_size(&self) -> f64 {
        self.marker.marker_size - 2.0 * self.marker_inset
    }
}
