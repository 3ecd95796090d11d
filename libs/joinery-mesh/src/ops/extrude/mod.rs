//! # Extrusion Operations
//!
//! Straight extrusion of a polygon with holes along +Z:
//! - **extrude_prismatic**: triangulated caps top and bottom, every boundary
//!   loop lofted vertically into a wall
//!
//! Used for collars around peg roots and for any flat inlay feature.

mod prismatic;

#[cfg(test)]
mod tests;

pub use prismatic::extrude_prismatic;
