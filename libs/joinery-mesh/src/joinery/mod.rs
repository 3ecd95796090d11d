//! # Joinery
//!
//! Printable joints assembled from the kernel primitives:
//!
//! - [`placement`]: symmetric feature centers along square edges
//! - [`peg`]: cylindrical studs with a chamfered tip
//! - [`socket`]: C-profile channels that receive the studs, plus the fit check
//! - [`boss`]: reinforcing collars at stud roots
//!
//! Data flows placement → primitive → concatenation → cleanup.

pub mod boss;
pub mod peg;
pub mod placement;
pub mod socket;

#[cfg(test)]
mod tests;

pub use boss::{boss, BossParams};
pub use peg::{peg, PegParams};
pub use placement::{positions_along, running_positions, EdgeLayout};
pub use socket::{socket_channel, socket_profile, JointFit};
