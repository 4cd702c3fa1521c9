//! Lattice vectors, signed axes, and exact quarter-turn rotations.
//!
//! Everything a 3x3x3 puzzle needs to reason about where a cubie is and which
//! way it faces. Lattice arithmetic is done on integers; orientations are
//! `cgmath` matrices that stay exact as long as they are only ever composed
//! from quarter turns.

pub use cgmath;

#[macro_use]
mod impl_macros;

pub mod axis;
pub mod lattice;
pub mod rotation;
pub mod sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::axis::{Axis, SignedAxis};
    pub use crate::lattice::LatticeVec;
    pub use crate::rotation::{CardinalBasis, axis_rotation, quarter_turns};
    pub use crate::sign::Sign;
}
pub use prelude::*;
