//! Viewing and touching the puzzle: an orbit camera, pick rays against the
//! static cubie geometry, and the drag-to-turn gesture interpreter.
//!
//! Nothing here mutates a puzzle directly. Gestures produce
//! [`puzzlecube_core::LayerTwist`]s for the caller to apply.

mod camera;
mod controller;
mod input;
mod pick;

pub use camera::{CameraPose, RevolveCamera};
pub use controller::PuzzleController;
pub use input::{InputState, RotationInputInterpreter, derive_rotation};
pub use pick::{PickResolver, PickResult, PuzzleGeometry, Ray, RayCaster};
