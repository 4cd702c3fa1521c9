//! Logical model of a 3x3x3 twisty puzzle.
//!
//! The puzzle is 26 cubies on an integer lattice. Turning a layer updates
//! each cubie's lattice location in closed form and composes its orientation
//! onto a snapshot taken when the turn began, so every turn happens around a
//! fixed world axis. Animation is cooperative: callers drive it by calling
//! [`PuzzleState::tick()`] every frame and drain [`PuzzleEvent`]s afterwards.

mod animation;
mod cube;
mod events;
mod layer;
mod puzzle;
mod scramble;
mod solved;
mod timer;
mod twist;

pub use animation::{ExplodeAnimation, LayerAnimation};
pub use cube::{CUBE_COUNT, Cube, InvalidCubes, solved_cubes, solved_location};
pub use events::PuzzleEvent;
pub use layer::Layer;
pub use puzzle::{PuzzleState, STARTING_SECONDS};
pub use scramble::random_twists;
pub use solved::is_solved;
pub use timer::PuzzleTimer;
pub use twist::LayerTwist;
