//! Drag-to-turn: deriving a layer twist from two picks.

use cubemath::SignedAxis;
use puzzlecube_core::LayerTwist;

use crate::PickResult;

/// Derives the layer twist implied by dragging from one pick to another, or
/// returns `None` if the two picks do not determine a twist yet.
///
/// Dragging across two faces of the same cubie turns around the cross
/// product of their normals. Dragging along one face from a cubie to its
/// neighbor turns around the cross product of the displacement and the face
/// normal. Either way the layer is the one containing the starting cubie.
pub fn derive_rotation(from: PickResult, to: PickResult) -> Option<LayerTwist> {
    if from.location.distance2(to.location) > 1 {
        return None;
    }

    let axis_vector = if from.location == to.location {
        if from.axis == to.axis {
            return None;
        }
        from.axis.vector().cross(to.axis.vector())
    } else {
        if from.axis != to.axis {
            return None;
        }
        (from.location - to.location).cross(from.axis.vector())
    };

    let axis = SignedAxis::from_vector(axis_vector)?;
    Some(LayerTwist::new(axis, from.location[axis.axis()]))
}

/// Where a drag gesture is in deciding on a twist.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum InputState {
    /// No gesture on the puzzle.
    #[default]
    Idle,
    /// A press landed on a cubie; waiting for a drag that decides the twist.
    Armed {
        /// Where the press landed.
        from: PickResult,
    },
    /// A twist was emitted; further drags are ignored until release.
    Committed,
}

/// Turns a stream of press/drag/release picks into at most one twist per
/// gesture.
#[derive(Debug, Default, Clone)]
pub struct RotationInputInterpreter {
    state: InputState,
}
impl RotationInputInterpreter {
    /// Constructs an idle interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Starts a gesture. Returns whether the press landed on a cubie.
    pub fn press(&mut self, pick: Option<PickResult>) -> bool {
        self.state = match pick {
            Some(from) => InputState::Armed { from },
            None => InputState::Idle,
        };
        pick.is_some()
    }

    /// Continues a gesture. Returns a twist the first time the drag
    /// determines one.
    pub fn drag(&mut self, pick: Option<PickResult>) -> Option<LayerTwist> {
        let InputState::Armed { from } = self.state else {
            return None;
        };
        let twist = derive_rotation(from, pick?)?;
        log::debug!("drag from {} {} decided {twist}", from.location, from.axis);
        self.state = InputState::Committed;
        Some(twist)
    }

    /// Ends a gesture.
    pub fn release(&mut self) {
        self.state = InputState::Idle;
    }
}
