/// Notification emitted by the puzzle, in the order things happened.
///
/// Every `RotationStarted` is followed by exactly one `RotationComplete`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleEvent {
    /// A rotation (or undo) began.
    RotationStarted,
    /// The last started rotation finished.
    RotationComplete {
        /// Whether the puzzle is solved after the rotation.
        solved: bool,
    },
    /// The timer advanced.
    TimerChanged {
        /// New value of the timer, in seconds.
        seconds: i64,
    },
    /// A rotation was counted as a move.
    MoveCounterChanged {
        /// New number of moves.
        count: u64,
    },
}
