use std::fmt;

use cubemath::SignedAxis;

/// Quarter turn of one layer: the slice at `depth` along `axis`, turned
/// counterclockwise around `axis`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerTwist {
    /// Rotation axis.
    pub axis: SignedAxis,
    /// Coordinate of the layer along the axis, in `-1..=1`.
    pub depth: i32,
}
impl fmt::Display for LayerTwist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.axis, self.depth)
    }
}
impl LayerTwist {
    /// Constructs a twist.
    pub fn new(axis: SignedAxis, depth: i32) -> Self {
        Self { axis, depth }
    }
    /// Returns whether the depth selects an existing layer.
    pub fn is_valid(self) -> bool {
        (-1..=1).contains(&self.depth)
    }
}
