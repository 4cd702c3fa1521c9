use cubemath::{Axis, Sign, SignedAxis};
use rand::Rng;

use crate::LayerTwist;

/// Returns `count` random layer twists, never turning around the same axis
/// twice in a row.
pub fn random_twists<R: Rng>(count: usize, rng: &mut R) -> Vec<LayerTwist> {
    let axes: Vec<Axis> = Axis::iter().collect();
    let mut last_axis = None;
    let mut ret = Vec::with_capacity(count);
    for _ in 0..count {
        let axis = loop {
            let candidate = axes[rng.random_range(0..axes.len())];
            if Some(candidate) != last_axis {
                break candidate;
            }
        };
        last_axis = Some(axis);

        let sign = if rng.random_bool(0.5) { Sign::Neg } else { Sign::Pos };
        let depth = rng.random_range(-1..=1);

        if let Some(axis) = SignedAxis::new(axis, sign) {
            ret.push(LayerTwist::new(axis, depth));
        }
    }
    ret
}
