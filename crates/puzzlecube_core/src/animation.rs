use puzzlecube_prefs::InterpolateFn;
use web_time::Duration;

use crate::{Cube, Layer};

/// Total duration of the explode animation.
const EXPLODE_DURATION: Duration = Duration::new(3, 0); // 3 seconds
/// Final explode amount.
const EXPLODE_TARGET: f32 = 40.0;
/// Delay before the puzzle starts fading out.
const FADE_DELAY: Duration = Duration::from_millis(250);
/// Duration of the fade to black.
const FADE_DURATION: Duration = Duration::new(1, 0);

/// Quarter turn of a layer in progress.
#[derive(Debug, Clone)]
pub struct LayerAnimation {
    /// Layer being turned.
    pub(crate) layer: Layer,
    elapsed: Duration,
    duration: Duration,
    interpolate: InterpolateFn,
}
impl LayerAnimation {
    pub(crate) fn new(layer: Layer, duration: Duration, interpolate: InterpolateFn) -> Self {
        Self {
            layer,
            elapsed: Duration::ZERO,
            duration,
            interpolate,
        }
    }

    /// Returns the progress of the animation, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Steps the animation forward and poses the layer. Returns whether the
    /// animation is complete, in which case the layer is left at exactly 90
    /// degrees.
    pub(crate) fn proceed(&mut self, delta: Duration, cubes: &mut [Cube]) -> bool {
        self.elapsed += delta;
        let t = self.progress();
        if t >= 1.0 {
            self.layer.rotate(cubes, 90.0);
            true
        } else {
            self.layer.rotate(cubes, 90.0 * self.interpolate.interpolate(t));
            false
        }
    }
}

/// Celebration effect: three slabs fly apart while the puzzle fades out.
#[derive(Debug, Clone)]
pub struct ExplodeAnimation {
    layers: [Layer; 3],
    elapsed: Duration,
}
impl ExplodeAnimation {
    pub(crate) fn new(layers: [Layer; 3]) -> Self {
        Self {
            layers,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns how far the cubes have been pushed apart.
    pub fn amount(&self) -> f32 {
        let t = self.elapsed.as_secs_f32() / EXPLODE_DURATION.as_secs_f32();
        InterpolateFn::Lerp.interpolate(t) * EXPLODE_TARGET
    }

    /// Returns the brightness of the puzzle, from 1.0 (normal) to 0.0
    /// (black).
    pub fn brightness(&self) -> f32 {
        let Some(fading) = self.elapsed.checked_sub(FADE_DELAY) else {
            return 1.0;
        };
        let t = fading.as_secs_f32() / FADE_DURATION.as_secs_f32();
        1.0 - InterpolateFn::QuadInOut.interpolate(t)
    }

    /// Steps the animation forward and poses the cubes. Returns whether the
    /// animation is complete.
    pub(crate) fn proceed(&mut self, delta: Duration, cubes: &mut [Cube]) -> bool {
        self.elapsed = (self.elapsed + delta).min(EXPLODE_DURATION);
        let amount = self.amount();
        for layer in &self.layers {
            layer.explode(cubes, amount);
        }
        self.elapsed >= EXPLODE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use cubemath::SignedAxis;

    use super::*;
    use crate::cube::solved_cubes;

    #[test]
    fn test_layer_animation_lands_exactly() {
        let mut cubes = solved_cubes();
        let layer = Layer::new(&cubes, SignedAxis::PosY, 1);
        layer.snapshot(&mut cubes);
        let mut anim =
            LayerAnimation::new(layer, Duration::from_millis(400), InterpolateFn::Overshoot);

        assert!(!anim.proceed(Duration::from_millis(100), &mut cubes));
        assert!((anim.progress() - 0.25).abs() < 1e-6);
        assert!(!anim.proceed(Duration::from_millis(200), &mut cubes));
        assert!(anim.proceed(Duration::from_millis(200), &mut cubes));
        assert_eq!(anim.progress(), 1.0);

        let expected = cubemath::axis_rotation(SignedAxis::PosY, 90.0);
        assert_eq!(cubes[25].rotation, expected);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut cubes = solved_cubes();
        let layer = Layer::new(&cubes, SignedAxis::PosX, 0);
        let mut anim = LayerAnimation::new(layer, Duration::ZERO, InterpolateFn::Lerp);
        assert!(anim.proceed(Duration::ZERO, &mut cubes));
    }

    #[test]
    fn test_explode_timeline() {
        let mut cubes = solved_cubes();
        let layers = [-1, 0, 1].map(|depth| Layer::new(&cubes, SignedAxis::PosX, depth));
        let mut anim = ExplodeAnimation::new(layers);
        assert_eq!(anim.brightness(), 1.0);

        assert!(!anim.proceed(Duration::from_millis(250), &mut cubes));
        assert_eq!(anim.brightness(), 1.0);
        assert!(!anim.proceed(Duration::from_millis(500), &mut cubes));
        assert!((anim.brightness() - 0.5).abs() < 1e-5);
        assert!(!anim.proceed(Duration::from_millis(500), &mut cubes));
        assert_eq!(anim.brightness(), 0.0);

        assert!(anim.proceed(Duration::from_secs(10), &mut cubes));
        assert_eq!(anim.amount(), EXPLODE_TARGET);
    }
}
