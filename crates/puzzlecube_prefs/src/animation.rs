use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    pub rotation_animation: RotationAnimation,
    /// Duration of a layer rotation, in seconds.
    pub rotation_duration: f32,
    /// Duration of an undo rotation, in seconds.
    pub undo_duration: f32,
    pub solved_animation: SolvedAnimation,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            rotation_animation: RotationAnimation::default(),
            rotation_duration: 0.4,
            undo_duration: 0.4,
            solved_animation: SolvedAnimation::default(),
        }
    }
}

/// How layer rotations are animated.
///
/// The discriminant is the ordinal stored in saved games.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    FromRepr,
    EnumIter,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RotationAnimation {
    /// Overshoot slightly and settle back.
    #[default]
    Bounce = 0,
    /// Ease in and out.
    Standard = 1,
    /// Snap instantly.
    None = 2,
}
impl RotationAnimation {
    /// Returns the ordinal used in saved games.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
    /// Returns the mode with the given ordinal, if there is one.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    /// Returns the easing curve for this mode, or `None` if rotations should
    /// be applied instantly.
    pub fn interpolate_fn(self) -> Option<InterpolateFn> {
        match self {
            Self::Bounce => Some(InterpolateFn::Overshoot),
            Self::Standard => Some(InterpolateFn::QuadInOut),
            Self::None => None,
        }
    }
}

/// What happens when the puzzle is solved.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    FromRepr,
    EnumIter,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SolvedAnimation {
    /// Start a new game right away.
    #[default]
    NoAnimation = 0,
    /// Blow the cubies apart and fade to black first.
    Explode = 1,
}

pub mod interpolation {
    //! Interpolation functions.

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float.
    /// Every function maps 0.0 to 0.0 and 1.0 to 1.0, but may leave the range
    /// in between.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        #[default]
        Lerp,
        QuadInOut,
        Overshoot,
    }

    impl InterpolateFn {
        /// Returns the interpolation value for `t` in the range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            let t = t.clamp(0.0, 1.0);
            match self {
                Self::Lerp => t,

                Self::QuadInOut => {
                    // https://easings.net/#easeInOutQuad
                    if t < 0.5 {
                        2.0 * t * t
                    } else {
                        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                    }
                }

                Self::Overshoot => {
                    // https://easings.net/#easeOutBack
                    let c1 = 1.70158;
                    let c3 = c1 + 1.0;
                    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_interpolate_endpoints() {
        for &f in InterpolateFn::VARIANTS {
            assert!(f.interpolate(0.0).abs() < 1e-6, "{f:?}");
            assert!((f.interpolate(1.0) - 1.0).abs() < 1e-6, "{f:?}");
        }
    }

    #[test]
    fn test_overshoot_exceeds_one() {
        assert!(InterpolateFn::Overshoot.interpolate(0.8) > 1.0);
        assert_eq!(InterpolateFn::QuadInOut.interpolate(0.5), 0.5);
    }

    #[test]
    fn test_rotation_animation_ordinals() {
        assert_eq!(RotationAnimation::from_ordinal(0), Some(RotationAnimation::Bounce));
        assert_eq!(RotationAnimation::from_ordinal(2), Some(RotationAnimation::None));
        assert_eq!(RotationAnimation::from_ordinal(3), None);
        assert_eq!(RotationAnimation::Standard.ordinal(), 1);
        assert_eq!(RotationAnimation::None.interpolate_fn(), None);
    }

    #[test]
    fn test_solved_animation_names() {
        let prefs: AnimationPreferences =
            serde_norway::from_str("solved_animation: explode\n").unwrap();
        assert_eq!(prefs.solved_animation, SolvedAnimation::Explode);
        assert_eq!(prefs.rotation_duration, 0.4);
        assert_eq!(SolvedAnimation::from_repr(0), Some(SolvedAnimation::NoAnimation));
    }
}
