use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Maximum per-event drag delta, in pixels, applied to the camera.
    pub touch_sensitivity: f32,
    /// Pixels per density-independent pixel; divides revolve drag distance.
    pub screen_density: f32,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            touch_sensitivity: 10.0,
            screen_density: 1.0,
        }
    }
}
