use cubemath::cgmath::{Vector2, vec2};
use puzzlecube_core::LayerTwist;
use puzzlecube_prefs::InteractionPreferences;

use crate::{InputState, PickResolver, RevolveCamera, RotationInputInterpreter};

/// Routes pointer gestures to either the camera or the twist interpreter.
///
/// A gesture that starts on the background orbits the camera. A gesture that
/// starts on a cubie is interpreted as a layer twist.
#[derive(Debug, Clone)]
pub struct PuzzleController {
    camera: RevolveCamera,
    resolver: PickResolver,
    input: RotationInputInterpreter,

    /// Whether the current gesture orbits the camera.
    rotate_camera: bool,
    hit_check_paused: bool,
    vertical_paused: bool,
    horizontal_paused: bool,
    touch_sensitivity: f32,

    previous_pointer1: Vector2<f32>,
    previous_pointer2: Vector2<f32>,
}
impl PuzzleController {
    /// Constructs a controller with a fresh camera over the static puzzle
    /// geometry.
    pub fn new(prefs: &InteractionPreferences) -> Self {
        Self::with_camera(RevolveCamera::new(prefs), prefs)
    }
    /// Constructs a controller around an existing camera.
    pub fn with_camera(camera: RevolveCamera, prefs: &InteractionPreferences) -> Self {
        Self {
            camera,
            resolver: PickResolver::default(),
            input: RotationInputInterpreter::new(),

            rotate_camera: false,
            hit_check_paused: false,
            vertical_paused: false,
            horizontal_paused: false,
            touch_sensitivity: prefs.touch_sensitivity,

            previous_pointer1: vec2(0.0, 0.0),
            previous_pointer2: vec2(0.0, 0.0),
        }
    }

    /// Returns the camera.
    pub fn camera(&self) -> &RevolveCamera {
        &self.camera
    }
    /// Returns the camera mutably.
    pub fn camera_mut(&mut self) -> &mut RevolveCamera {
        &mut self.camera
    }
    /// Returns the state of the twist interpreter.
    pub fn input_state(&self) -> InputState {
        self.input.state()
    }
    /// Returns whether the current gesture orbits the camera.
    pub fn is_rotating_camera(&self) -> bool {
        self.rotate_camera
    }

    /// Handles a pointer going down at screen position `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32, pointer: usize) {
        match pointer {
            0 => {
                let pick = self.resolver.resolve(&self.camera.pick_ray(x, y));
                self.rotate_camera = pick.is_none();
                if self.hit_check_paused {
                    self.input.release();
                } else {
                    self.input.press(pick);
                }
                self.previous_pointer1 = vec2(x, y);
            }
            1 => self.previous_pointer2 = vec2(x, y),
            _ => (),
        }
    }

    /// Handles the first pointer moving to `(x, y)` by `(dx, dy)`. Returns
    /// the twist to perform, if the gesture just decided one.
    pub fn drag(&mut self, x: f32, y: f32, dx: f32, dy: f32) -> Option<LayerTwist> {
        if !self.rotate_camera {
            return self.input.drag(self.resolver.resolve(&self.camera.pick_ray(x, y)));
        }

        let dx = if self.horizontal_paused { 0.0 } else { dx };
        let dy = if self.vertical_paused { 0.0 } else { dy };
        let limit = self.touch_sensitivity;
        self.camera.revolve(-dx.clamp(-limit, limit), -dy.clamp(-limit, limit));

        // Both pointers follow so that a second finger does not jump.
        self.previous_pointer1 = vec2(x, y);
        self.previous_pointer2 = vec2(x, y);
        None
    }

    /// Handles two pointers moving. Returns whether the camera rolled.
    pub fn pinch(&mut self, pointer1: Vector2<f32>, pointer2: Vector2<f32>) -> bool {
        if !self.rotate_camera || (self.vertical_paused && self.horizontal_paused) {
            return false;
        }
        let current = pointer1 - pointer2;
        let previous = self.previous_pointer1 - self.previous_pointer2;
        self.camera.rotate(current.x, current.y, previous.x, previous.y);
        self.previous_pointer1 = pointer1;
        self.previous_pointer2 = pointer2;
        true
    }

    /// Handles every pointer going up.
    pub fn release(&mut self) {
        self.input.release();
    }

    /// Stops presses on the puzzle from starting twists.
    pub fn pause_hit_check(&mut self) {
        self.hit_check_paused = true;
    }
    /// Undoes [`Self::pause_hit_check()`].
    pub fn resume_hit_check(&mut self) {
        self.hit_check_paused = false;
    }
    /// Stops vertical drags from orbiting the camera.
    pub fn pause_vertical_revolve(&mut self) {
        self.vertical_paused = true;
    }
    /// Undoes [`Self::pause_vertical_revolve()`].
    pub fn resume_vertical_revolve(&mut self) {
        self.vertical_paused = false;
    }
    /// Stops horizontal drags from orbiting the camera.
    pub fn pause_horizontal_revolve(&mut self) {
        self.horizontal_paused = true;
    }
    /// Undoes [`Self::pause_horizontal_revolve()`].
    pub fn resume_horizontal_revolve(&mut self) {
        self.horizontal_paused = false;
    }
    /// Sets the maximum per-event drag delta applied to the camera.
    pub fn set_touch_sensitivity(&mut self, touch_sensitivity: f32) {
        self.touch_sensitivity = touch_sensitivity;
    }
}

#[cfg(test)]
mod tests {
    use cubemath::SignedAxis;
    use cubemath::cgmath::InnerSpace;
    use pretty_assertions::assert_eq;

    use super::*;

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 800.0;

    fn controller() -> PuzzleController {
        let mut controller = PuzzleController::new(&InteractionPreferences::default());
        controller.camera_mut().set_viewport(WIDTH, HEIGHT);
        controller
    }

    /// Screen position of a world point on the plane `z = 3`, the front face
    /// of the puzzle as seen by the initial camera.
    fn screen_of(x: f32, y: f32) -> (f32, f32) {
        let half_height = (15.0_f32).to_radians().tan() * (20.0 - 3.0);
        (
            WIDTH / 2.0 * (1.0 + x / half_height),
            HEIGHT / 2.0 * (1.0 - y / half_height),
        )
    }

    #[test]
    fn test_drag_across_front_turns_layer() {
        let mut controller = controller();
        let (x0, y0) = screen_of(2.0, 2.0);
        let (x1, y1) = screen_of(0.0, 2.0);

        controller.press(x0, y0, 0);
        assert!(!controller.is_rotating_camera());
        let twist = controller.drag(x1, y1, x1 - x0, 0.0);
        assert_eq!(twist, Some(LayerTwist::new(SignedAxis::NegY, 1)));

        let (x2, y2) = screen_of(-2.0, 2.0);
        assert_eq!(controller.drag(x2, y2, x2 - x1, 0.0), None);
        controller.release();
        assert_eq!(controller.input_state(), InputState::Idle);
    }

    #[test]
    fn test_drag_on_background_revolves() {
        let mut controller = controller();
        let before = controller.camera().pose();
        controller.press(5.0, 5.0, 0);
        assert!(controller.is_rotating_camera());
        assert_eq!(controller.drag(50.0, 5.0, 45.0, 0.0), None);

        let after = controller.camera().pose();
        assert_ne!(after.position, before.position);
        // Clamped to the touch sensitivity: a 10 degree orbit.
        let angle = after.position.angle(before.position);
        assert!((angle.0.to_degrees() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_paused_axes() {
        let mut controller = controller();
        controller.pause_horizontal_revolve();
        controller.press(5.0, 5.0, 0);
        let before = controller.camera().pose();
        controller.drag(50.0, 5.0, 45.0, 0.0);
        assert_eq!(controller.camera().pose(), before);

        controller.pause_vertical_revolve();
        assert!(!controller.pinch(vec2(0.0, 0.0), vec2(10.0, 10.0)));
        controller.resume_vertical_revolve();
        controller.resume_horizontal_revolve();
        assert!(controller.pinch(vec2(0.0, 0.0), vec2(10.0, 10.0)));
    }

    #[test]
    fn test_paused_hit_check() {
        let mut controller = controller();
        controller.pause_hit_check();
        let (x0, y0) = screen_of(2.0, 2.0);
        let (x1, y1) = screen_of(0.0, 2.0);
        controller.press(x0, y0, 0);
        assert!(!controller.is_rotating_camera());
        assert_eq!(controller.drag(x1, y1, x1 - x0, 0.0), None);

        controller.resume_hit_check();
        controller.press(x0, y0, 0);
        assert!(controller.drag(x1, y1, x1 - x0, 0.0).is_some());
    }

    #[test]
    fn test_pinch_rolls_camera() {
        let mut controller = controller();
        controller.press(5.0, 5.0, 0);
        controller.press(15.0, 5.0, 1);
        assert!(controller.pinch(vec2(5.0, 5.0), vec2(5.0, 15.0)));
        let pose = controller.camera().pose();
        assert!((pose.up - cubemath::cgmath::Vector3::unit_y()).magnitude() > 0.5);
        assert!(pose.up.dot(pose.direction).abs() < 1e-5);
    }

    #[test]
    fn test_pinch_ignored_on_puzzle() {
        let mut controller = controller();
        controller.press(WIDTH / 2.0, HEIGHT / 2.0, 0);
        assert!(!controller.pinch(vec2(0.0, 0.0), vec2(10.0, 10.0)));
    }
}
