use cubemath::cgmath::{
    Deg, EuclideanSpace, InnerSpace, Matrix4, PerspectiveFov, Point3, Quaternion, Rad, Rotation,
    Rotation3, Vector3,
};
use puzzlecube_prefs::InteractionPreferences;

use crate::Ray;

/// Vertical field of view.
const FOV: Deg<f32> = Deg(30.0);
/// Distance to the near clipping plane.
const NEAR: f32 = 1.0;
/// Distance to the far clipping plane.
const FAR: f32 = 100.0;
/// Distance from the camera to the puzzle in a new game.
const INITIAL_DISTANCE: f32 = 20.0;

/// Position and orientation of the camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vector3<f32>,
    /// Unit view direction.
    pub direction: Vector3<f32>,
    /// Unit up vector.
    pub up: Vector3<f32>,
}
impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, INITIAL_DISTANCE),
            direction: -Vector3::unit_z(),
            up: Vector3::unit_y(),
        }
    }
}
impl CameraPose {
    fn rotated(self, q: Quaternion<f32>) -> Self {
        Self {
            position: q.rotate_vector(self.position),
            direction: q.rotate_vector(self.direction),
            up: q.rotate_vector(self.up),
        }
    }
}

/// Perspective camera that orbits the puzzle in response to drags.
#[derive(Debug, Clone, PartialEq)]
pub struct RevolveCamera {
    pose: CameraPose,
    /// Pose restored before each absolute revolve.
    remembered: CameraPose,

    screen_density: f32,
    viewport_width: f32,
    viewport_height: f32,
}
impl RevolveCamera {
    /// Constructs a camera 20 units in front of the puzzle, looking at its
    /// center.
    pub fn new(prefs: &InteractionPreferences) -> Self {
        Self {
            pose: CameraPose::default(),
            remembered: CameraPose::default(),

            screen_density: prefs.screen_density,
            viewport_width: 1.0,
            viewport_height: 1.0,
        }
    }

    /// Returns the current pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }
    /// Sets the current pose, as when restoring a saved game.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    /// Sets the size of the viewport in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
    }
    /// Returns the size of the viewport in pixels.
    pub fn viewport(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Moves the camera to a point and aims it at the center of the puzzle.
    pub fn position_camera(&mut self, x: f32, y: f32, z: f32) {
        self.pose.position = Vector3::new(x, y, z);
        self.pose.direction = (-self.pose.position).normalize();
    }
    /// Translates the camera without changing where it is aimed.
    pub fn move_camera(&mut self, dx: f32, dy: f32, dz: f32) {
        self.pose.position += Vector3::new(dx, dy, dz);
    }

    /// Orbits the camera around the puzzle by a screen-space drag.
    ///
    /// The drag direction picks an axis in the plane of the screen and the
    /// drag length (in density-independent pixels) is the angle in degrees.
    pub fn revolve(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let pose = self.pose;
        let drag_angle = Rad(dy.atan2(dx));
        let q1 = Quaternion::from_axis_angle(pose.direction.normalize(), drag_angle);
        let axis = q1.rotate_vector(pose.up);
        if axis.magnitude2() == 0.0 {
            return;
        }
        let degrees = (dx * dx + dy * dy).sqrt() / self.screen_density;
        let q2 = Quaternion::from_axis_angle(axis.normalize(), Deg(degrees));
        self.pose = pose.rotated(q2);
    }

    /// Saves the current pose as the base for [`Self::revolve_absolute()`].
    pub fn remember_current_rotation(&mut self) {
        self.remembered = self.pose;
    }
    /// Restores the remembered pose and then orbits around the X, Y, and Z
    /// axes in that order by the given angles in degrees.
    pub fn revolve_absolute(&mut self, x: f32, y: f32, z: f32) {
        let mut pose = self.remembered;
        for (axis, degrees) in [
            (Vector3::unit_x(), x),
            (Vector3::unit_y(), y),
            (Vector3::unit_z(), z),
        ] {
            pose = pose.rotated(Quaternion::from_axis_angle(axis, Deg(degrees)));
        }
        self.pose = pose;
    }

    /// Rolls the camera around its view direction by the change in angle
    /// between two successive two-finger deltas.
    pub fn rotate(&mut self, dx: f32, dy: f32, previous_dx: f32, previous_dy: f32) {
        let angle = Rad(previous_dy.atan2(previous_dx)) - Rad(dy.atan2(dx));
        let q = Quaternion::from_axis_angle(self.pose.direction.normalize(), angle);
        self.pose.up = q.rotate_vector(self.pose.up);
    }

    /// Returns the world-to-camera transform.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(
            Point3::from_vec(self.pose.position),
            self.pose.direction,
            self.pose.up,
        )
    }
    /// Returns the perspective projection.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        PerspectiveFov {
            fovy: FOV.into(),
            aspect: self.viewport_width / self.viewport_height,
            near: NEAR,
            far: FAR,
        }
        .into()
    }
    /// Returns the projection and view transforms combined.
    pub fn combined(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the ray from the near plane through a screen point, with the
    /// origin at the top left of the viewport and Y pointing down.
    pub fn pick_ray(&self, screen_x: f32, screen_y: f32) -> Ray {
        let forward = self.pose.direction.normalize();
        let right = forward.cross(self.pose.up).normalize();
        let up = right.cross(forward);

        let ndc_x = 2.0 * screen_x / self.viewport_width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_y / self.viewport_height;
        let half_height = (Rad::from(FOV).0 / 2.0).tan();
        let half_width = half_height * self.viewport_width / self.viewport_height;

        let direction =
            (forward + right * (ndc_x * half_width) + up * (ndc_y * half_height)).normalize();
        let origin = self.pose.position + direction * (NEAR / direction.dot(forward));
        Ray {
            origin: Point3::from_vec(origin),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use cubemath::cgmath::Vector4;
    use proptest::prelude::*;

    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < EPSILON, "{a:?} != {b:?}");
    }

    fn camera() -> RevolveCamera {
        let mut camera = RevolveCamera::new(&InteractionPreferences::default());
        camera.set_viewport(800.0, 600.0);
        camera
    }

    #[test]
    fn test_initial_pose() {
        let camera = camera();
        assert_close(camera.pose().position, Vector3::new(0.0, 0.0, 20.0));
        assert_close(camera.pose().direction, Vector3::new(0.0, 0.0, -1.0));
        let origin = camera.combined() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x / origin.w).abs() < EPSILON);
        assert!((origin.y / origin.w).abs() < EPSILON);
    }

    #[test]
    fn test_position_camera_aims_at_origin() {
        let mut camera = camera();
        camera.position_camera(0.0, 10.0, 0.0);
        assert_close(camera.pose().position, Vector3::new(0.0, 10.0, 0.0));
        assert_close(camera.pose().direction, Vector3::new(0.0, -1.0, 0.0));

        camera.position_camera(0.0, 0.0, 10.0);
        let origin = camera.combined() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x / origin.w).abs() < EPSILON);
        assert!((origin.y / origin.w).abs() < EPSILON);
    }

    #[test]
    fn test_move_camera_keeps_aim() {
        let mut camera = camera();
        camera.move_camera(3.0, 0.0, -5.0);
        assert_close(camera.pose().position, Vector3::new(3.0, 0.0, 15.0));
        assert_close(camera.pose().direction, Vector3::new(0.0, 0.0, -1.0));
        // The origin is now left of center.
        let origin = camera.combined() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(origin.x / origin.w < -EPSILON);
        assert!((origin.y / origin.w).abs() < EPSILON);
    }

    #[test]
    fn test_revolve_keeps_distance_and_aim() {
        let mut camera = camera();
        camera.revolve(30.0, -12.0);
        let pose = camera.pose();
        assert!((pose.position.magnitude() - 20.0).abs() < EPSILON);
        assert_close(pose.direction, -pose.position.normalize());
        assert!(pose.up.dot(pose.direction).abs() < EPSILON);
    }

    #[test]
    fn test_horizontal_revolve() {
        let mut camera = camera();
        // Dragging left by 90 units swings the camera around the up axis.
        camera.revolve(-90.0, 0.0);
        let pose = camera.pose();
        assert!(pose.position.y.abs() < EPSILON);
        assert!((pose.position.x.abs() - 20.0).abs() < EPSILON);
        assert_close(pose.up, Vector3::unit_y());
    }

    #[test]
    fn test_revolve_scales_with_density() {
        let mut dense = RevolveCamera::new(&InteractionPreferences {
            screen_density: 2.0,
            ..Default::default()
        });
        let mut normal = camera();
        dense.revolve(20.0, 0.0);
        normal.revolve(10.0, 0.0);
        assert_close(dense.pose().position, normal.pose().position);
    }

    #[test]
    fn test_revolve_absolute_does_not_compound() {
        let mut camera = camera();
        camera.remember_current_rotation();
        camera.revolve_absolute(0.0, 90.0, 0.0);
        camera.revolve_absolute(0.0, 90.0, 0.0);
        assert_close(camera.pose().position, Vector3::new(20.0, 0.0, 0.0));
        assert_close(camera.pose().direction, Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_rolls_up_vector() {
        let mut camera = camera();
        camera.rotate(0.0, 1.0, 1.0, 0.0);
        let pose = camera.pose();
        assert_close(pose.direction, Vector3::new(0.0, 0.0, -1.0));
        assert_close(pose.up, Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_pick_ray_through_center() {
        let camera = camera();
        let ray = camera.pick_ray(400.0, 300.0);
        assert_close(ray.direction, Vector3::new(0.0, 0.0, -1.0));
        assert_close(ray.origin.to_vec(), Vector3::new(0.0, 0.0, 19.0));
    }

    #[test]
    fn test_pick_ray_matches_projection() {
        let camera = camera();
        let ray = camera.pick_ray(600.0, 150.0);
        let point = ray.origin + ray.direction * 10.0;
        let clip = camera.combined() * point.to_homogeneous();
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!((ndc_x - 0.5).abs() < EPSILON, "{ndc_x}");
        assert!((ndc_y - 0.5).abs() < EPSILON, "{ndc_y}");
    }

    proptest! {
        #[test]
        fn proptest_revolve_stays_on_orbit(
            drags in prop::collection::vec((-10.0_f32..10.0, -10.0_f32..10.0), 1..20),
        ) {
            let mut camera = camera();
            for (dx, dy) in drags {
                camera.revolve(dx, dy);
            }
            let pose = camera.pose();
            prop_assert!((pose.position.magnitude() - 20.0).abs() < 1e-3);
            prop_assert!((pose.direction + pose.position.normalize()).magnitude() < 1e-3);
            prop_assert!(pose.up.dot(pose.direction).abs() < 1e-3);
        }
    }
}
