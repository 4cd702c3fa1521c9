use cubemath::cgmath::{Deg, InnerSpace, Matrix4};
use cubemath::{SignedAxis, axis_rotation};
use smallvec::SmallVec;

use crate::Cube;

/// Slice of cubies that turn together around a world axis.
///
/// Membership is captured once when the layer is formed and never
/// re-queried, so a layer stays valid after its cubies' locations change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    axis: SignedAxis,
    cubes: SmallVec<[usize; 9]>,
}
impl Layer {
    /// Collects the cubes whose coordinate along `axis` equals `depth`, in
    /// array order.
    pub fn new(cubes: &[Cube], axis: SignedAxis, depth: i32) -> Self {
        let cubes = cubes
            .iter()
            .enumerate()
            .filter(|(_, cube)| cube.location[axis.axis()] == depth)
            .map(|(i, _)| i)
            .collect();
        Self { axis, cubes }
    }

    /// Returns the rotation axis.
    pub fn axis(&self) -> SignedAxis {
        self.axis
    }
    /// Returns the indices of the cubes in the layer.
    pub fn cube_indices(&self) -> &[usize] {
        &self.cubes
    }
    /// Returns the number of cubes in the layer.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }
    /// Returns whether the layer has no cubes.
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Records every cube's current rotation as the base for the next turn.
    pub fn snapshot(&self, cubes: &mut [Cube]) {
        for &i in &self.cubes {
            cubes[i].previous_rotation = cubes[i].rotation;
        }
    }

    /// Sets every cube's rotation to `degrees` around the world axis, applied
    /// on top of its snapshot.
    pub fn rotate(&self, cubes: &mut [Cube], degrees: f32) {
        let turn = axis_rotation(self.axis, degrees);
        for &i in &self.cubes {
            cubes[i].rotation = turn * cubes[i].previous_rotation;
        }
    }

    /// Pushes every cube outward along its location and spins it around
    /// that direction, proportionally to `amount`.
    pub fn explode(&self, cubes: &mut [Cube], amount: f32) {
        for &i in &self.cubes {
            let cube = &mut cubes[i];
            let direction = cube.location.to_vec3();
            let spin = Matrix4::from_axis_angle(direction.normalize(), Deg(amount * 20.0));
            let push = Matrix4::from_translation(direction * amount);
            cube.rotation = spin * push * cube.previous_rotation;
        }
    }

    /// Prepares the layer to turn back to where it came from: snapshots the
    /// current rotations and flips the axis.
    pub fn reverse(&mut self, cubes: &mut [Cube]) {
        self.snapshot(cubes);
        self.axis = self.axis.opposite();
    }

    /// Moves every cube to the lattice position it occupies after a quarter
    /// turn around the layer's axis.
    pub fn update_locations(&self, cubes: &mut [Cube]) {
        for &i in &self.cubes {
            cubes[i].location = cubes[i].location.quarter_turn(self.axis);
        }
    }
}
