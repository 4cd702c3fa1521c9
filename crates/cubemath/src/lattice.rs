//! Integer lattice vectors.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

use cgmath::Vector3;

use crate::{Axis, SignedAxis};

/// Integer 3D vector, used for lattice positions in `{-1, 0, 1}³` and for the
/// face normals and rotation axes derived from them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LatticeVec {
    /// X component (right).
    pub x: i32,
    /// Y component (up).
    pub y: i32,
    /// Z component (front).
    pub z: i32,
}
impl fmt::Display for LatticeVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
impl From<[i32; 3]> for LatticeVec {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}
impl From<LatticeVec> for [i32; 3] {
    fn from(v: LatticeVec) -> Self {
        [v.x, v.y, v.z]
    }
}
impl Index<Axis> for LatticeVec {
    type Output = i32;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
impl IndexMut<Axis> for LatticeVec {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}
impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl Neg for LatticeVec {
    type Output = LatticeVec;

    fn neg(self) -> LatticeVec {
        LatticeVec::new(-self.x, -self.y, -self.z)
    }
}
impl Mul<i32> for LatticeVec {
    type Output = LatticeVec;

    fn mul(self, rhs: i32) -> LatticeVec {
        LatticeVec::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl LatticeVec {
    /// Zero vector; also the center of the puzzle, which has no cubie.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Constructs a vector from components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
    /// Returns the positive unit vector along `axis`.
    pub const fn unit(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::new(1, 0, 0),
            Axis::Y => Self::new(0, 1, 0),
            Axis::Z => Self::new(0, 0, 1),
        }
    }

    /// Returns whether every component is zero.
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }

    /// Returns the dot product of two vectors.
    pub const fn dot(self, rhs: Self) -> i32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
    /// Returns the cross product `self × rhs` (right-handed).
    #[must_use]
    pub const fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
    /// Returns the squared Euclidean length.
    pub const fn mag2(self) -> i32 {
        self.dot(self)
    }
    /// Returns the squared Euclidean distance between two lattice points.
    pub fn distance2(self, other: Self) -> i32 {
        (self - other).mag2()
    }

    /// Returns the vector with only the component along `axis` kept.
    #[must_use]
    pub fn project_onto(self, axis: Axis) -> Self {
        let mut ret = Self::ZERO;
        ret[axis] = self[axis];
        ret
    }

    /// Rotates a lattice point 90 degrees counterclockwise (right-handed)
    /// around `axis`.
    ///
    /// The component along `axis` is kept as-is; the other two come from
    /// `self × -axis`, which is exactly the quarter-turn rotation matrix
    /// applied to an integer point.
    #[must_use]
    pub fn quarter_turn(self, axis: SignedAxis) -> Self {
        self.project_onto(axis.axis()) + self.cross(-axis.vector())
    }

    /// Converts to a floating-point vector.
    pub fn to_vec3(self) -> Vector3<f32> {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Deg, InnerSpace, Matrix3};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_cross_product_of_basis_vectors() {
        let x = LatticeVec::unit(Axis::X);
        let y = LatticeVec::unit(Axis::Y);
        let z = LatticeVec::unit(Axis::Z);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
        assert_eq!(x.cross(x), LatticeVec::ZERO);
    }

    #[test]
    fn test_quarter_turn_keeps_axial_component() {
        let p = LatticeVec::new(1, -1, 1);
        assert_eq!(p.quarter_turn(SignedAxis::PosY).y, -1);
        assert_eq!(p.quarter_turn(SignedAxis::NegX).x, 1);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        // Counterclockwise when looking down +Z: right goes to up.
        let right = LatticeVec::new(1, 0, 1);
        assert_eq!(right.quarter_turn(SignedAxis::PosZ), LatticeVec::new(0, 1, 1));
        assert_eq!(right.quarter_turn(SignedAxis::NegZ), LatticeVec::new(0, -1, 1));
    }

    proptest! {
        #[test]
        fn proptest_quarter_turn_matches_rotation_matrix(
            x in -1_i32..=1,
            y in -1_i32..=1,
            z in -1_i32..=1,
            axis_index in 0_usize..6,
        ) {
            let axis = SignedAxis::iter().nth(axis_index).unwrap();
            let p = LatticeVec::new(x, y, z);
            let expected = Matrix3::from_axis_angle(axis.unit_vec3(), Deg(90.0)) * p.to_vec3();
            let actual = p.quarter_turn(axis).to_vec3();
            prop_assert!((expected - actual).magnitude2() < 1e-6);
        }

        #[test]
        fn proptest_four_quarter_turns_is_identity(
            x in -1_i32..=1,
            y in -1_i32..=1,
            z in -1_i32..=1,
            axis_index in 0_usize..6,
        ) {
            let axis = SignedAxis::iter().nth(axis_index).unwrap();
            let p = LatticeVec::new(x, y, z);
            let q = p.quarter_turn(axis).quarter_turn(axis).quarter_turn(axis).quarter_turn(axis);
            prop_assert_eq!(p, q);
        }
    }
}
