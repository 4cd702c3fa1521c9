//! Principal axes and signed unit axes.

use std::fmt;

use cgmath::Vector3;
use strum::{EnumIter, IntoEnumIterator};

use crate::{LatticeVec, Sign};

/// 3-dimensional axis.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
impl Axis {
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the index of the axis (0, 1, or 2).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// One of the six signed unit vectors: the face normals of a cube and the
/// rotation axes of its layers.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SignedAxis {
    /// +X (right).
    PosX,
    /// -X (left).
    NegX,
    /// +Y (up).
    PosY,
    /// -Y (down).
    NegY,
    /// +Z (front).
    PosZ,
    /// -Z (back).
    NegZ,
}
impl fmt::Display for SignedAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign() {
            Sign::Neg => '-',
            _ => '+',
        };
        write!(f, "{sign}{}", self.axis())
    }
}
impl std::ops::Neg for SignedAxis {
    type Output = SignedAxis;

    fn neg(self) -> SignedAxis {
        self.opposite()
    }
}
impl SignedAxis {
    /// Returns an iterator over all six signed axes.
    pub fn iter() -> impl Iterator<Item = SignedAxis> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Constructs a signed axis from an axis and a sign, or returns `None` if
    /// the sign is zero.
    pub const fn new(axis: Axis, sign: Sign) -> Option<Self> {
        use SignedAxis::*;

        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Pos) => Some(PosX),
            (Axis::X, Sign::Neg) => Some(NegX),
            (Axis::Y, Sign::Pos) => Some(PosY),
            (Axis::Y, Sign::Neg) => Some(NegY),
            (Axis::Z, Sign::Pos) => Some(PosZ),
            (Axis::Z, Sign::Neg) => Some(NegZ),
        }
    }

    /// Returns the signed axis equal to `v`, or `None` if `v` is not a signed
    /// unit vector.
    pub fn from_vector(v: LatticeVec) -> Option<Self> {
        match [v.x, v.y, v.z] {
            [x, 0, 0] if x.abs() == 1 => Self::new(Axis::X, Sign::of_int(x)),
            [0, y, 0] if y.abs() == 1 => Self::new(Axis::Y, Sign::of_int(y)),
            [0, 0, z] if z.abs() == 1 => Self::new(Axis::Z, Sign::of_int(z)),
            _ => None,
        }
    }

    /// Returns the unsigned axis.
    pub const fn axis(self) -> Axis {
        use SignedAxis::*;

        match self {
            PosX | NegX => Axis::X,
            PosY | NegY => Axis::Y,
            PosZ | NegZ => Axis::Z,
        }
    }
    /// Returns the sign, which is never [`Sign::Zero`].
    pub const fn sign(self) -> Sign {
        use SignedAxis::*;

        match self {
            PosX | PosY | PosZ => Sign::Pos,
            NegX | NegY | NegZ => Sign::Neg,
        }
    }
    /// Returns the axis pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        use SignedAxis::*;

        match self {
            PosX => NegX,
            NegX => PosX,
            PosY => NegY,
            NegY => PosY,
            PosZ => NegZ,
            NegZ => PosZ,
        }
    }

    /// Returns the integer unit vector.
    pub fn vector(self) -> LatticeVec {
        LatticeVec::unit(self.axis()) * self.sign().int()
    }
    /// Returns the floating-point unit vector.
    pub fn unit_vec3(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().float()
    }
}
