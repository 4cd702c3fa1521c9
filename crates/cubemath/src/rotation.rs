//! Rotations around world axes, and snapping orientations back to the
//! lattice.

use cgmath::{Deg, Matrix3, Matrix4, Vector4};

use crate::{Axis, LatticeVec, SignedAxis};

/// Returns the number of quarter turns (modulo 4, in `0..4`) represented by
/// `degrees`, or `None` if `degrees` is not a whole multiple of 90.
pub fn quarter_turns(degrees: f32) -> Option<i32> {
    let turns = degrees / 90.0;
    if !turns.is_finite() || turns.fract() != 0.0 {
        return None;
    }
    Some((turns as i64).rem_euclid(4) as i32)
}

/// Returns the transform that rotates `degrees` counterclockwise
/// (right-handed) around the world axis `axis`.
///
/// Whole multiples of 90 degrees produce matrices with entries in
/// `{-1, 0, 1}` exactly, so composing any number of them never accumulates
/// rounding error.
pub fn axis_rotation(axis: SignedAxis, degrees: f32) -> Matrix4<f32> {
    match quarter_turns(degrees) {
        Some(turns) => exact_quarter_turns(axis, turns),
        None => Matrix4::from_axis_angle(axis.unit_vec3(), Deg(degrees)),
    }
}

fn exact_quarter_turns(axis: SignedAxis, turns: i32) -> Matrix4<f32> {
    let image = |mut v: LatticeVec| {
        for _ in 0..turns {
            v = v.quarter_turn(axis);
        }
        v.to_vec3()
    };
    let [x, y, z] = [Axis::X, Axis::Y, Axis::Z].map(|a| image(LatticeVec::unit(a)));
    Matrix4::from(Matrix3::from_cols(x, y, z))
}

/// Orientation of a cubie reduced to the nearest cardinal directions.
///
/// Two cubies that have been turned identically always produce equal bases.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CardinalBasis {
    /// Image of the +X axis.
    pub right: LatticeVec,
    /// Image of the +Y axis.
    pub up: LatticeVec,
    /// Image of the +Z axis.
    pub forward: LatticeVec,
}
impl CardinalBasis {
    /// Basis of a cubie that has never been turned.
    pub const IDENTITY: Self = Self {
        right: LatticeVec::new(1, 0, 0),
        up: LatticeVec::new(0, 1, 0),
        forward: LatticeVec::new(0, 0, 1),
    };

    /// Extracts the basis of the rotational part of `transform`.
    ///
    /// Each column is normalized and then every component whose absolute
    /// value is not exactly 1 is zeroed. Any translation is ignored.
    pub fn from_transform(transform: &Matrix4<f32>) -> Self {
        Self {
            right: snap_column(transform.x),
            up: snap_column(transform.y),
            forward: snap_column(transform.z),
        }
    }
}

fn snap_column(column: Vector4<f32>) -> LatticeVec {
    let v = column.truncate();
    let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    if len == 0.0 || !len.is_finite() {
        return LatticeVec::ZERO;
    }
    let snap = |c: f32| {
        let c = c / len;
        if c == 1.0 {
            1
        } else if c == -1.0 {
            -1
        } else {
            0
        }
    };
    LatticeVec::new(snap(v.x), snap(v.y), snap(v.z))
}
