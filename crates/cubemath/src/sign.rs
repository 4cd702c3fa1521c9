//! Sign enum.

use std::ops::{Mul, Neg};

/// Positive, negative, or zero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// Returns the sign of an integer.
    pub const fn of_int(x: i32) -> Sign {
        match x {
            i32::MIN..=-1 => Sign::Neg,
            0 => Sign::Zero,
            1..=i32::MAX => Sign::Pos,
        }
    }
    /// Returns the sign of a float. Zero and NaN both map to
    /// [`Sign::Zero`]; negative zero is zero.
    pub fn of_float(x: f32) -> Sign {
        if x > 0.0 {
            Sign::Pos
        } else if x < 0.0 {
            Sign::Neg
        } else {
            Sign::Zero
        }
    }

    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i32 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
}
