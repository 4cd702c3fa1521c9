/// Implements a component-wise binary operator for [`crate::LatticeVec`],
/// along with its assigning counterpart.
macro_rules! impl_componentwise_op {
    ($trait:ident, $func:ident, $assign_trait:ident, $assign_func:ident, $op:tt) => {
        impl std::ops::$trait for LatticeVec {
            type Output = LatticeVec;

            fn $func(self, rhs: LatticeVec) -> LatticeVec {
                LatticeVec {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                    z: self.z $op rhs.z,
                }
            }
        }
        impl std::ops::$assign_trait for LatticeVec {
            fn $assign_func(&mut self, rhs: LatticeVec) {
                *self = std::ops::$trait::$func(*self, rhs);
            }
        }
    };
}
