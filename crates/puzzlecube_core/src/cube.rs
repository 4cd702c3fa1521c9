use cubemath::cgmath::{Matrix4, SquareMatrix};
use cubemath::{Axis, LatticeVec};

/// Number of cubies in a 3x3x3 puzzle (every lattice point except the
/// center).
pub const CUBE_COUNT: usize = 26;

/// Single cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cube {
    /// Position in the fixed render geometry. Never changes.
    pub index: usize,
    /// Current lattice position, relative to the center of the puzzle.
    pub location: LatticeVec,
    /// Cumulative orientation relative to the solved pose.
    pub rotation: Matrix4<f32>,
    /// Snapshot of `rotation` taken when the current layer turn began.
    pub previous_rotation: Matrix4<f32>,
}
impl Cube {
    /// Constructs an unturned cubie.
    pub fn new(index: usize, location: LatticeVec) -> Self {
        Self {
            index,
            location,
            rotation: Matrix4::identity(),
            previous_rotation: Matrix4::identity(),
        }
    }
}

/// Returns the location of cube `index` in a solved puzzle.
///
/// Cubies are numbered by iterating X, then Y, then Z from -1 to 1, skipping
/// the center.
pub fn solved_location(index: usize) -> LatticeVec {
    let k = (if index >= CUBE_COUNT / 2 { index + 1 } else { index }) as i32;
    LatticeVec::new(k / 9 - 1, k / 3 % 3 - 1, k % 3 - 1)
}

/// Returns all cubies in their solved positions.
pub fn solved_cubes() -> [Cube; CUBE_COUNT] {
    std::array::from_fn(|i| Cube::new(i, solved_location(i)))
}

/// Error returned when a list of cubes does not describe a valid puzzle.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidCubes {
    /// The list does not have exactly 26 cubes.
    #[error("expected 26 cubes, got {0}")]
    WrongCount(usize),
    /// An index is missing, repeated, or out of range.
    #[error("cube index {0} is out of range or repeated")]
    BadIndex(usize),
    /// A location is outside `{-1, 0, 1}³` or is the center.
    #[error("cube {index} has location {location} outside the puzzle")]
    LocationOutOfRange {
        /// Index of the offending cube.
        index: usize,
        /// Its location.
        location: LatticeVec,
    },
    /// Two cubes share a location.
    #[error("more than one cube at {0}")]
    DuplicateLocation(LatticeVec),
    /// A rotation matrix contains NaN or infinity.
    #[error("cube {0} has a non-finite rotation")]
    NonFiniteRotation(usize),
}

/// Validates a list of cubes and arranges it by index.
pub(crate) fn validate_cubes(
    cubes: impl IntoIterator<Item = Cube>,
) -> Result<[Cube; CUBE_COUNT], InvalidCubes> {
    let cubes: Vec<Cube> = cubes.into_iter().collect();
    if cubes.len() != CUBE_COUNT {
        return Err(InvalidCubes::WrongCount(cubes.len()));
    }

    let mut slots: [Option<Cube>; CUBE_COUNT] = [None; CUBE_COUNT];
    let mut occupied = std::collections::HashSet::new();
    for cube in cubes {
        let location = cube.location;
        let in_range = Axis::iter().all(|axis| (-1..=1).contains(&location[axis]));
        if !in_range || location.is_zero() {
            return Err(InvalidCubes::LocationOutOfRange {
                index: cube.index,
                location,
            });
        }
        if !occupied.insert(location) {
            return Err(InvalidCubes::DuplicateLocation(location));
        }
        let m: &[[f32; 4]; 4] = cube.rotation.as_ref();
        if !m.iter().flatten().all(|x| x.is_finite()) {
            return Err(InvalidCubes::NonFiniteRotation(cube.index));
        }
        let Some(slot) = slots.get_mut(cube.index) else {
            return Err(InvalidCubes::BadIndex(cube.index));
        };
        if slot.is_some() {
            return Err(InvalidCubes::BadIndex(cube.index));
        }
        *slot = Some(Cube {
            previous_rotation: cube.rotation,
            ..cube
        });
    }

    let mut ret = solved_cubes();
    for (dst, src) in ret.iter_mut().zip(slots) {
        match src {
            Some(cube) => *dst = cube,
            None => return Err(InvalidCubes::BadIndex(dst.index)),
        }
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_locations() {
        assert_eq!(solved_location(0), LatticeVec::new(-1, -1, -1));
        assert_eq!(solved_location(12), LatticeVec::new(0, 0, -1));
        assert_eq!(solved_location(13), LatticeVec::new(0, 0, 1));
        assert_eq!(solved_location(25), LatticeVec::new(1, 1, 1));

        let cubes = solved_cubes();
        for (i, cube) in cubes.iter().enumerate() {
            assert_eq!(cube.index, i);
            assert!(!cube.location.is_zero());
            for other in &cubes[..i] {
                assert_ne!(cube.location, other.location);
            }
        }
    }

    #[test]
    fn test_validate_reorders_by_index() {
        let mut cubes = solved_cubes().to_vec();
        cubes.reverse();
        assert_eq!(validate_cubes(cubes), Ok(solved_cubes()));
    }

    #[test]
    fn test_validate_rejects_bad_cubes() {
        let cubes = solved_cubes();

        assert_eq!(
            validate_cubes(cubes[..25].iter().copied()),
            Err(InvalidCubes::WrongCount(25)),
        );

        let mut bad = cubes;
        bad[3].index = 4;
        assert_eq!(validate_cubes(bad), Err(InvalidCubes::BadIndex(4)));

        let mut bad = cubes;
        bad[3].location = LatticeVec::new(2, 0, 0);
        assert!(matches!(
            validate_cubes(bad),
            Err(InvalidCubes::LocationOutOfRange { index: 3, .. }),
        ));

        let mut bad = cubes;
        bad[3].location = bad[4].location;
        assert_eq!(
            validate_cubes(bad),
            Err(InvalidCubes::DuplicateLocation(cubes[4].location)),
        );

        let mut bad = cubes;
        bad[7].rotation.x.x = f32::NAN;
        assert_eq!(validate_cubes(bad), Err(InvalidCubes::NonFiniteRotation(7)));
    }
}
