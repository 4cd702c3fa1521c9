//! Solved-state detection.

use cubemath::CardinalBasis;

use crate::Cube;

/// Cubies making up one face of a solved puzzle.
struct FaceGroup {
    /// Index of the center cube of the face.
    center: usize,
    /// Indices of the edge and corner cubes of the face.
    cubes: [usize; 8],
}

/// Bottom, top, back, front, left, right.
const FACES: [FaceGroup; 6] = [
    FaceGroup {
        center: 10,
        cubes: [0, 1, 2, 9, 11, 17, 18, 19],
    },
    FaceGroup {
        center: 15,
        cubes: [6, 7, 8, 14, 16, 23, 24, 25],
    },
    FaceGroup {
        center: 12,
        cubes: [0, 3, 6, 9, 14, 17, 20, 23],
    },
    FaceGroup {
        center: 13,
        cubes: [2, 5, 8, 11, 16, 19, 22, 25],
    },
    FaceGroup {
        center: 4,
        cubes: [0, 1, 2, 3, 5, 6, 7, 8],
    },
    FaceGroup {
        center: 21,
        cubes: [17, 18, 19, 20, 22, 23, 24, 25],
    },
];

/// Returns whether every face shows a single color.
///
/// For each face, all of its edge and corner cubes must still surround the
/// face's center cube and must share one cardinal orientation.
pub fn is_solved(cubes: &[Cube]) -> bool {
    FACES.iter().all(|face| {
        let center = cubes[face.center].location;
        let reference = CardinalBasis::from_transform(&cubes[face.cubes[0]].rotation);
        face.cubes.iter().all(|&i| {
            cubes[i].location.distance2(center) <= 4
                && CardinalBasis::from_transform(&cubes[i].rotation) == reference
        })
    })
}

#[cfg(test)]
mod tests {
    use cubemath::SignedAxis;

    use super::*;
    use crate::cube::solved_location;

    #[test]
    fn test_face_groups_match_solved_layout() {
        let normals = FACES.map(|face| SignedAxis::from_vector(solved_location(face.center)));
        assert_eq!(
            normals,
            [
                SignedAxis::NegY,
                SignedAxis::PosY,
                SignedAxis::NegZ,
                SignedAxis::PosZ,
                SignedAxis::NegX,
                SignedAxis::PosX,
            ]
            .map(Some),
        );
        for (face, normal) in FACES.iter().zip(normals.into_iter().flatten()) {
            for &i in &face.cubes {
                let depth = normal.sign().int();
                assert_eq!(solved_location(i)[normal.axis()], depth, "{normal} {i}");
            }
        }
    }
}
