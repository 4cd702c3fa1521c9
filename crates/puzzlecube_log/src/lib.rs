//! Saved games: the logical state of a puzzle in progress, serialized as
//! JSON.
//!
//! Every field is optional when reading. A field that is missing or
//! malformed falls back on its own without discarding the rest of the file.

use std::path::Path;

use cubemath::LatticeVec;
use cubemath::cgmath::{Matrix4, Vector3};
use puzzlecube_core::{Cube, PuzzleState};
use puzzlecube_prefs::{FaceColors, Preferences, Rgb, RotationAnimation};
use puzzlecube_view::{CameraPose, RevolveCamera};
use serde::{Deserialize, Deserializer, Serialize};

/// Error reading or writing a saved game.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// File is not a JSON object.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted state of a game in progress.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SavedGame {
    /// Timer value in seconds.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,
    /// Number of moves made.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub moves: Option<u64>,
    /// Every cubie.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cubes: Option<Vec<SavedCube>>,
    /// Camera pose.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub camera: Option<SavedCamera>,
    /// Sticker colors, in the order bottom, top, back, front, left, right.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub colors: Option<[Rgb; 6]>,
    /// Rotation animation mode, as an ordinal.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rotation: Option<u8>,
}

/// Persisted state of one cubie.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SavedCube {
    /// Index in the fixed render geometry.
    pub index: usize,
    /// Lattice position.
    pub location: [i32; 3],
    /// Orientation as a column-major 4x4 matrix.
    pub rotation: [f32; 16],
}
impl From<&Cube> for SavedCube {
    fn from(cube: &Cube) -> Self {
        let LatticeVec { x, y, z } = cube.location;
        Self {
            index: cube.index,
            location: [x, y, z],
            rotation: matrix_to_floats(cube.rotation),
        }
    }
}
impl From<&SavedCube> for Cube {
    fn from(saved: &SavedCube) -> Self {
        let mut cube = Cube::new(saved.index, LatticeVec::from(saved.location));
        cube.rotation = matrix_from_floats(saved.rotation);
        cube.previous_rotation = cube.rotation;
        cube
    }
}

/// Persisted camera pose.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SavedCamera {
    /// Eye position.
    pub position: [f32; 3],
    /// View direction.
    pub direction: [f32; 3],
    /// Up vector.
    pub up: [f32; 3],
}
impl From<CameraPose> for SavedCamera {
    fn from(pose: CameraPose) -> Self {
        Self {
            position: pose.position.into(),
            direction: pose.direction.into(),
            up: pose.up.into(),
        }
    }
}
impl SavedCamera {
    /// Returns the pose, or `None` if any vector is unusable.
    pub fn to_pose(self) -> Option<CameraPose> {
        let position = Vector3::from(self.position);
        let direction = Vector3::from(self.direction);
        let up = Vector3::from(self.up);
        let usable = |v: Vector3<f32>| v.x.is_finite() && v.y.is_finite() && v.z.is_finite();
        let nonzero = |v: Vector3<f32>| v != Vector3::new(0.0, 0.0, 0.0);
        (usable(position) && usable(direction) && usable(up) && nonzero(direction) && nonzero(up))
            .then_some(CameraPose {
                position,
                direction,
                up,
            })
    }
}

impl SavedGame {
    /// Captures the state of a puzzle and its camera.
    pub fn capture(puzzle: &PuzzleState, camera: &RevolveCamera) -> Self {
        Self {
            seconds: Some(puzzle.seconds()),
            moves: Some(puzzle.moves()),
            cubes: Some(puzzle.cubes().iter().map(SavedCube::from).collect()),
            camera: Some(camera.pose().into()),
            colors: Some(puzzle.colors().to_list()),
            rotation: Some(puzzle.rotation_animation().ordinal()),
        }
    }

    /// Rebuilds a puzzle, falling back on `prefs` and fresh state for
    /// anything missing or invalid.
    ///
    /// Cubes are restored all together or not at all.
    pub fn restore(&self, prefs: &Preferences) -> PuzzleState {
        let mut puzzle = match &self.cubes {
            Some(cubes) => {
                match PuzzleState::with_cubes(prefs, cubes.iter().map(Cube::from)) {
                    Ok(puzzle) => puzzle,
                    Err(e) => {
                        log::warn!("discarding saved cubes: {e}");
                        PuzzleState::new(prefs)
                    }
                }
            }
            None => {
                log::warn!("saved game has no cubes; starting from solved");
                PuzzleState::new(prefs)
            }
        };

        if let Some(seconds) = self.seconds {
            puzzle.set_seconds(seconds);
        }
        if let Some(moves) = self.moves {
            puzzle.set_moves(moves);
        }
        if let Some(colors) = self.colors {
            puzzle.set_colors(FaceColors::from_list(colors));
        }
        match self.rotation.map(RotationAnimation::from_ordinal) {
            Some(Some(mode)) => puzzle.set_rotation_animation(mode),
            Some(None) => log::warn!("unknown rotation animation {:?}", self.rotation),
            None => (),
        }

        puzzle
    }

    /// Applies the saved camera pose, if there is a usable one.
    pub fn restore_camera(&self, camera: &mut RevolveCamera) {
        match self.camera.map(SavedCamera::to_pose) {
            Some(Some(pose)) => camera.set_pose(pose),
            Some(None) => log::warn!("discarding unusable saved camera"),
            None => (),
        }
    }

    /// Serializes the game to a JSON string.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }
    /// Deserializes a game from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Writes the game to a file.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::debug!("saved game to {}", path.display());
        Ok(())
    }
    /// Reads a game from a file.
    pub fn load(path: &Path) -> Result<Self, SaveError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

/// Deserializes a field, treating a malformed value the same as a missing
/// one.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            log::warn!("ignoring malformed saved field: {e}");
            Ok(None)
        }
    }
}

fn matrix_to_floats(m: Matrix4<f32>) -> [f32; 16] {
    let columns: [[f32; 4]; 4] = m.into();
    let mut ret = [0.0; 16];
    for (dst, src) in ret.iter_mut().zip(columns.iter().flatten()) {
        *dst = *src;
    }
    ret
}
fn matrix_from_floats(floats: [f32; 16]) -> Matrix4<f32> {
    let mut columns = [[0.0; 4]; 4];
    for (i, x) in floats.into_iter().enumerate() {
        columns[i / 4][i % 4] = x;
    }
    columns.into()
}
