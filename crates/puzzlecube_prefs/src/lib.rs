//! User preferences.
//!
//! Preferences are passed explicitly into the puzzle and the camera; nothing
//! in the core reads them from storage on its own.

#![allow(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};

mod animation;
mod colors;
mod interaction;

pub use animation::*;
pub use colors::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub colors: FaceColors,
    /// Number of random turns applied when starting a new game.
    pub scramble_length: usize,
}
impl Default for Preferences {
    fn default() -> Self {
        Self {
            animation: AnimationPreferences::default(),
            interaction: InteractionPreferences::default(),
            colors: FaceColors::default(),
            scramble_length: 20,
        }
    }
}
impl Preferences {
    /// Loads preferences from the YAML file at `path`, layered over the
    /// built-in defaults. If no path is given, the platform preferences file
    /// is used when it can be located.
    ///
    /// If the file exists but cannot be loaded, it is backed up and the
    /// default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let path = match path {
            Some(p) => Some(p),
            None => puzzlecube_paths::prefs_file()
                .inspect_err(|e| log::warn!("Error locating user preferences: {e}"))
                .ok(),
        };

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = path {
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                if let Some(path) = path {
                    puzzlecube_paths::move_to_backup_file(path);
                }
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences as YAML to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_yaml_matches_default_impl() {
        assert_eq!(*DEFAULT_PREFS, Preferences::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(
            &path,
            "animation:\n  rotation_animation: standard\ncolors:\n  top: \"#000000\"\n",
        )
        .unwrap();

        let prefs = Preferences::load(Some(&path));
        assert_eq!(prefs.animation.rotation_animation, RotationAnimation::Standard);
        assert_eq!(prefs.animation.rotation_duration, 0.4);
        assert_eq!(prefs.colors.top, Rgb::BLACK);
        assert_eq!(prefs.colors.front, Rgb::WHITE);
        assert_eq!(prefs.scramble_length, 20);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(Some(&dir.path().join("nope.yaml")));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");
        let mut prefs = Preferences::default();
        prefs.interaction.touch_sensitivity = 4.0;
        prefs.animation.rotation_animation = RotationAnimation::None;
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(Some(&path)), prefs);
    }
}
