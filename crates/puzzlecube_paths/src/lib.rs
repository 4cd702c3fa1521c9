//! Locations of the files Puzzle Cube reads and writes.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

#[macro_use]
extern crate lazy_static;

/// Environment variable that, when set, overrides the directory holding every
/// file.
pub const DATA_DIR_ENV_VAR: &str = "PUZZLECUBE_DIR";

const PREFS_FILE_NAME: &str = "puzzlecube-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

const AUTOSAVE_FILE_NAME: &str = "puzzlecube-game";
const AUTOSAVE_FILE_EXTENSION: &str = "json";

lazy_static! {
    static ref PATHS: Option<AppPaths> = app_paths();
}

fn get() -> Result<&'static AppPaths> {
    PATHS.as_ref().ok_or_eyre("no paths")
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    Ok(&get()?.prefs_file)
}
/// Returns the file holding the game in progress.
pub fn autosave_file() -> Result<&'static Path> {
    Ok(&get()?.autosave_file)
}

/// Renames a file to create a backup. Emits a log message indicating success or
/// failure.
pub fn move_to_backup_file(original: &Path) {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let backup_path = backup_path(original, now);

    match std::fs::rename(original, &backup_path) {
        Ok(()) => {
            log::info!(
                "backup of {} stored at {}",
                original.display(),
                backup_path.display(),
            );
        }
        Err(e) => {
            if original.is_file() {
                log::error!("error backing up {}: {e}", original.display());
            }
        }
    }
}
fn backup_path(original: &Path, now: time::OffsetDateTime) -> PathBuf {
    let stem = original
        .file_stem()
        .map_or_else(|| "unknown".to_string(), |s| s.to_string_lossy().into_owned());
    let extension = original
        .extension()
        .map_or_else(|| "txt".to_string(), |s| s.to_string_lossy().into_owned());

    original.with_file_name(format!(
        "{stem}_{:04}-{:02}-{:02}_{:02}-{:02}-{:02}_bak.{extension}",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    ))
}

struct AppPaths {
    prefs_file: PathBuf,
    autosave_file: PathBuf,
}
impl AppPaths {
    fn in_dirs(config_dir: &Path, data_dir: &Path) -> Self {
        Self {
            prefs_file: config_dir.join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
            autosave_file: data_dir.join(format!("{AUTOSAVE_FILE_NAME}.{AUTOSAVE_FILE_EXTENSION}")),
        }
    }
}

/// Returns the app paths.
///
/// If [`DATA_DIR_ENV_VAR`] is set, every file lives directly in that
/// directory. Otherwise the system configuration and data directories are
/// used.
fn app_paths() -> Option<AppPaths> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV_VAR) {
        let dir = PathBuf::from(dir);
        log::info!("Using paths from {DATA_DIR_ENV_VAR}: {}", dir.display());
        return Some(AppPaths::in_dirs(&dir, &dir));
    }

    match ProjectDirs::from("com", "fivevsthree", "PuzzleCube") {
        Some(dirs) => {
            log::info!("Using system paths");
            Some(AppPaths::in_dirs(dirs.config_dir(), dirs.data_dir()))
        }
        None => {
            log::error!("Error getting system directories");
            None
        }
    }
}
