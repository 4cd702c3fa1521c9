use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use itertools::Itertools;
use puzzlecube_core::{LayerTwist, PuzzleEvent, PuzzleState};
use puzzlecube_log::SavedGame;
use puzzlecube_prefs::{Preferences, SolvedAnimation};
use puzzlecube_view::PuzzleController;
use web_time::Duration;

/// Simulation step used to run animations to completion.
const FRAME: Duration = Duration::from_nanos(16_666_667); // 60 Hz

/// Upper bound on simulated frames per command.
const MAX_FRAMES: usize = 60 * 60;

/// Puzzle, camera, and the file they are saved to.
pub(crate) struct Game {
    pub prefs: Preferences,
    pub puzzle: PuzzleState,
    pub controller: PuzzleController,
    path: PathBuf,
}
impl Game {
    /// Starts a new game, optionally scrambled.
    pub fn new(prefs: Preferences, path: PathBuf, scramble: bool) -> Self {
        let mut puzzle = PuzzleState::new(&prefs);
        if scramble {
            let twists = puzzle.scramble(prefs.scramble_length);
            log::info!("scrambled: {}", twists.iter().join(" "));
        }
        let controller = PuzzleController::new(&prefs.interaction);
        Self {
            prefs,
            puzzle,
            controller,
            path,
        }
    }

    /// Loads the game saved at `path`, or starts a new one if there is none.
    /// A file that cannot be parsed is backed up first.
    pub fn load(prefs: Preferences, path: PathBuf) -> Self {
        if !path.exists() {
            log::info!("no saved game at {}; starting a new one", path.display());
            return Self::new(prefs, path, false);
        }
        match SavedGame::load(&path) {
            Ok(saved) => {
                let puzzle = saved.restore(&prefs);
                let mut controller = PuzzleController::new(&prefs.interaction);
                saved.restore_camera(controller.camera_mut());
                Self {
                    prefs,
                    puzzle,
                    controller,
                    path,
                }
            }
            Err(e) => {
                log::warn!("error loading saved game from {}: {e}", path.display());
                puzzlecube_paths::move_to_backup_file(&path);
                Self::new(prefs, path, false)
            }
        }
    }

    /// Returns the file the game is saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the game to its file.
    pub fn save(&self) -> Result<()> {
        SavedGame::capture(&self.puzzle, self.controller.camera())
            .save(&self.path)
            .wrap_err_with(|| format!("error saving game to {}", self.path.display()))
    }

    /// Turns a layer with the preferred animation and undo enabled.
    pub fn twist(&mut self, twist: LayerTwist) {
        let duration = seconds(self.prefs.animation.rotation_duration);
        self.puzzle.rotate_layer_animation(twist.axis, twist.depth, duration, true);
    }

    /// Undoes the most recent turn.
    pub fn undo(&mut self) {
        if self.puzzle.is_rotations_empty() {
            log::info!("nothing to undo");
        }
        let duration = seconds(self.prefs.animation.undo_duration);
        self.puzzle.undo_rotation(duration);
    }

    /// Drags a pointer in a straight line across the viewport.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        let steps = steps.max(1);
        self.controller.press(from.0, from.1, 0);
        let mut last = from;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            if let Some(twist) = self.controller.drag(x, y, x - last.0, y - last.1) {
                self.twist(twist);
            }
            last = (x, y);
        }
        self.controller.release();
    }

    /// Runs animations until they finish, handling events as they arrive,
    /// and returns the number of frames simulated.
    ///
    /// Solving the puzzle starts a new game, after the explode effect if
    /// that is the preferred solved animation.
    pub fn run(&mut self) -> usize {
        let mut celebrating = false;
        for frame in 0.. {
            for event in self.puzzle.take_events() {
                log::info!("{event:?}");
                if event == (PuzzleEvent::RotationComplete { solved: true }) {
                    celebrating = true;
                }
            }
            if celebrating && !self.puzzle.is_animating() {
                let explode = self.prefs.animation.solved_animation == SolvedAnimation::Explode;
                if explode && self.puzzle.brightness() > 0.0 {
                    log::info!("solved in {} moves", self.puzzle.moves());
                    self.puzzle.explode();
                } else {
                    log::info!("starting a new game");
                    self.puzzle = PuzzleState::new(&self.prefs);
                    return frame;
                }
            }

            if !self.puzzle.is_animating() {
                return frame;
            }
            if frame >= MAX_FRAMES {
                log::warn!("animation still running after {frame} frames");
                return frame;
            }
            self.puzzle.tick(FRAME);
        }
        MAX_FRAMES
    }
}

fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use cubemath::SignedAxis;
    use pretty_assertions::assert_eq;

    use super::*;

    fn game_in(dir: &Path) -> Game {
        Game::load(Preferences::default(), dir.join("game.json"))
    }

    #[test]
    fn test_turn_undo_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        assert!(game.puzzle.is_solved());

        game.twist(LayerTwist::new(SignedAxis::PosX, 1));
        game.run();
        assert!(!game.puzzle.is_animating());
        assert!(!game.puzzle.is_solved());
        game.save().unwrap();

        let mut game = game_in(dir.path());
        assert!(!game.puzzle.is_solved());
        assert_eq!(game.puzzle.moves(), 1);

        // History is not persisted.
        game.undo();
        game.run();
        assert!(!game.puzzle.is_solved());

        for _ in 0..3 {
            game.twist(LayerTwist::new(SignedAxis::PosX, 1));
            game.run();
        }
        // Solving starts over.
        assert!(game.puzzle.is_solved());
        assert_eq!(game.puzzle.moves(), 0);
        assert_eq!(game.puzzle.brightness(), 1.0);
        assert!(!game.puzzle.is_exploding());
    }

    /// Turns the top layer four times, returning the frames simulated for
    /// each turn.
    fn solve_with(solved_animation: SolvedAnimation) -> (Game, Vec<usize>) {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::default();
        prefs.animation.solved_animation = solved_animation;
        let mut game = Game::new(prefs, dir.path().join("game.json"), false);
        let frames = (0..4)
            .map(|_| {
                game.twist(LayerTwist::new(SignedAxis::PosY, 1));
                game.run()
            })
            .collect();
        (game, frames)
    }

    #[test]
    fn test_no_solved_animation_starts_new_game_immediately() {
        let (game, frames) = solve_with(SolvedAnimation::NoAnimation);
        assert!(frames[0] > 0);
        assert_eq!(frames[3], frames[0]);
        assert!(game.puzzle.is_solved());
        assert_eq!(game.puzzle.moves(), 0);
        assert_eq!(game.puzzle.brightness(), 1.0);
    }

    #[test]
    fn test_explode_solved_animation_plays_before_new_game() {
        let (game, frames) = solve_with(SolvedAnimation::Explode);
        assert!(frames[3] > frames[0]);
        assert!(game.puzzle.is_solved());
        assert_eq!(game.puzzle.moves(), 0);
        assert_eq!(game.puzzle.brightness(), 1.0);
        assert!(!game.puzzle.is_exploding());
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, "not json").unwrap();

        let game = game_in(dir.path());
        assert!(game.puzzle.is_solved());
        assert!(!path.exists());
        let backups = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_drag_turns_front_face() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        game.controller.camera_mut().set_viewport(800.0, 800.0);
        // From the top right sticker of the front face to the top middle.
        game.drag((525.0, 275.0), (400.0, 275.0), 8);
        game.run();
        assert_eq!(game.puzzle.moves(), 1);
        assert!(!game.puzzle.is_solved());
    }

    #[test]
    fn test_drag_on_background_moves_camera() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = game_in(dir.path());
        game.controller.camera_mut().set_viewport(800.0, 800.0);
        let before = game.controller.camera().pose();
        game.drag((10.0, 10.0), (60.0, 10.0), 5);
        assert_eq!(game.puzzle.moves(), 0);
        assert_ne!(game.controller.camera().pose(), before);
    }
}
