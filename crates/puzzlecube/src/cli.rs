use std::path::PathBuf;

use cubemath::SignedAxis;
use eyre::Result;
use puzzlecube_core::LayerTwist;
use puzzlecube_prefs::Preferences;
use serde::Serialize;

use crate::game::Game;

/// Puzzle Cube command-line interface
///
/// Every command loads the saved game, applies the command, runs animations
/// to completion, and saves the game.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Saved game file. Defaults to the platform data directory.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
    /// Preferences file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Start a new game.
    New {
        /// Apply random turns first.
        #[arg(short, long)]
        scramble: bool,
    },
    /// Print the state of the game as JSON.
    Status,
    /// Turn one layer a quarter turn counterclockwise around an axis.
    Turn {
        /// Rotation axis.
        #[arg(value_enum)]
        axis: AxisArg,
        /// Layer along the axis: -1, 0, or 1.
        #[arg(allow_negative_numbers = true)]
        depth: i32,
    },
    /// Undo the most recent turn.
    Undo,
    /// Drag a pointer across the screen, as a touch gesture.
    Drag {
        #[arg(allow_negative_numbers = true)]
        x0: f32,
        #[arg(allow_negative_numbers = true)]
        y0: f32,
        #[arg(allow_negative_numbers = true)]
        x1: f32,
        #[arg(allow_negative_numbers = true)]
        y1: f32,
        /// Viewport width in pixels.
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        /// Viewport height in pixels.
        #[arg(long, default_value_t = 800.0)]
        height: f32,
        /// Number of intermediate pointer events.
        #[arg(long, default_value_t = 16)]
        steps: usize,
    },
    /// Orbit the camera as if dragging on the background.
    Revolve {
        #[arg(allow_negative_numbers = true)]
        dx: f32,
        #[arg(allow_negative_numbers = true)]
        dy: f32,
    },
    /// Play the explode effect.
    Explode,
}

/// Signed rotation axis.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum AxisArg {
    #[value(name = "x", alias = "+x")]
    PosX,
    #[value(name = "x'", alias = "nx")]
    NegX,
    #[value(name = "y", alias = "+y")]
    PosY,
    #[value(name = "y'", alias = "ny")]
    NegY,
    #[value(name = "z", alias = "+z")]
    PosZ,
    #[value(name = "z'", alias = "nz")]
    NegZ,
}
impl From<AxisArg> for SignedAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::PosX => SignedAxis::PosX,
            AxisArg::NegX => SignedAxis::NegX,
            AxisArg::PosY => SignedAxis::PosY,
            AxisArg::NegY => SignedAxis::NegY,
            AxisArg::PosZ => SignedAxis::PosZ,
            AxisArg::NegZ => SignedAxis::NegZ,
        }
    }
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let path = match args.file {
        Some(path) => path,
        None => puzzlecube_paths::autosave_file()?.to_owned(),
    };

    if let Subcommand::New { scramble } = args.subcommand {
        let game = Game::new(prefs, path, scramble);
        game.save()?;
        print_status(&game)?;
        return Ok(());
    }

    let mut game = Game::load(prefs, path);
    match args.subcommand {
        Subcommand::New { .. } => (),
        Subcommand::Status => {
            print_status(&game)?;
            return Ok(());
        }
        Subcommand::Turn { axis, depth } => {
            if !(-1..=1).contains(&depth) {
                eyre::bail!("depth must be -1, 0, or 1");
            }
            game.twist(LayerTwist::new(axis.into(), depth));
        }
        Subcommand::Undo => game.undo(),
        Subcommand::Drag {
            x0,
            y0,
            x1,
            y1,
            width,
            height,
            steps,
        } => {
            game.controller.camera_mut().set_viewport(width, height);
            game.drag((x0, y0), (x1, y1), steps);
        }
        Subcommand::Revolve { dx, dy } => game.controller.camera_mut().revolve(dx, dy),
        Subcommand::Explode => game.puzzle.explode(),
    }

    game.run();
    game.save()?;
    print_status(&game)
}

#[derive(Serialize, Debug)]
struct Status {
    file: String,
    solved: bool,
    moves: u64,
    seconds: i64,
    rotation_animation: String,
    camera_position: [f32; 3],
    /// Displayed face colors in saved-game order.
    colors: Vec<String>,
}

fn print_status(game: &Game) -> Result<()> {
    let status = Status {
        file: game.path().display().to_string(),
        solved: game.puzzle.is_solved(),
        moves: game.puzzle.moves(),
        seconds: game.puzzle.seconds(),
        rotation_animation: game.puzzle.rotation_animation().to_string(),
        camera_position: game.controller.camera().pose().position.into(),
        colors: game.puzzle.displayed_colors().to_list().map(|c| c.to_string()).to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
