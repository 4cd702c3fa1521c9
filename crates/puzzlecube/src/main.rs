//! 3x3x3 twisty puzzle simulator.
//!
//! Each invocation loads the saved game, applies one command, runs any
//! animation to completion, and saves the game again.

mod cli;
mod game;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    cli::exec(args)
}
