//! This crate contains the source code for the binary for the maze-chase game.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::Result, install};
use mazebound::App;

/// Command line interface of the game binary.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory scanned for .maze level files.
    #[arg(short, long, default_value = ".")]
    levels: PathBuf,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();

    let mut terminal = ratatui::init();
    App::new(cli.levels).run(&mut terminal)?;
    ratatui::restore();

    Ok(())
}
