//! Library crate for the maze-chase game.
//!
//! The simulation core lives in [`tile`], [`grid`], [`pathfinding`] and [`engine`]; everything
//! else is presentation and input glue around it.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The clap dependency is consumed by the binary crate."
)]

mod app;
mod engine;
mod events;
mod file_loader;
mod grid;
mod level;
mod pathfinding;
mod tile;
mod types;
mod ui;

pub use app::App;
