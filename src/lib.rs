//! Conway's Game of Life on a fixed-size toroidal board.
//!
//! [`Board`] holds the cells and computes one generation at a time;
//! [`Simulation`] drives it until the board settles into a fixed point or a
//! period-2 oscillation, handing a snapshot to a [`Renderer`] after every
//! generation.

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod simulation;

pub use app::{RunOutcome, Simulation, Termination};
pub use config::SimulationConfig;
pub use error::{GameError, Result};
pub use render::{AsciiRenderer, NullRenderer, Renderer};
pub use simulation::{Board, Cell, Region};

/// Run a random board of the given size to completion, printing each
/// generation to stdout.
///
/// Use [`config::DEFAULT_WIDTH`], [`config::DEFAULT_HEIGHT`] and
/// [`config::DEFAULT_FILL_PROBABILITY`] for the standard 10x10, half-full
/// board. There is no generation cap, so this may not return.
pub fn run_simulation(width: usize, height: usize, fill_probability: f64) -> RunOutcome {
    let config = SimulationConfig::new(width, height, fill_probability);
    run_with(&config, AsciiRenderer::stdout())
}

/// Run a board built from `config`, sending snapshots to `renderer`
pub fn run_with<R: Renderer>(config: &SimulationConfig, renderer: R) -> RunOutcome {
    Simulation::from_config(config, renderer).run()
}
