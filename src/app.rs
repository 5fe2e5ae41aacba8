use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimulationConfig;
use crate::render::Renderer;
use crate::simulation::{Board, History, Repeat};

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The board equals the previous generation
    FixedPoint,
    /// The board equals the generation two steps back
    PeriodTwo,
    /// The optional generation cap was reached before any repeat
    GenerationLimit,
}

impl From<Repeat> for Termination {
    fn from(repeat: Repeat) -> Self {
        match repeat {
            Repeat::FixedPoint => Termination::FixedPoint,
            Repeat::PeriodTwo => Termination::PeriodTwo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub generations: u64,
    pub termination: Termination,
}

/// Generation loop driver.
///
/// Owns the board and a renderer, and stops once the board repeats one of
/// the two preceding generations. Only period-1 and period-2 repeats are
/// detected: without a `max_generations` cap, patterns such as gliders run
/// forever.
pub struct Simulation<R: Renderer> {
    board: Board,
    history: History,
    generation: u64,
    max_generations: Option<u64>,
    renderer: R,
}

impl<R: Renderer> Simulation<R> {
    pub fn new(board: Board, renderer: R) -> Self {
        let history = History::new(&board);
        Self {
            board,
            history,
            generation: 0,
            max_generations: None,
            renderer,
        }
    }

    /// Build a random board from `config`, seeded if it names a seed
    pub fn from_config(config: &SimulationConfig, renderer: R) -> Self {
        let board = match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Board::with_rng(config.width, config.height, config.fill_probability, &mut rng)
            }
            None => Board::new(config.width, config.height, config.fill_probability),
        };

        let simulation = Self::new(board, renderer);
        match config.max_generations {
            Some(limit) => simulation.with_max_generations(limit),
            None => simulation,
        }
    }

    pub fn with_max_generations(mut self, limit: u64) -> Self {
        self.max_generations = Some(limit);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of completed generations
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Advance one generation, hand the snapshot to the renderer and check
    /// the history. Returns `Some` once the board repeats.
    pub fn step(&mut self) -> Option<Termination> {
        self.board.advance();
        self.generation += 1;

        let snapshot = self.board.snapshot();
        if let Err(e) = self.renderer.render(self.generation, &snapshot) {
            log::warn!("Render failed at generation {}: {}", self.generation, e);
        }

        if let Some(repeat) = self.history.check(&self.board) {
            return Some(repeat.into());
        }

        self.history.push(&self.board);
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.board.live_count()
        );
        None
    }

    /// Step until the board repeats or the cap, if any, is reached
    pub fn run(&mut self) -> RunOutcome {
        log::info!(
            "Starting simulation on {}x{} board with {} live cells",
            self.board.width(),
            self.board.height(),
            self.board.live_count()
        );

        let termination = loop {
            if let Some(limit) = self.max_generations {
                if self.generation >= limit {
                    break Termination::GenerationLimit;
                }
            }
            if let Some(termination) = self.step() {
                break termination;
            }
        };

        log::info!(
            "Simulation stopped after {} generations: {:?}",
            self.generation,
            termination
        );

        RunOutcome {
            generations: self.generation,
            termination,
        }
    }
}
