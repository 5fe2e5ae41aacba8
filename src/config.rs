/// Default board dimensions (10x10)
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Probability of each cell starting alive
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// Extent used by `Board::default_region` on both axes
pub const DEFAULT_REGION_EXTENT: usize = 10;

// ============================================
// ASCII Rendering
// ============================================

/// Glyph drawn for a live cell
pub const ALIVE_GLYPH: char = '#';

/// Glyph drawn for a dead cell
pub const DEAD_GLYPH: char = '.';

/// Parameters for a single simulation run.
///
/// `max_generations` is an opt-in safety cap. Left at `None`, the run only
/// stops on a fixed point or a period-2 oscillation, so gliders and other
/// longer-period patterns keep it going forever.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub fill_probability: f64,
    /// Seed for a reproducible initial board; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub max_generations: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            seed: None,
            max_generations: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(width: usize, height: usize, fill_probability: f64) -> Self {
        Self {
            width,
            height,
            fill_probability,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_generations(mut self, limit: u64) -> Self {
        self.max_generations = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
        assert_eq!(config.fill_probability, 0.5);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_generations, None, "No cap unless asked for");
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new(20, 30, 0.25)
            .with_seed(7)
            .with_max_generations(100);
        assert_eq!((config.width, config.height), (20, 30));
        assert_eq!(config.fill_probability, 0.25);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_generations, Some(100));
    }
}
