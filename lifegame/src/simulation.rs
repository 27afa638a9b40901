// simulation.rs - Generation-by-generation driver over a Grid
//
// Keeps exactly two grids: the current generation and the one before it.
// The second exists only so is_stable can detect a fixed point.

use std::mem;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;

/// Where a simulation is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Only the initial generation exists.
    Initialized,
    /// The last step changed at least one cell.
    Evolving,
    /// The last step changed nothing; every further step is identical.
    Stable,
}

/// Result of [`Simulation::run_until_stable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Steps taken during this run
    pub steps: u64,
    /// Whether the run ended on a fixed point
    pub stable: bool,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    /// Latest generation
    current: Grid,
    /// Generation before `current`, absent until the first step
    previous: Option<Grid>,
    /// 1-based generation number of `current`
    generation: u64,
    /// Pacing hint for the driver
    interval: Duration,
}

impl Simulation {
    /// Randomly seeded simulation.
    ///
    /// With `config.seed` set the first generation is reproducible; otherwise
    /// a generator is seeded once here from the thread RNG.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::with_rng(config, &mut config.rng())
    }

    /// Randomly seeded simulation drawing from a caller-owned generator.
    ///
    /// Only zero dimensions are an error. A survival rate outside `[0, 1]`
    /// is not checked and yields an all-dead or all-live first generation.
    pub fn with_rng<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Result<Self> {
        let grid = Grid::new(config.height, config.width)?.randomized(config.survival_rate, rng);
        debug!(
            height = config.height,
            width = config.width,
            survival_rate = config.survival_rate,
            population = grid.population(),
            "created simulation"
        );
        Ok(Self::from_grid(grid, config.interval))
    }

    /// Simulation starting from an explicit first generation.
    pub fn from_grid(grid: Grid, interval: Duration) -> Self {
        Self {
            current: grid,
            previous: None,
            generation: 1,
            interval,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Computes the next generation and retires the current one.
    pub fn advance(&mut self) {
        let next = self.current.step();
        self.previous = Some(mem::replace(&mut self.current, next));
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.current.population(),
            "advanced"
        );
    }

    /// True once a step has left the grid unchanged. Never true before the
    /// first step.
    pub fn is_stable(&self) -> bool {
        self.previous.as_ref() == Some(&self.current)
    }

    pub fn state(&self) -> SimulationState {
        match &self.previous {
            None => SimulationState::Initialized,
            Some(previous) if *previous == self.current => SimulationState::Stable,
            Some(_) => SimulationState::Evolving,
        }
    }

    /// Advances until a fixed point or until `limit` steps have been taken.
    pub fn run_until_stable(&mut self, limit: Option<u64>) -> RunOutcome {
        let mut steps = 0;
        while limit.is_none_or(|limit| steps < limit) {
            self.advance();
            steps += 1;
            if self.is_stable() {
                info!(generation = self.generation, steps, "reached a fixed point");
                return RunOutcome { steps, stable: true };
            }
        }
        RunOutcome { steps, stable: self.is_stable() }
    }
}
