// lib.rs - Conway's Game of Life on a bounded grid
//
// A Simulation owns the current Grid and the one before it, steps the
// population with the standard B3/S23 rule and reports when a step no
// longer changes anything.

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use grid::{Glyphs, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use simulation::{RunOutcome, Simulation, SimulationState};
