// main.rs - Desktop viewer for Conway's Game of Life
// Drives a lifegame::Simulation; drawing lives in ui.rs

use eframe::egui;
use egui::Color32;
use lifegame::{Grid, PATTERNS, Simulation, SimulationConfig};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifegame=info,lifegame_gui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = match GameOfLife::new(SimulationConfig::default()) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create simulation: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

pub struct GameOfLife {
    simulation: Simulation,
    config: SimulationConfig,
    rng: Xoshiro256PlusPlus,  // Seeded once, reused for every reseed

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl GameOfLife {
    pub fn new(config: SimulationConfig) -> lifegame::Result<Self> {
        let mut rng = config.rng();
        let simulation = Simulation::with_rng(&config, &mut rng)?;

        Ok(Self {
            update_interval: simulation.interval(),
            simulation,
            config,
            rng,
            is_running: false,
            last_update: Instant::now(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.simulation.current()
    }

    pub fn generation(&self) -> u64 {
        self.simulation.generation()
    }

    pub fn is_stable(&self) -> bool {
        self.simulation.is_stable()
    }

    /// One generation; pauses once the field stops changing.
    pub fn update_generation(&mut self) {
        self.simulation.advance();
        if self.simulation.is_stable() {
            info!(generation = self.simulation.generation(), "field is stable, pausing");
            self.is_running = false;
        }
    }

    pub fn clear_grid(&mut self) {
        let (height, width) = self.dimensions();
        match Grid::new(height, width) {
            Ok(grid) => self.restart(grid),
            Err(e) => warn!("cannot clear field: {e}"),
        }
    }

    pub fn apply_random_pattern(&mut self) {
        let (height, width) = self.dimensions();
        match Grid::new(height, width) {
            Ok(grid) => {
                let grid = grid.randomized(self.config.survival_rate, &mut self.rng);
                self.restart(grid);
            }
            Err(e) => warn!("cannot reseed field: {e}"),
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let (height, width) = self.dimensions();
        match pattern.centered(height, width) {
            Ok(grid) => self.restart(grid),
            Err(e) => warn!("cannot apply pattern: {e}"),
        }
    }

    /// Editing a cell starts a new history from the edited field.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        match self.simulation.current().toggled(row, col) {
            Ok(grid) => self.restart(grid),
            Err(e) => debug!("ignoring click: {e}"),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        let grid = self.simulation.current();
        (grid.height(), grid.width())
    }

    fn restart(&mut self, grid: Grid) {
        self.simulation = Simulation::from_grid(grid, self.update_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GameOfLife {
        GameOfLife::new(SimulationConfig::new(8, 8, 0.0, Duration::ZERO).with_seed(1)).unwrap()
    }

    #[test]
    fn starts_from_config() {
        let app = app();
        assert_eq!((app.grid().height(), app.grid().width()), (8, 8));
        assert_eq!(app.grid().population(), 0);
        assert_eq!(app.generation(), 1);
        assert!(!app.is_running);
    }

    #[test]
    fn same_seed_gives_same_first_field() {
        let config = SimulationConfig::new(12, 12, 0.5, Duration::ZERO).with_seed(4);
        let a = GameOfLife::new(config.clone()).unwrap();
        let b = GameOfLife::new(config).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(GameOfLife::new(SimulationConfig::new(0, 0, 0.5, Duration::ZERO)).is_err());
    }

    #[test]
    fn pauses_when_stable() {
        let mut app = app();
        app.is_running = true;
        app.update_generation();
        assert!(app.is_stable());
        assert!(!app.is_running);
    }

    #[test]
    fn toggling_restarts_history() {
        let mut app = app();
        app.update_generation();
        app.toggle_cell(2, 3);
        assert!(app.grid().is_alive(2, 3));
        assert_eq!(app.generation(), 1);
        assert!(!app.is_stable());

        app.toggle_cell(99, 0);
        assert_eq!(app.grid().population(), 1);
    }

    #[test]
    fn patterns_and_clear() {
        let mut app = app();
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Glider").unwrap();
        app.apply_selected_pattern();
        assert_eq!(app.grid().population(), 5);

        app.clear_grid();
        assert_eq!(app.grid().population(), 0);
    }

    #[test]
    fn oversized_pattern_is_ignored() {
        let mut app = app();
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Pulsar").unwrap();
        app.apply_selected_pattern();
        assert_eq!(app.grid().population(), 0);
    }
}
