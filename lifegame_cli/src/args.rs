// args.rs - Command-line arguments

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lifegame::{Glyphs, Pattern, Simulation, SimulationConfig};

use crate::driver::DriveOptions;

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(version, about = "Conway's Game of Life in the terminal", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Field height
    #[arg(value_parser = parse_dimension)]
    pub height: usize,

    /// Field width
    #[arg(value_parser = parse_dimension)]
    pub width: usize,

    /// Percentage of surviving cells of the first generation (0.0 to 1.0)
    #[arg(value_parser = parse_rate)]
    pub init_rate: f64,

    /// Time to evolve to the next generation, in seconds
    #[arg(value_parser = parse_interval)]
    pub interval: Duration,

    /// Random seed for a reproducible first generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of random cells (init_rate is ignored)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Stop after this many generations even if the field keeps changing
    #[arg(long)]
    pub max_generations: Option<u64>,

    /// Print every generation below the last instead of redrawing in place
    #[arg(long)]
    pub no_redraw: bool,

    /// Draw dead cells as blanks
    #[arg(long)]
    pub sparse: bool,
}

impl Cli {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            height: self.height,
            width: self.width,
            survival_rate: self.init_rate,
            interval: self.interval,
            seed: self.seed,
        }
    }

    pub fn simulation(&self) -> Result<Simulation> {
        let config = self.config();
        config.validate().context("invalid field parameters")?;
        match &self.pattern {
            Some(name) => {
                let pattern = Pattern::find(name)?;
                let grid = pattern
                    .centered(config.height, config.width)
                    .with_context(|| format!("cannot place pattern '{}'", pattern.name))?;
                Ok(Simulation::from_grid(grid, config.interval))
            }
            None => Simulation::from_config(&config).context("failed to create simulation"),
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        if self.sparse { Glyphs::SPARSE } else { Glyphs::SQUARES }
    }

    pub fn drive_options(&self) -> DriveOptions {
        DriveOptions {
            max_generations: self.max_generations,
        }
    }
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{e}"))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} is not between 0.0 and 1.0"));
    }
    Ok(value)
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("{s} is not a non-negative number of seconds"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("life").chain(args.iter().copied()))
    }

    #[test]
    fn positional_arguments() {
        let cli = parse(&["20", "40", "0.3", "0.5"]).unwrap();
        assert_eq!((cli.height, cli.width), (20, 40));
        assert_eq!(cli.init_rate, 0.3);
        assert_eq!(cli.interval, Duration::from_millis(500));
        assert!(cli.pattern.is_none());
        assert!(!cli.no_redraw);
    }

    #[test]
    fn whole_second_interval() {
        let cli = parse(&["5", "5", "0.5", "2"]).unwrap();
        assert_eq!(cli.config().interval, Duration::from_secs(2));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(parse(&["0", "5", "0.5", "1"]).is_err());
        assert!(parse(&["5", "-1", "0.5", "1"]).is_err());
        assert!(parse(&["5", "5", "1.2", "1"]).is_err());
        assert!(parse(&["5", "5", "0.5", "-1"]).is_err());
        assert!(parse(&["5", "5", "0.5"]).is_err());
    }

    #[test]
    fn options() {
        let cli = parse(&[
            "9", "9", "0", "0", "--seed", "7", "--pattern", "glider", "--max-generations", "12",
            "--no-redraw", "--sparse",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.pattern.as_deref(), Some("glider"));
        assert_eq!(cli.drive_options().max_generations, Some(12));
        assert!(cli.no_redraw);
        assert_eq!(cli.glyphs(), Glyphs::SPARSE);
    }

    #[test]
    fn pattern_simulation() {
        let cli = parse(&["4", "4", "0", "0", "--pattern", "block"]).unwrap();
        let sim = cli.simulation().unwrap();
        assert_eq!(sim.current().population(), 4);

        let cli = parse(&["3", "3", "0", "0", "--pattern", "pulsar"]).unwrap();
        assert!(cli.simulation().is_err());

        let cli = parse(&["9", "9", "0", "0", "--pattern", "nope"]).unwrap();
        assert!(cli.simulation().is_err());
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let cli = parse(&["10", "10", "0.5", "0", "--seed", "3"]).unwrap();
        assert_eq!(cli.simulation().unwrap().current(), cli.simulation().unwrap().current());
    }
}
