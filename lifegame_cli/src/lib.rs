// lib.rs - Terminal front end: argument parsing, frame output and the
// render-wait-advance loop around a lifegame::Simulation

pub mod args;
pub mod driver;
pub mod presenter;

pub use args::Cli;
pub use driver::{DriveOptions, DriveReport, StopReason, drive};
pub use presenter::{Presenter, TerminalPresenter};
