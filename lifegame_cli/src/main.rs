// main.rs - Conway's Game of Life in the terminal

use std::io;

use anyhow::Result;
use clap::Parser;
use lifegame_cli::{Cli, StopReason, TerminalPresenter, drive};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Frames go to stdout, diagnostics to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifegame=warn,lifegame_cli=warn,life=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut sim = cli.simulation()?;
    info!(
        height = cli.height,
        width = cli.width,
        population = sim.current().population(),
        "starting"
    );

    let mut presenter = TerminalPresenter::new(io::stdout(), cli.glyphs(), !cli.no_redraw);
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let report = drive(&mut sim, &mut presenter, &cli.drive_options(), shutdown).await?;
    if report.reason == StopReason::Interrupted {
        info!(generation = report.generation, "stopped by user");
    }
    Ok(())
}
