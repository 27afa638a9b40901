// driver.rs - The render-wait-advance loop

use std::future::Future;

use anyhow::{Context, Result};
use lifegame::Simulation;
use tracing::{debug, info};

use crate::presenter::Presenter;

#[derive(Debug, Clone, Default)]
pub struct DriveOptions {
    /// Last generation to show before giving up on reaching a fixed point
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A step left the field unchanged
    Stable,
    /// `max_generations` was reached
    GenerationLimit,
    /// The shutdown future resolved while waiting between frames
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveReport {
    /// Generation shown last
    pub generation: u64,
    pub reason: StopReason,
}

/// Shows generations until the simulation settles, the generation limit is
/// hit, or `shutdown` resolves. Stepping only happens between frames, so an
/// interrupt never leaves a half-computed generation behind.
pub async fn drive<P, F>(
    sim: &mut Simulation,
    presenter: &mut P,
    options: &DriveOptions,
    shutdown: F,
) -> Result<DriveReport>
where
    P: Presenter,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let lines = presenter
            .present(sim.generation(), sim.current())
            .context("failed to write frame")?;

        if sim.is_stable() {
            presenter.finish("Finish.").context("failed to write frame")?;
            info!(generation = sim.generation(), "field is stable");
            return Ok(report(sim, StopReason::Stable));
        }

        if options.max_generations.is_some_and(|max| sim.generation() >= max) {
            info!(generation = sim.generation(), "generation limit reached");
            return Ok(report(sim, StopReason::GenerationLimit));
        }

        tokio::select! {
            _ = tokio::time::sleep(sim.interval()) => {}
            _ = &mut shutdown => {
                debug!(generation = sim.generation(), "interrupted");
                return Ok(report(sim, StopReason::Interrupted));
            }
        }

        sim.advance();
        presenter.rewind(lines).context("failed to write frame")?;
    }
}

fn report(sim: &Simulation, reason: StopReason) -> DriveReport {
    DriveReport {
        generation: sim.generation(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;
    use std::time::Duration;

    use lifegame::{Glyphs, Grid};

    use crate::presenter::TerminalPresenter;

    fn sim(picture: &str, interval: Duration) -> Simulation {
        Simulation::from_grid(Grid::parse(picture, '#').unwrap(), interval)
    }

    #[tokio::test]
    async fn runs_until_stable() {
        let mut sim = sim("...\n.#.\n...", Duration::ZERO);
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, false);

        let report = drive(&mut sim, &mut presenter, &DriveOptions::default(), future::pending())
            .await
            .unwrap();

        assert_eq!(report, DriveReport { generation: 3, reason: StopReason::Stable });
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(
            text,
            "step 1\n□□□\n□■□\n□□□\n\
             step 2\n□□□\n□□□\n□□□\n\
             step 3\n□□□\n□□□\n□□□\n\
             Finish.\n"
        );
    }

    #[tokio::test]
    async fn redraw_rewinds_between_frames() {
        let mut sim = sim("##\n##", Duration::ZERO);
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, true);

        drive(&mut sim, &mut presenter, &DriveOptions::default(), future::pending())
            .await
            .unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text, "step 1\n■■\n■■\n\x1b[3Astep 2\n■■\n■■\nFinish.\n");
    }

    #[tokio::test]
    async fn stops_at_generation_limit() {
        let mut sim = sim(".....\n.....\n.###.\n.....\n.....", Duration::ZERO);
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, false);
        let options = DriveOptions { max_generations: Some(4) };

        let report = drive(&mut sim, &mut presenter, &options, future::pending()).await.unwrap();

        assert_eq!(report, DriveReport { generation: 4, reason: StopReason::GenerationLimit });
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text.matches("step").count(), 4);
        assert!(!text.contains("Finish."));
    }

    #[tokio::test]
    async fn shutdown_stops_at_a_generation_boundary() {
        let mut sim = sim(".....\n.....\n.###.\n.....\n.....", Duration::from_secs(3600));
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, true);

        let report = drive(&mut sim, &mut presenter, &DriveOptions::default(), future::ready(()))
            .await
            .unwrap();

        assert_eq!(report, DriveReport { generation: 1, reason: StopReason::Interrupted });
        assert!(sim.previous().is_none());
    }
}
