use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::Context;
use libgame::Game;
use log::{debug, info};

use crate::renderer::Renderer;

pub mod sleeper;

pub use sleeper::{Pause, Sleeper};

/// Shared flag a Ctrl-C handler flips to end the run at the next frame boundary.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_rendered: usize,
    pub interrupted: bool,
    pub final_population: usize,
}

/// Renders `generation_count` frames, advancing the game and pausing after each one.
pub fn run<W>(
    game: &mut Game,
    generation_count: usize,
    renderer: &mut Renderer<W>,
    sleeper: &mut Sleeper,
) -> anyhow::Result<RunSummary>
where
    W: Write,
{
    let mut generations_rendered = 0;
    let mut interrupted = false;

    for _ in 0..generation_count {
        sleeper.start_frame();

        renderer
            .draw(game)
            .with_context(|| format!("Couldn't draw generation {}", game.generation))?;
        generations_rendered += 1;

        debug!(
            "Generation {}: population {}",
            game.generation,
            game.board.population()
        );

        game.tick();

        if !sleeper.in_time() {
            debug!("Generation {} took longer than the frame delay", game.generation);
        }

        if sleeper.sleep() == Pause::Interrupted {
            // A stop during the pause after the last frame cuts nothing short.
            interrupted = generations_rendered < generation_count;
            if interrupted {
                info!("Interrupted after {generations_rendered} generations");
            }
            break;
        }
    }

    Ok(RunSummary {
        generations_rendered,
        interrupted,
        final_population: game.board.population(),
    })
}
