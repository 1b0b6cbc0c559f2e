use std::{io, time::Duration};

use anyhow::Context;
use clap::Parser;
use cli::Args;
use config::Config;
use libgame::{pattern::Pattern, Game};
use log::info;
use renderer::Renderer;
use ticker::{Sleeper, StopSignal};

mod cli;
mod config;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_patterns {
        for name in Pattern::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = Config::from_args(&args)?;

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let stop_signal = StopSignal::new();
    let handler_signal = stop_signal.clone();
    ctrlc::set_handler(move || handler_signal.stop())
        .context("Couldn't install Ctrl-C handler")?;

    let mut game = Game::new(config.seed_board()?);

    info!(
        "Running {} generations of {} on a {}x{} board, {} ms apart",
        config.generation_count,
        config.seed_pattern,
        config.grid_height,
        config.grid_width,
        config.delay_ms
    );

    let stdout = io::stdout().lock();
    let mut renderer = Renderer::new(stdout, config.glyphs(), !args.no_color);
    let mut sleeper = Sleeper::new(Duration::from_millis(config.delay_ms), stop_signal);

    let summary = ticker::run(&mut game, config.generation_count, &mut renderer, &mut sleeper)?;

    info!(
        "Rendered {} generations, final population {}{}",
        summary.generations_rendered,
        summary.final_population,
        if summary.interrupted { " (interrupted)" } else { "" }
    );

    Ok(())
}
