use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libgame::pos::Position;

/// Runs Conway's Game of Life in the terminal.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of generations to render
    #[arg(short = 'n', long)]
    pub generations: Option<usize>,

    /// Pause between frames in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// Seed pattern name (see --list-patterns)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Extra live cell as ROW,COL; may be repeated
    #[arg(long = "cell", value_parser = parse_cell)]
    pub cells: Vec<Position>,

    #[arg(long)]
    pub height: Option<usize>,

    #[arg(long)]
    pub width: Option<usize>,

    #[arg(long)]
    pub alive_glyph: Option<String>,

    #[arg(long)]
    pub dead_glyph: Option<String>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Print the available seed patterns and exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Don't color the generation header
    #[arg(long)]
    pub no_color: bool,
}

fn parse_cell(value: &str) -> anyhow::Result<Position> {
    let (row, col) = value
        .split_once(',')
        .context("expected ROW,COL")?;

    let row = row.trim().parse::<usize>().context("invalid row")?;
    let col = col.trim().parse::<usize>().context("invalid column")?;

    Ok(Position { row, col })
}
