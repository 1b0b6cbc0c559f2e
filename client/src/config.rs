use std::{fs, path::Path};

use anyhow::{bail, Context};
use libgame::{board::GameBoard, pattern::Pattern, pos::Position};
use serde::{Deserialize, Serialize};

use crate::{cli::Args, renderer::Glyphs};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub generation_count: usize, // Frames rendered before the run ends.
    pub delay_ms: u64,           // Pause between frames.
    pub grid_height: usize,
    pub grid_width: usize,
    pub seed_pattern: String,
    pub seed_cells: Vec<Position>, // Applied on top of the seed pattern.
    pub alive_glyph: String,
    pub dead_glyph: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_count: 100,
            delay_ms: 500,
            grid_height: 30,
            grid_width: 35,
            seed_pattern: "glider".to_owned(),
            seed_cells: Vec::new(),
            alive_glyph: "■".to_owned(),
            dead_glyph: ".".to_owned(),
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let config_serialized =
            fs::read(path).with_context(|| format!("Couldn't read config {}", path.display()))?;

        serde_json::from_slice(&config_serialized)
            .with_context(|| format!("Couldn't deserialize config {}", path.display()))
    }

    /// Defaults, then the config file if one was given, then individual flags.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_args(args);
        config.validate()?;

        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(generations) = args.generations {
            self.generation_count = generations;
        }
        if let Some(delay_ms) = args.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(pattern) = &args.pattern {
            self.seed_pattern = pattern.clone();
        }
        if let Some(height) = args.height {
            self.grid_height = height;
        }
        if let Some(width) = args.width {
            self.grid_width = width;
        }
        if let Some(alive_glyph) = &args.alive_glyph {
            self.alive_glyph = alive_glyph.clone();
        }
        if let Some(dead_glyph) = &args.dead_glyph {
            self.dead_glyph = dead_glyph.clone();
        }

        self.seed_cells.extend(args.cells.iter().copied());
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grid_height == 0 || self.grid_width == 0 {
            bail!(
                "Grid must not be empty, got {}x{}",
                self.grid_height,
                self.grid_width
            );
        }

        if self.grid_height.checked_mul(self.grid_width).is_none() {
            bail!(
                "Grid of {}x{} cells is too large",
                self.grid_height,
                self.grid_width
            );
        }

        if self.alive_glyph.is_empty() || self.dead_glyph.is_empty() {
            bail!("Glyphs must not be empty");
        }

        if self.alive_glyph == self.dead_glyph {
            bail!("Alive and dead glyphs must differ, both are {:?}", self.alive_glyph);
        }

        Pattern::by_name(&self.seed_pattern)?;

        Ok(())
    }

    /// An all-dead board of the configured size with the seed applied.
    pub fn seed_board(&self) -> anyhow::Result<GameBoard> {
        let mut board = GameBoard::new(self.grid_width, self.grid_height);
        board.fill_all_dead();

        let pattern = Pattern::by_name(&self.seed_pattern)?;
        board
            .apply_pattern(pattern)
            .with_context(|| format!("Pattern {} doesn't fit the board", pattern.name))?;

        board
            .apply_cells(self.seed_cells.iter().copied())
            .context("Seed cell doesn't fit the board")?;

        Ok(board)
    }

    pub fn glyphs(&self) -> Glyphs<'_> {
        Glyphs {
            alive: &self.alive_glyph,
            dead: &self.dead_glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let config = Config::default();

        assert_eq!(config.generation_count, 100);
        assert_eq!(config.delay_ms, 500);
        assert_eq!((config.grid_height, config.grid_width), (30, 35));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_seed_is_glider() {
        let board = Config::default().seed_board().unwrap();

        let expected: BTreeSet<Position> = [(2, 4), (3, 5), (4, 5), (4, 4), (4, 3)]
            .into_iter()
            .map(Position::from)
            .collect();

        assert_eq!((board.width, board.height), (35, 30));
        assert_eq!(board.alive_cells(), expected);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "delay_ms": 0, "seed_cells": [[0, 0], [1, 2]] }"#).unwrap();

        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.generation_count, 100);
        assert_eq!(config.seed_cells, vec![Position::new(0, 0), Position::new(1, 2)]);
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        let args = Args {
            generations: Some(3),
            pattern: Some("block".to_owned()),
            cells: vec![Position::new(9, 9)],
            ..Args::default()
        };

        config.apply_args(&args);

        assert_eq!(config.generation_count, 3);
        assert_eq!(config.seed_pattern, "block");
        assert_eq!(config.delay_ms, 500);
        assert_eq!(config.seed_board().unwrap().population(), 5);
    }

    #[test]
    fn rejects_bad_configs() {
        let empty = Config {
            grid_width: 0,
            ..Config::default()
        };
        let same_glyphs = Config {
            dead_glyph: "■".to_owned(),
            ..Config::default()
        };
        let unknown_pattern = Config {
            seed_pattern: "spaceship".to_owned(),
            ..Config::default()
        };

        let overflowing = Config {
            grid_height: usize::MAX / 2,
            grid_width: 3,
            ..Config::default()
        };

        assert!(empty.validate().is_err());
        assert!(overflowing.validate().is_err());
        assert!(same_glyphs.validate().is_err());
        assert!(unknown_pattern.validate().is_err());
    }

    #[test]
    fn seed_outside_small_board_fails() {
        let config = Config {
            grid_height: 4,
            grid_width: 4,
            ..Config::default()
        };

        assert!(config.validate().is_ok());
        assert!(config.seed_board().is_err());
    }
}
