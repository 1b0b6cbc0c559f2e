use itertools::Itertools;

use super::{error::BoardError, pos::Position};

/// A named set of live cells, in absolute board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(2, 4), (3, 5), (4, 5), (4, 4), (4, 3)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLOCK,
    Pattern {
        name: "blinker",
        cells: &[(15, 16), (15, 17), (15, 18)],
    },
    Pattern {
        name: "toad",
        cells: &[(14, 17), (14, 18), (14, 19), (15, 16), (15, 17), (15, 18)],
    },
    Pattern {
        name: "beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(15, 17), (15, 18), (14, 18), (16, 17), (16, 16)],
    },
];

impl Pattern {
    pub fn by_name(name: &str) -> Result<&'static Pattern, BoardError> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| BoardError::UnknownPattern(name.to_owned()))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|pattern| pattern.name)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|&cell| Position::from(cell))
    }

    /// The pattern's cells shifted by the given amount; cells pushed below zero are dropped.
    pub fn translated(&self, row_delta: isize, col_delta: isize) -> Vec<Position> {
        self.positions()
            .filter_map(|pos| pos.offset(row_delta, col_delta))
            .collect_vec()
    }
}
