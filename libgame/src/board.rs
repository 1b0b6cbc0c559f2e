use std::collections::BTreeSet;

use itertools::Itertools;
use log::trace;

use super::{error::BoardError, pattern::Pattern, pos::Position};

/// Moore neighborhood offsets as `[row, col]`: orthogonal first, then diagonal.
pub const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [-1, 1],
    [1, -1],
    [1, 1],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = vec![TileState::default(); width * height];
        Self::with_tiles(width, height, tiles)
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    /// Everything outside the board counts as dead, negative coordinates included.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };

        self.tile(Position { row, col }) == Some(&TileState::Alive)
    }

    pub fn count_alive_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        // No board is taller or wider than isize::MAX, so such a cell has no live neighbors.
        let (Ok(row), Ok(col)) = (isize::try_from(pos.row), isize::try_from(pos.col)) else {
            return 0;
        };

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&[row_delta, col_delta]| {
                match (row.checked_add(row_delta), col.checked_add(col_delta)) {
                    (Some(row), Some(col)) => self.is_alive(row, col),
                    _ => false,
                }
            })
            .count()
    }

    pub fn fill_all_dead(&mut self) {
        self.tiles.fill(TileState::Dead);
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), BoardError> {
        trace!("Applying pattern {} to {}x{} board", pattern.name, self.height, self.width);
        self.apply_cells(pattern.positions())
    }

    /// Sets every given cell alive. Nothing is written unless all of them are on the board.
    pub fn apply_cells<I, P>(&mut self, cells: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let cells = cells.into_iter().map(Into::into).collect_vec();

        if let Some(outside) = cells.iter().find(|pos| self.pos_to_index(**pos).is_none()) {
            return Err(BoardError::OutOfBounds {
                row: outside.row,
                col: outside.col,
                width: self.width,
                height: self.height,
            });
        }

        for pos in cells {
            if let Some(tile) = self.tile_mut(pos) {
                *tile = TileState::Alive;
            }
        }

        Ok(())
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        // chunks() panics on zero.
        self.tiles.chunks(self.width.max(1))
    }

    pub fn alive_cells(&self) -> BTreeSet<Position> {
        self.enumerate_tiles()
            .filter(|(_, tile)| **tile == TileState::Alive)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn population(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| **tile == TileState::Alive)
            .count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if col >= self.width {
            return None;
        }

        if row >= self.height {
            return None;
        }

        Some(col + (row * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}
