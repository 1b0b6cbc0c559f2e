use board::GameBoard;
use rule::Rule;

pub mod board;
pub mod error;
pub mod pattern;
pub mod pos;
pub mod rule;

/// Computes the generation following `board`.
///
/// The input is only read; every cell of the returned board is derived from the unmodified
/// input, so neighbor counts never see half-updated state.
pub fn next_generation(board: &GameBoard) -> GameBoard {
    let rule = Rule::CONWAY;

    let next_tiles = board
        .enumerate_tiles()
        .map(|(tile_pos, tile)| rule.next_state(*tile, board.count_alive_neighbors(tile_pos)))
        .collect();

    GameBoard::with_tiles(board.width, board.height, next_tiles)
}

/// The current board plus how many transitions produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub generation: usize,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.board = next_generation(&self.board);
        self.generation += 1;
    }
}
