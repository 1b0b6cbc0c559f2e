use crate::board::TileState;

/// Birth/survival neighbor counts of a totalistic life-like rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub birth: &'static [usize],
    pub survive: &'static [usize],
}

impl Rule {
    /// Conway's Life, B3/S23.
    pub const CONWAY: Rule = Rule {
        birth: &[3],
        survive: &[2, 3],
    };

    pub fn next_state(&self, tile: TileState, alive_neighbors: usize) -> TileState {
        let alive = match tile {
            TileState::Alive => self.survive.contains(&alive_neighbors),
            TileState::Dead => self.birth.contains(&alive_neighbors),
        };

        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
