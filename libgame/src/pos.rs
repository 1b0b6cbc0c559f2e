use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, `row` counted from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts the position, or returns `None` if it would leave the non-negative quadrant.
    pub fn offset(self, row_delta: isize, col_delta: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_delta)?,
            col: self.col.checked_add_signed(col_delta)?,
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_zero() {
        let pos = Position::new(0, 3);

        assert_eq!(pos.offset(0, -1), Some(Position::new(0, 2)));
        assert_eq!(pos.offset(-1, 0), None);
        assert_eq!(pos.offset(1, -4), None);
    }

    #[test]
    fn converts_from_arrays_and_tuples() {
        assert_eq!(Position::from([2, 4]), Position::new(2, 4));
        assert_eq!(Position::from((4, 3)), Position::new(4, 3));
        assert_eq!(<[usize; 2]>::from(Position::new(7, 1)), [7, 1]);
    }
}
