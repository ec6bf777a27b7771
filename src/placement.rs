use crate::grid::Direction;
use serde::Serialize;

/// A word laid onto the grid: origin cell plus direction.
///
/// The occupied cells are the origin and `len - 1` further steps along
/// [`Direction::delta`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn new(word: impl Into<String>, row: usize, col: usize, direction: Direction) -> Self {
        Placement {
            word: word.into(),
            row,
            col,
            direction,
        }
    }

    /// Number of letters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// (row, col, letter) for every occupied cell, from the origin onward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = self.direction.delta();
        self.word
            .chars()
            .enumerate()
            .map(move |(i, ch)| (self.row + i * dr, self.col + i * dc, ch))
    }

    /// The last occupied cell.
    #[must_use]
    pub fn end(&self) -> (usize, usize) {
        let (dr, dc) = self.direction.delta();
        let steps = self.len().saturating_sub(1);
        (self.row + steps * dr, self.col + steps * dc)
    }

    /// True if every occupied cell lies in a `size`×`size` grid.
    #[must_use]
    pub fn fits_within(&self, size: usize) -> bool {
        let (end_row, end_col) = self.end();
        !self.is_empty() && end_row < size && end_col < size
    }
}
