//! Clue numbering for a finished grid.
//!
//! Cells are scanned in row-major order. A non-block cell gets a number for each word
//! that starts there: one for an across word if the cell to its left is a block or the
//! edge, and (independently) one for a down word if the cell above is a block or the
//! edge. Both directions draw from one counter, so a cell starting two words gets two
//! consecutive numbers, across first.

use crate::grid::{Direction, Grid};
use crate::placement::Placement;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A numbered word start, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub number: u32,
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Result of [`number`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering {
    /// (row, col, direction) of each numbered start
    pub numbers: BTreeMap<(usize, usize, Direction), u32>,
    /// Sorted by number
    pub clues: Vec<Clue>,
}

impl Numbering {
    /// The numbers shown in a cell (0, 1 or 2; across first).
    #[must_use]
    pub fn numbers_at(&self, row: usize, col: usize) -> Vec<u32> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.numbers.get(&(row, col, d)).copied())
            .collect()
    }

    #[must_use]
    pub fn number_for(&self, row: usize, col: usize, direction: Direction) -> Option<u32> {
        self.numbers.get(&(row, col, direction)).copied()
    }

    pub fn across(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter().filter(|c| c.direction == Direction::Across)
    }

    pub fn down(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter().filter(|c| c.direction == Direction::Down)
    }
}

/// Number the word starts of `grid` given the builder's `placements`.
#[must_use]
pub fn number(grid: &Grid, placements: &[Placement]) -> Numbering {
    let start_to_word: HashMap<(usize, usize, Direction), &str> = placements
        .iter()
        .map(|p| ((p.row, p.col, p.direction), p.word.as_str()))
        .collect();

    let mut numbering = Numbering::default();
    let mut next: u32 = 1;

    for (row, col, cell) in grid.iter() {
        if cell.is_block() {
            continue;
        }
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            if !grid.is_block_or_outside(row, col, -(dr as isize), -(dc as isize)) {
                continue;
            }
            let Some(&word) = start_to_word.get(&(row, col, direction)) else {
                continue;
            };
            numbering.numbers.insert((row, col, direction), next);
            numbering.clues.push(Clue {
                number: next,
                word: word.to_string(),
                row,
                col,
                direction,
            });
            next += 1;
        }
    }

    // already in number order: numbers are handed out as clues are pushed
    debug_assert!(numbering.clues.windows(2).all(|w| w[0].number < w[1].number));
    numbering
}
