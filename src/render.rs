//! Plain-text rendering of a [`Puzzle`].
//!
//! Every cell is printed as a fixed-width token so columns line up in a terminal or a
//! monospace print-out:
//!
//! ```text
//!  1/2   _   _   #
//!    _   #   3   _
//! ```
//!
//! Start cells carry their clue numbers (across first, joined with `/`). Blocks are
//! filled with `#`. In the answer grid the letter follows the numbers.

use crate::grid::{Cell, Direction, BLOCK_CHAR};
use crate::numbering::Clue;
use crate::puzzle::Puzzle;
use std::fmt::Write;

/// Which variant of the grid to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Numbers only; letter cells are blank for the pupil to fill in.
    #[default]
    Blank,
    /// Numbers plus the letters.
    Answers,
}

const BLANK_CELL: &str = "_";

fn cell_label(puzzle: &Puzzle, row: usize, col: usize, cell: Cell, mode: RenderMode) -> String {
    let Some(letter) = cell.letter() else {
        return String::new();
    };
    let tags = puzzle
        .numbering
        .numbers_at(row, col)
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("/");
    match mode {
        RenderMode::Blank if tags.is_empty() => BLANK_CELL.to_string(),
        RenderMode::Blank => tags,
        RenderMode::Answers => format!("{tags}{letter}"),
    }
}

/// The grid as text, one line per row.
#[must_use]
pub fn render_grid(puzzle: &Puzzle, mode: RenderMode) -> String {
    let labels: Vec<(Cell, String)> = puzzle
        .grid
        .iter()
        .map(|(row, col, cell)| (cell, cell_label(puzzle, row, col, cell, mode)))
        .collect();
    let width = labels
        .iter()
        .map(|(_, label)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let block: String = std::iter::repeat(BLOCK_CHAR).take(width).collect();

    let mut out = String::new();
    for row in labels.chunks(puzzle.size.max(1)) {
        let line = row
            .iter()
            .map(|(cell, label)| {
                if cell.is_block() {
                    block.clone()
                } else {
                    format!("{label:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// One clue line: number, word and letter count.
#[must_use]
pub fn clue_line(clue: &Clue) -> String {
    format!("{:>3}. {} ({})", clue.number, clue.word, clue.word.chars().count())
}

/// The clue list, grouped under "Across" and "Down" headings.
///
/// The word stands in for its picture clue. Empty groups are left out.
#[must_use]
pub fn render_clues(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    for direction in Direction::ALL {
        let clues: Vec<&Clue> = puzzle.clues.iter().filter(|c| c.direction == direction).collect();
        if clues.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let heading = match direction {
            Direction::Across => "Across",
            Direction::Down => "Down",
        };
        // writing into a String cannot fail
        let _ = writeln!(out, "{heading}");
        for clue in clues {
            let _ = writeln!(out, "{}", clue_line(clue));
        }
    }
    out
}

/// Grid followed by the clue list and, if any, the words that did not fit.
#[must_use]
pub fn render_worksheet(puzzle: &Puzzle, mode: RenderMode) -> String {
    let mut out = render_grid(puzzle, mode);
    let clues = render_clues(puzzle);
    if !clues.is_empty() {
        out.push('\n');
        out.push_str(&clues);
    }
    if !puzzle.unplaced.is_empty() {
        let _ = write!(out, "\nNot placed: {}\n", puzzle.unplaced.join(", "));
    }
    out
}
