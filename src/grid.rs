//! The square letter grid shared by the builder, the numberer and the renderers.
//!
//! Cells are stored row-major. During construction a cell is either [`Cell::Empty`]
//! or a [`Cell::Letter`]; once a build finishes every empty cell has been turned into
//! a [`Cell::Block`], so a finished grid only holds letters and blocks.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Character used for block cells in text output and JSON.
pub const BLOCK_CHAR: char = '#';
/// Character used for still-unassigned cells in debug output.
pub const EMPTY_CHAR: char = '.';

/// Word direction. `Across` runs left to right, `Down` runs top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Both directions, in the order candidates are enumerated.
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// (row-delta, column-delta) of one step along this direction.
    #[must_use]
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Tag used in clue lists ("across" / "down").
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Across => 0,
            Direction::Down => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Not assigned yet (only exists while a build is running)
    #[default]
    Empty,
    /// A single uppercase letter
    Letter(char),
    /// Filler; never part of a word
    Block,
}

impl Cell {
    #[must_use]
    pub fn is_letter(self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    #[must_use]
    pub fn is_block(self) -> bool {
        matches!(self, Cell::Block)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(c),
            _ => None,
        }
    }

    /// Single-character rendering: the letter, `#` for blocks, `.` for empty cells.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Letter(c) => c,
            Cell::Block => BLOCK_CHAR,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Letter(c) => serializer.serialize_char(*c),
            Cell::Block => serializer.serialize_char(BLOCK_CHAR),
        }
    }
}

/// An `N`×`N` matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid of `size`×`size` empty cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// The cell at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// The cell at a signed offset from (`row`, `col`), or `None` if that leaves the grid.
    #[must_use]
    pub fn get_offset(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Cell> {
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        self.get(r, c)
    }

    /// True if the offset cell is inside the grid and holds a letter.
    pub(crate) fn letter_at_offset(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> bool {
        self.get_offset(row, col, d_row, d_col).is_some_and(Cell::is_letter)
    }

    /// True if the cell is a block or lies outside the grid.
    #[must_use]
    pub fn is_block_or_outside(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> bool {
        self.get_offset(row, col, d_row, d_col).map_or(true, Cell::is_block)
    }

    /// Overwrite one cell.
    ///
    /// # Panics
    /// Panics if (`row`, `col`) is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) outside a {0}x{0} grid",
            self.size
        );
        self.cells[row * self.size + col] = cell;
    }

    /// Turn every remaining empty cell into a block.
    pub fn fill_empty_with_blocks(&mut self) {
        for cell in &mut self.cells {
            if cell.is_empty() {
                *cell = Cell::Block;
            }
        }
    }

    /// True once no empty cell remains.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_letter()).count()
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `chunks` panics on 0; a 0x0 grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Every (row, col, cell) in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / size, i % size, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
