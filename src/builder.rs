//! The crossword grid builder.
//!
//! Words are uppercased, sorted longest first, and placed one at a time by a recursive
//! backtracking search. For each word every legal (row, col, direction) is scored by how
//! many of its letters land on an identical letter already in the grid (its *crossings*);
//! candidates are tried best first, with the top few shuffled so repeated runs give
//! different layouts.
//!
//! # Fit rule
//!
//! A candidate fits when
//! - (a) the whole word lies inside the grid,
//! - (b) the cells just before the first and just after the last letter hold no letter,
//! - (c) every cell is empty or already holds the same letter, and that letter does not
//!   already belong to a word running in the same direction,
//! - (d) every non-crossing cell has no letter in its perpendicular neighbours
//!   (above/below for across words, left/right for down words),
//!
//! and it adds at least one new letter.
//!
//! # Randomness
//!
//! The random source is always an explicit parameter. With a seeded generator
//! ([`build_with_seed`]) the result is fully deterministic; unseeded front ends draw a
//! fresh seed per call ([`fresh_seed`]) so two worksheets from the same words usually
//! differ. That variation is intended.
//!
//! # Examples
//!
//! ```
//! use wordgrid::builder;
//!
//! let built = builder::build_with_seed(&["cat", "tiger", "rat"], 9, 7);
//! assert_eq!(built.placements[0].word, "TIGER");
//! assert!(built.grid.is_complete());
//! ```

use crate::grid::{Cell, Direction, Grid};
use crate::placement::Placement;
use crate::word_list::normalize_word;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// How many of the best-ranked candidates get shuffled per word.
pub const DEFAULT_SHUFFLE_WINDOW: usize = 3;

/// Tunables for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Number of top-ranked candidates shuffled before trying them (0 = never shuffle)
    pub shuffle_window: usize,
    /// Stop after trying this many placements; `None` searches exhaustively
    pub search_limit: Option<u64>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            shuffle_window: DEFAULT_SHUFFLE_WINDOW,
            search_limit: None,
        }
    }
}

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    /// Every word that fits the grid was placed.
    Complete,
    /// No full assignment exists; the deepest partial layout was kept.
    Exhausted,
    /// `search_limit` was hit; the deepest partial layout was kept.
    SearchLimitReached,
}

/// Output of the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltGrid {
    /// Letters and blocks only; no empty cells remain.
    pub grid: Grid,
    /// Successful placements, in placement order (longest word first).
    pub placements: Vec<Placement>,
    /// Normalized words that did not make it into the grid.
    pub unplaced: Vec<String>,
    pub status: BuildStatus,
    /// Placements tried during the search.
    pub nodes_visited: u64,
}

/// One legal position for a word, with its crossing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) direction: Direction,
    pub(crate) crossings: usize,
}

/// A normalized word and its letters.
#[derive(Debug, Clone)]
struct PreparedWord {
    text: String,
    letters: Vec<char>,
}

impl PreparedWord {
    fn new(text: String) -> Self {
        let letters = text.chars().collect();
        PreparedWord { text, letters }
    }
}

/// The grid under construction, plus which directions already run through each cell.
#[derive(Debug, Clone)]
pub(crate) struct Board {
    pub(crate) grid: Grid,
    covered: Vec<[bool; 2]>,
}

impl Board {
    pub(crate) fn new(size: usize) -> Self {
        Board {
            grid: Grid::new(size),
            covered: vec![[false; 2]; size * size],
        }
    }

    fn is_covered(&self, row: usize, col: usize, direction: Direction) -> bool {
        self.covered[row * self.grid.size() + col][direction.index()]
    }

    fn set_covered(&mut self, row: usize, col: usize, direction: Direction, value: bool) {
        let size = self.grid.size();
        self.covered[row * size + col][direction.index()] = value;
    }

    /// Crossing count if `letters` fits at (`row`, `col`) going `direction`, else `None`.
    pub(crate) fn evaluate(&self, letters: &[char], row: usize, col: usize, direction: Direction) -> Option<usize> {
        let len = letters.len();
        if len == 0 {
            return None;
        }
        let size = self.grid.size();
        let (dr, dc) = direction.delta();
        let end_row = row + (len - 1) * dr;
        let end_col = col + (len - 1) * dc;
        if end_row >= size || end_col >= size {
            return None;
        }

        // one step along the word, and one step across it
        let (step_r, step_c) = (dr as isize, dc as isize);
        let (side_r, side_c) = (step_c, step_r);

        if self.grid.letter_at_offset(row, col, -step_r, -step_c)
            || self.grid.letter_at_offset(end_row, end_col, step_r, step_c)
        {
            return None;
        }

        let mut crossings = 0;
        for (i, &ch) in letters.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            match self.grid.get(r, c)? {
                Cell::Empty => {
                    if self.grid.letter_at_offset(r, c, -side_r, -side_c)
                        || self.grid.letter_at_offset(r, c, side_r, side_c)
                    {
                        return None;
                    }
                }
                Cell::Letter(existing) if existing == ch && !self.is_covered(r, c, direction) => {
                    crossings += 1;
                }
                _ => return None,
            }
        }

        // a candidate made only of crossings would just retrace existing words
        (crossings < len).then_some(crossings)
    }

    #[cfg(test)]
    pub(crate) fn fits(&self, letters: &[char], row: usize, col: usize, direction: Direction) -> bool {
        self.evaluate(letters, row, col, direction).is_some()
    }

    /// Write a word; returns the cells that were empty before (the only ones to clear on undo).
    pub(crate) fn place(&mut self, letters: &[char], row: usize, col: usize, direction: Direction) -> Vec<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let mut written = Vec::with_capacity(letters.len());
        for (i, &ch) in letters.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            if self.grid.get(r, c) == Some(Cell::Empty) {
                self.grid.set(r, c, Cell::Letter(ch));
                written.push((r, c));
            }
            self.set_covered(r, c, direction, true);
        }
        written
    }

    /// Undo [`Board::place`]. Crossing cells keep their letter.
    pub(crate) fn unplace(&mut self, len: usize, row: usize, col: usize, direction: Direction, written: &[(usize, usize)]) {
        let (dr, dc) = direction.delta();
        for i in 0..len {
            self.set_covered(row + i * dr, col + i * dc, direction, false);
        }
        for &(r, c) in written {
            self.grid.set(r, c, Cell::Empty);
        }
    }
}

/// Every legal position for `letters`, best crossing count first, top `shuffle_window` shuffled.
///
/// Ties keep scan order (row, column, across before down).
pub(crate) fn rank_candidates<R: Rng + ?Sized>(
    board: &Board,
    letters: &[char],
    shuffle_window: usize,
    rng: &mut R,
) -> Vec<Candidate> {
    let size = board.grid.size();
    let mut candidates = Vec::new();
    for row in 0..size {
        for col in 0..size {
            for direction in Direction::ALL {
                if let Some(crossings) = board.evaluate(letters, row, col, direction) {
                    candidates.push(Candidate { row, col, direction, crossings });
                }
            }
        }
    }

    candidates.sort_by(|a, b| b.crossings.cmp(&a.crossings));
    let window = shuffle_window.min(candidates.len());
    candidates[..window].shuffle(rng);
    candidates
}

/// Positions through the grid centre (across, then down) for a first word that fits nowhere.
///
/// Adjacency is not checked. Positions that would leave the grid are dropped.
pub(crate) fn forced_center_candidates(size: usize, len: usize) -> Vec<Candidate> {
    let mid = size / 2;
    let start = mid.saturating_sub(len / 2);
    [
        (mid, start, Direction::Across),
        (start, mid, Direction::Down),
    ]
    .into_iter()
    .filter(|&(row, col, direction)| {
        let (dr, dc) = direction.delta();
        len > 0 && row + (len - 1) * dr < size && col + (len - 1) * dc < size
    })
    .map(|(row, col, direction)| Candidate { row, col, direction, crossings: 0 })
    .collect()
}

/// Read-only context for a `backtrack` call
struct SearchCtx<'a> {
    words: &'a [PreparedWord],
    options: BuildOptions,
}

/// Mutable bookkeeping shared by every level of the recursion
struct SearchState<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    /// Longest placement prefix seen so far
    best: Vec<Placement>,
    nodes: u64,
    limit_hit: bool,
}

impl<R: Rng + ?Sized> SearchState<'_, R> {
    fn limit_reached(&mut self, limit: Option<u64>) -> bool {
        if limit.is_some_and(|max| self.nodes >= max) {
            self.limit_hit = true;
        }
        self.limit_hit
    }
}

fn candidates_for<R: Rng + ?Sized>(k: usize, word: &PreparedWord, board: &Board, ctx: &SearchCtx, rng: &mut R) -> Vec<Candidate> {
    let ranked = rank_candidates(board, &word.letters, ctx.options.shuffle_window, rng);
    if ranked.is_empty() && k == 0 {
        debug!("no legal position for first word {}; forcing it through the centre", word.text);
        return forced_center_candidates(board.grid.size(), word.letters.len());
    }
    ranked
}

/// Place `ctx.words[k..]`; returns true once every word is placed.
///
/// On failure `board` and `placed` are restored to what they were on entry.
fn backtrack<R: Rng + ?Sized>(
    k: usize,
    board: &mut Board,
    placed: &mut Vec<Placement>,
    ctx: &SearchCtx,
    state: &mut SearchState<'_, R>,
) -> bool {
    debug_assert_eq!(placed.len(), k, "one placement per word already handled");

    let Some(word) = ctx.words.get(k) else {
        return true;
    };

    for cand in candidates_for(k, word, board, ctx, &mut *state.rng) {
        if state.limit_reached(ctx.options.search_limit) {
            return false;
        }
        state.nodes += 1;

        let written = board.place(&word.letters, cand.row, cand.col, cand.direction);
        placed.push(Placement::new(word.text.clone(), cand.row, cand.col, cand.direction));
        if placed.len() > state.best.len() {
            state.best.clone_from(placed);
        }

        if backtrack(k + 1, board, placed, ctx, state) {
            return true;
        }

        placed.pop();
        board.unplace(word.letters.len(), cand.row, cand.col, cand.direction, &written);

        if state.limit_hit {
            return false;
        }
    }

    false
}

/// Configurable entry point. [`build`] and [`build_with_seed`] cover the common cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builder {
    size: usize,
    options: BuildOptions,
}

impl Builder {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Builder {
            size,
            options: BuildOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn shuffle_window(mut self, window: usize) -> Self {
        self.options.shuffle_window = window;
        self
    }

    #[must_use]
    pub fn search_limit(mut self, limit: Option<u64>) -> Self {
        self.options.search_limit = limit;
        self
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Place `words` on a fresh grid using `rng` for tie-breaking.
    ///
    /// Never fails: words that cannot be placed are reported in [`BuiltGrid::unplaced`].
    pub fn build<S: AsRef<str>, R: Rng + ?Sized>(&self, words: &[S], rng: &mut R) -> BuiltGrid {
        let size = self.size;

        let mut prepared: Vec<PreparedWord> = words
            .iter()
            .map(|w| PreparedWord::new(normalize_word(w.as_ref())))
            .filter(|w| !w.letters.is_empty())
            .collect();
        // stable: equal lengths keep input order
        prepared.sort_by(|a, b| b.letters.len().cmp(&a.letters.len()));

        let (placeable, oversized): (Vec<PreparedWord>, Vec<PreparedWord>) =
            prepared.into_iter().partition(|w| w.letters.len() <= size);
        for w in &oversized {
            warn!("\"{}\" has {} letters and cannot fit a {size}x{size} grid; skipping it", w.text, w.letters.len());
        }

        let ctx = SearchCtx {
            words: &placeable,
            options: self.options,
        };
        let mut state = SearchState {
            rng,
            best: Vec::new(),
            nodes: 0,
            limit_hit: false,
        };
        let mut board = Board::new(size);
        let mut placed = Vec::with_capacity(placeable.len());

        let complete = backtrack(0, &mut board, &mut placed, &ctx, &mut state);

        let status = if complete {
            BuildStatus::Complete
        } else if state.limit_hit {
            BuildStatus::SearchLimitReached
        } else {
            BuildStatus::Exhausted
        };

        if !complete {
            // the recursion has undone everything; rebuild the deepest layout it reached
            board = Board::new(size);
            for p in &state.best {
                let letters: Vec<char> = p.word.chars().collect();
                board.place(&letters, p.row, p.col, p.direction);
            }
            placed = state.best;
        }

        let unplaced: Vec<String> = oversized
            .iter()
            .chain(&placeable[placed.len()..])
            .map(|w| w.text.clone())
            .collect();

        let mut grid = board.grid;
        grid.fill_empty_with_blocks();

        info!(
            "placed {}/{} words on a {size}x{size} grid ({status:?}, {} placements tried)",
            placed.len(),
            placed.len() + unplaced.len(),
            state.nodes
        );

        BuiltGrid {
            grid,
            placements: placed,
            unplaced,
            status,
            nodes_visited: state.nodes,
        }
    }
}

/// Build a crossword from `words` on a `size`×`size` grid.
pub fn build<S: AsRef<str>, R: Rng + ?Sized>(words: &[S], size: usize, rng: &mut R) -> BuiltGrid {
    Builder::new(size).build(words, rng)
}

/// [`build`] with a seeded generator: same inputs and seed, same grid.
pub fn build_with_seed<S: AsRef<str>>(words: &[S], size: usize, seed: u64) -> BuiltGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    build(words, size, &mut rng)
}

/// A new random seed for an unseeded build.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// A new random seed for an unseeded build.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn fresh_seed() -> u64 {
    // Math.random has 53 bits of precision
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
