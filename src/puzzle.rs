//! Puzzle pipeline: validate input, build a grid, number it.
//!
//! # Error Codes
//!
//! The pipeline uses [`PuzzleError`] with three variants:
//!
//! - P001: `ParseFailure` (Word list could not be parsed (wraps [`ParseError`]))
//! - P002: `InvalidGridSize` (Grid size outside the supported range)
//! - P003: `GridTooSmall` (A word is longer than the grid, strict mode only)
//!
//! # Examples
//!
//! ```
//! use wordgrid::puzzle::{generate_puzzle, PuzzleConfig};
//!
//! let words: Vec<String> = ["cat", "tiger", "rat"].iter().map(|w| w.to_string()).collect();
//! let config = PuzzleConfig { size: 9, seed: Some(7), ..PuzzleConfig::default() };
//! let puzzle = generate_puzzle(&words, &config).unwrap();
//! assert_eq!(puzzle.placements.len(), 3);
//! assert_eq!(puzzle.clues[0].number, 1);
//! ```

use crate::builder::{self, BuildStatus, Builder, DEFAULT_SHUFFLE_WINDOW};
use crate::errors::ParseError;
use crate::grid::Grid;
use crate::numbering::{self, Clue, Numbering};
use crate::placement::Placement;
use crate::word_list::{normalize_word, WordList};
use instant::Instant;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Largest grid the pipeline accepts. The search is exponential in the word count,
/// and worksheets never need more.
pub const MAX_GRID_SIZE: usize = 40;

/// Grid size used by the CLI and the web form when none is given.
pub const DEFAULT_GRID_SIZE: usize = 13;

/// Placements tried before the pipeline settles for the best partial grid.
///
/// [`Builder`] itself is unbounded; this cap keeps a crowded word list from hanging a
/// front end. Worksheet-sized inputs finish well under it.
pub const DEFAULT_SEARCH_LIMIT: u64 = 200_000;

/// Unified error type for the puzzle pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The word list could not be parsed or validated.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    #[error("grid size {size} is out of range (1-{max})", max = MAX_GRID_SIZE)]
    InvalidGridSize { size: usize },

    /// Strict mode only; otherwise the word is skipped and listed in `unplaced`.
    #[error("\"{word}\" has {len} letters but the grid is only {size}x{size}")]
    GridTooSmall { word: String, len: usize, size: usize },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::ParseFailure(_) => "P001",
            PuzzleError::InvalidGridSize { .. } => "P002",
            PuzzleError::GridTooSmall { .. } => "P003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::ParseFailure(_) => "Word list could not be parsed",
            PuzzleError::InvalidGridSize { .. } => "Grid size outside the supported range",
            PuzzleError::GridTooSmall { .. } => "A word is longer than the grid",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::ParseFailure(_) => "The word list could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            PuzzleError::InvalidGridSize { .. } => "Grids are square and must have between 1 and 40 cells per side. Larger grids make the backtracking search too slow to be useful.",
            PuzzleError::GridTooSmall { .. } => "In strict mode every word must fit on one row of the grid. Without --strict such words are left out of the puzzle and listed as unplaced.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidGridSize { .. } => Some("Typical worksheet grids are 9 to 20 cells wide. Example: --size 13"),
            PuzzleError::GridTooSmall { .. } => Some("Increase --size or drop --strict to skip words that do not fit"),
            PuzzleError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            PuzzleError::ParseFailure(pe) => {
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Knobs for [`generate_puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Cells per side.
    pub size: usize,
    /// `None` draws a fresh seed; the seed used is reported in [`Puzzle::seed`].
    pub seed: Option<u64>,
    pub shuffle_window: usize,
    /// Cap on placements tried; `None` searches exhaustively.
    /// Defaults to [`DEFAULT_SEARCH_LIMIT`].
    pub search_limit: Option<u64>,
    /// Reject words longer than `size` instead of skipping them.
    pub strict: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            size: DEFAULT_GRID_SIZE,
            seed: None,
            shuffle_window: DEFAULT_SHUFFLE_WINDOW,
            search_limit: Some(DEFAULT_SEARCH_LIMIT),
            strict: false,
        }
    }
}

/// A finished puzzle, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub size: usize,
    pub seed: u64,
    pub status: BuildStatus,
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub clues: Vec<Clue>,
    pub unplaced: Vec<String>,
    #[serde(skip)]
    pub numbering: Numbering,
}

impl Puzzle {
    /// True if every input word made it into the grid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Build and number a puzzle from already-split words.
///
/// # Errors
///
/// - [`PuzzleError::ParseFailure`] if a word is blank or contains a non-letter.
/// - [`PuzzleError::InvalidGridSize`] if `config.size` is 0 or above [`MAX_GRID_SIZE`].
/// - [`PuzzleError::GridTooSmall`] in strict mode when a word is longer than the grid.
pub fn generate_puzzle(words: &[String], config: &PuzzleConfig) -> Result<Puzzle, PuzzleError> {
    let size = config.size;
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(PuzzleError::InvalidGridSize { size });
    }

    let list = WordList::from_words(words)?;

    if config.strict {
        if let Some((word, len)) = list
            .words
            .iter()
            .map(|w| (w, normalize_word(w).chars().count()))
            .find(|&(_, len)| len > size)
        {
            return Err(PuzzleError::GridTooSmall { word: word.clone(), len, size });
        }
    }

    let seed = config.seed.unwrap_or_else(builder::fresh_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    debug!("building {} words on {size}x{size} with seed {seed}", list.len());

    let t_build = Instant::now();
    let built = Builder::new(size)
        .shuffle_window(config.shuffle_window)
        .search_limit(config.search_limit)
        .build(&list.words, &mut rng);
    debug!("build took {:.3}s", t_build.elapsed().as_secs_f64());

    let numbering = numbering::number(&built.grid, &built.placements);
    for clue in &numbering.clues {
        debug!("{}. {} ({}) at ({}, {})", clue.number, clue.word, clue.direction, clue.row, clue.col);
    }

    info!(
        "puzzle ready: {} clues, {} unplaced, seed {seed}",
        numbering.clues.len(),
        built.unplaced.len()
    );

    Ok(Puzzle {
        size,
        seed,
        status: built.status,
        grid: built.grid,
        placements: built.placements,
        clues: numbering.clues.clone(),
        unplaced: built.unplaced,
        numbering,
    })
}

/// Parse a comma/newline separated list and generate a puzzle from it.
///
/// # Errors
///
/// Same as [`generate_puzzle`], plus [`ParseError::EmptyWordList`] (wrapped) when the
/// text holds no words.
pub fn generate_puzzle_from_str(text: &str, config: &PuzzleConfig) -> Result<Puzzle, PuzzleError> {
    let list = WordList::parse_from_str(text)?.require_non_empty()?;
    generate_puzzle(&list.words, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn seeded(size: usize, seed: u64) -> PuzzleConfig {
        PuzzleConfig { size, seed: Some(seed), ..PuzzleConfig::default() }
    }

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();
        assert_eq!(config.size, 13);
        assert_eq!(config.shuffle_window, 3);
        assert!(config.seed.is_none());
        assert_eq!(config.search_limit, Some(DEFAULT_SEARCH_LIMIT));
        assert!(!config.strict);
    }

    #[test]
    fn test_generate_reports_seed() {
        let puzzle = generate_puzzle(&words(&["cat", "tiger", "rat"]), &seeded(9, 42)).unwrap();
        assert_eq!(puzzle.seed, 42);
        assert_eq!(puzzle.size, 9);
        assert!(puzzle.is_complete());
        assert_eq!(puzzle.status, BuildStatus::Complete);
        assert_eq!(puzzle.clues.len(), 3);
        assert_eq!(puzzle.clues, puzzle.numbering.clues);
    }

    #[test]
    fn test_unseeded_puzzle_is_reproducible_from_its_seed() {
        let list = words(&["kiškis", "lapė", "ežys", "vilkas"]);
        let first = generate_puzzle(&list, &PuzzleConfig { size: 9, ..PuzzleConfig::default() }).unwrap();
        let again = generate_puzzle(&list, &seeded(9, first.seed)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_invalid_grid_size() {
        for size in [0, MAX_GRID_SIZE + 1] {
            let err = generate_puzzle(&words(&["cat"]), &seeded(size, 1)).unwrap_err();
            assert!(matches!(err, PuzzleError::InvalidGridSize { size: s } if s == size));
            assert_eq!(err.code(), "P002");
        }
    }

    #[test]
    fn test_strict_rejects_long_word() {
        let config = PuzzleConfig { strict: true, ..seeded(4, 1) };
        let err = generate_puzzle(&words(&["cat", "giraffe"]), &config).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::GridTooSmall { ref word, len: 7, size: 4 } if word == "giraffe"
        ));
    }

    #[test]
    fn test_lenient_skips_long_word() {
        let puzzle = generate_puzzle(&words(&["cat", "giraffe"]), &seeded(4, 1)).unwrap();
        assert_eq!(puzzle.unplaced, vec!["GIRAFFE"]);
        assert_eq!(puzzle.placements.len(), 1);
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_parse_failure_wraps_parse_error() {
        let err = generate_puzzle(&words(&["cat", "d0g"]), &seeded(9, 1)).unwrap_err();
        assert_eq!(err.code(), "P001");
        let detailed = err.display_detailed();
        assert!(detailed.contains("P001"));
        assert!(detailed.contains("E002"));
    }

    #[test]
    fn test_from_str_requires_words() {
        let err = generate_puzzle_from_str(" , ", &seeded(9, 1)).unwrap_err();
        assert!(matches!(err, PuzzleError::ParseFailure(ref pe) if pe.code() == "E003"));
    }

    #[test]
    fn test_empty_list_gives_all_blocks() {
        let puzzle = generate_puzzle(&[], &seeded(5, 1)).unwrap();
        assert!(puzzle.placements.is_empty());
        assert!(puzzle.clues.is_empty());
        assert_eq!(puzzle.grid.letter_count(), 0);
        assert!(puzzle.grid.is_complete());
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errs = [
            PuzzleError::ParseFailure(Box::new(ParseError::EmptyWordList)),
            PuzzleError::InvalidGridSize { size: 0 },
            PuzzleError::GridTooSmall { word: "x".into(), len: 2, size: 1 },
        ];
        let codes: std::collections::HashSet<_> = errs.iter().map(PuzzleError::code).collect();
        assert_eq!(codes.len(), errs.len());
        assert!(errs[1].display_detailed().contains("--size"));
    }

    #[test]
    fn test_crowded_list_stops_at_search_limit() {
        // twenty words on a 9x9 grid: an exhaustive search would run for minutes
        let list = words(&[
            "horse", "otter", "camel", "zebra", "panda", "koala", "eagle", "raven", "tiger", "lion",
            "bear", "wolf", "frog", "duck", "goat", "hare", "mole", "seal", "toad", "owl",
        ]);
        let config = PuzzleConfig { search_limit: Some(20_000), ..seeded(9, 1) };
        let puzzle = generate_puzzle(&list, &config).unwrap();
        assert_eq!(puzzle.status, BuildStatus::SearchLimitReached);
        assert!(!puzzle.placements.is_empty());
        assert_eq!(puzzle.placements.len() + puzzle.unplaced.len(), list.len());
        assert_eq!(puzzle.clues.len(), puzzle.placements.len());
    }

    #[test]
    fn test_puzzle_serializes() {
        let puzzle = generate_puzzle(&words(&["a"]), &seeded(3, 5)).unwrap();
        let json = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(json["seed"], 5);
        assert_eq!(json["status"], "complete");
        assert_eq!(json["clues"][0]["number"], 1);
        // a one-letter word ties across and down; the seed picks the direction
        assert_eq!(json["clues"][0]["direction"], puzzle.placements[0].direction.tag());
        let (row, col) = (puzzle.placements[0].row, puzzle.placements[0].col);
        assert_eq!(json["grid"][row][col], "A");
        assert_eq!(json["grid"][(row + 1) % 3][col], "#");
        assert!(json.get("numbering").is_none());
    }
}
