//! Integration tests for the wordgrid crossword generator.
//!
//! These tests drive the public API end to end (word list → builder → numbering →
//! rendering) and check the structural guarantees of every generated grid over many
//! seeds and word sets.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use wordgrid::builder::{self, BuildStatus, BuiltGrid, Builder};
use wordgrid::grid::{Cell, Direction, Grid};
use wordgrid::numbering::{self, Numbering};
use wordgrid::puzzle::{generate_puzzle, generate_puzzle_from_str, PuzzleConfig, PuzzleError};
use wordgrid::render::{self, RenderMode};
use wordgrid::word_list::WordList;

const POOL: &[&str] = &[
    "cat", "tiger", "rat", "owl", "ant", "bee", "eel", "emu", "yak", "ox",
    "lion", "bear", "wolf", "frog", "duck", "goat", "hare", "mole", "seal", "toad",
    "horse", "otter", "camel", "zebra", "panda", "koala", "eagle", "raven",
    "kiškis", "lapė", "ežys", "vilkas", "meška", "šernas",
];

/// Helper to convert a `&[&str]` to owned strings
fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Pick `n` distinct words from the pool
fn random_words(rng: &mut StdRng, n: usize) -> Vec<&'static str> {
    POOL.choose_multiple(rng, n).copied().collect()
}

/// Every structural property a finished build must have
fn assert_well_formed(built: &BuiltGrid, size: usize) {
    let grid = &built.grid;
    assert_eq!(grid.size(), size);

    // completeness
    assert!(grid.is_complete(), "empty cell left in\n{grid}");

    let mut covered: HashSet<(usize, usize)> = HashSet::new();
    for p in &built.placements {
        // boundary containment
        assert!(p.fits_within(size), "{p:?} leaves the {size}x{size} grid");

        // no contradictions: every letter is what the grid holds
        for (r, c, ch) in p.cells() {
            assert_eq!(grid.get(r, c), Some(Cell::Letter(ch)), "{p:?} disagrees with the grid at ({r}, {c})");
            covered.insert((r, c));
        }

        // no accidental concatenation
        let (dr, dc) = p.direction.delta();
        let (end_r, end_c) = p.end();
        assert!(grid.is_block_or_outside(p.row, p.col, -(dr as isize), -(dc as isize)), "{p:?} extends backwards\n{grid}");
        assert!(grid.is_block_or_outside(end_r, end_c, dr as isize, dc as isize), "{p:?} extends forwards\n{grid}");
    }

    // every letter belongs to some word
    assert_eq!(covered.len(), grid.letter_count());

    assert_adjacent_letters_share_a_word(built);
}

/// Two letters side by side (or stacked) must be consecutive letters of one placement
/// running in that direction; otherwise the grid spells a word nobody placed.
fn assert_adjacent_letters_share_a_word(built: &BuiltGrid) {
    let grid = &built.grid;
    let mut pairs: HashSet<((usize, usize), (usize, usize))> = HashSet::new();
    for p in &built.placements {
        let cells: Vec<(usize, usize)> = p.cells().map(|(r, c, _)| (r, c)).collect();
        for w in cells.windows(2) {
            pairs.insert((w[0], w[1]));
        }
    }
    for (r, c, cell) in grid.iter() {
        if !cell.is_letter() {
            continue;
        }
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            let next = (r + dr, c + dc);
            if grid.get(next.0, next.1).is_some_and(Cell::is_letter) {
                assert!(pairs.contains(&((r, c), next)), "stray {d} pair at ({r}, {c})\n{grid}");
            }
        }
    }
}

fn assert_numbering_consistent(grid: &Grid, built: &BuiltGrid, numbering: &Numbering) {
    // one clue per placement, numbered 1..=n
    assert_eq!(numbering.clues.len(), built.placements.len());
    for (i, clue) in numbering.clues.iter().enumerate() {
        assert_eq!(clue.number as usize, i + 1);
    }

    // strictly increasing in scan order of the origin cell (across before down)
    let keys: Vec<(usize, usize, Direction)> = numbering.clues.iter().map(|c| (c.row, c.col, c.direction)).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "{keys:?}");

    // exactly one number per distinct start
    let starts: HashSet<(usize, usize, Direction)> = built.placements.iter().map(|p| (p.row, p.col, p.direction)).collect();
    assert_eq!(starts.len(), numbering.numbers.len());
    for key in &starts {
        assert!(numbering.numbers.contains_key(key));
    }

    // numbered cells hold letters
    for &(r, c, _) in numbering.numbers.keys() {
        assert!(grid.get(r, c).is_some_and(Cell::is_letter));
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_cat_tiger_rat() {
        for seed in 0..50 {
            let built = builder::build_with_seed(&["CAT", "TIGER", "RAT"], 9, seed);
            assert_eq!(built.placements[0].word, "TIGER", "seed {seed}");
            assert_eq!(built.placements.len(), 3, "seed {seed}");
            assert!(built.unplaced.is_empty());
            assert_eq!(built.status, BuildStatus::Complete);
            assert_well_formed(&built, 9);

            let numbering = numbering::number(&built.grid, &built.placements);
            assert_eq!(numbering.clues[0].number, 1);
            assert_numbering_consistent(&built.grid, &built, &numbering);
        }
    }

    #[test]
    fn test_single_letter_word() {
        for seed in 0..20 {
            let built = builder::build_with_seed(&["A"], 3, seed);
            assert_eq!(built.grid.letter_count(), 1);
            assert_eq!(built.grid.iter().filter(|(_, _, cell)| cell.is_block()).count(), 8);

            let numbering = numbering::number(&built.grid, &built.placements);
            assert_eq!(numbering.numbers.len(), 1);
            assert_eq!(numbering.clues[0].number, 1);
            assert_eq!(numbering.clues[0].word, "A");
        }
    }

    #[test]
    fn test_empty_word_list() {
        let built = builder::build_with_seed::<&str>(&[], 6, 0);
        assert!(built.placements.is_empty());
        assert!(built.unplaced.is_empty());
        assert_eq!(built.grid.letter_count(), 0);
        assert!(built.grid.is_complete());
        assert!(numbering::number(&built.grid, &built.placements).clues.is_empty());
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let built = builder::build_with_seed(&["ežys", "šernas"], 9, 4);
        let words: HashSet<&str> = built.placements.iter().map(|p| p.word.as_str()).collect();
        assert!(words.contains("EŽYS"));
        assert!(words.contains("ŠERNAS"));
        assert!(built
            .grid
            .iter()
            .filter_map(|(_, _, cell)| cell.letter())
            .all(|ch| !ch.is_lowercase()));
    }

    #[test]
    fn test_oversized_word_is_reported_not_placed() {
        let built = builder::build_with_seed(&["hippopotamus", "cat", "rat"], 9, 1);
        assert_eq!(built.unplaced, vec!["HIPPOPOTAMUS"]);
        assert_eq!(built.placements.len(), 2);
        assert_well_formed(&built, 9);
    }

    #[test]
    fn test_longest_word_goes_first() {
        let built = builder::build_with_seed(&["ox", "eel", "camel", "bear"], 9, 3);
        let lens: Vec<usize> = built.placements.iter().map(|p| p.len()).collect();
        assert_eq!(lens, vec![5, 4, 3, 2]);
    }
}

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn test_same_seed_same_grid() {
        let words = ["horse", "otter", "camel", "zebra", "panda", "koala", "eagle"];
        for seed in [0, 1, 42, 2024, u64::MAX] {
            let a = builder::build_with_seed(&words, 11, seed);
            let b = builder::build_with_seed(&words, 11, seed);
            assert_eq!(a, b, "seed {seed}");
        }
    }

    #[test]
    fn test_seeds_vary_layouts() {
        let words = ["horse", "otter", "camel", "zebra", "panda"];
        let layouts: HashSet<String> = (0..30)
            .map(|seed| builder::build_with_seed(&words, 11, seed).grid.to_string())
            .collect();
        assert!(layouts.len() > 1, "30 seeds produced one layout");
    }

    #[test]
    fn test_injected_rng_matches_seeded_entry_point() {
        let words = ["lion", "bear", "wolf"];
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(builder::build(&words, 8, &mut rng), builder::build_with_seed(&words, 8, 9));
    }
}

#[cfg(test)]
mod grid_properties {
    use super::*;

    /// Random word sets on small grids, where crowding makes adjacency mistakes likely.
    #[test]
    fn test_random_sets_small_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for round in 0..200 {
            let size = rng.random_range(3..=8);
            let count = rng.random_range(1..=7);
            let words = random_words(&mut rng, count);
            let seed: u64 = rng.random();

            let built = Builder::new(size)
                .search_limit(Some(5_000))
                .build(&words, &mut StdRng::seed_from_u64(seed));

            assert_well_formed(&built, size);
            assert_eq!(built.placements.len() + built.unplaced.len(), words.len(), "round {round}");

            let numbering = numbering::number(&built.grid, &built.placements);
            assert_numbering_consistent(&built.grid, &built, &numbering);
        }
    }

    #[test]
    fn test_random_sets_worksheet_grids() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..40 {
            let size = rng.random_range(9..=15);
            let words = random_words(&mut rng, 8);
            let built = Builder::new(size)
                .search_limit(Some(20_000))
                .build(&words, &mut StdRng::seed_from_u64(rng.random()));
            assert_well_formed(&built, size);
            let numbering = numbering::number(&built.grid, &built.placements);
            assert_numbering_consistent(&built.grid, &built, &numbering);
        }
    }

    #[test]
    fn test_partial_result_is_still_well_formed() {
        // HORSE and DWARF share no letter with QUICK or BLIMP, so all four would need parallel rows
        let built = builder::build_with_seed(&["horse", "quick", "blimp", "dwarf"], 5, 8);
        assert_ne!(built.status, BuildStatus::Complete);
        assert!(!built.unplaced.is_empty());
        assert_well_formed(&built, 5);
    }

    #[test]
    fn test_search_limit_reports_status() {
        let built = Builder::new(5)
            .search_limit(Some(3))
            .build(&["horse", "quick", "blimp", "dwarf"], &mut StdRng::seed_from_u64(1));
        assert_eq!(built.status, BuildStatus::SearchLimitReached);
        assert!(built.nodes_visited <= 3);
        assert_well_formed(&built, 5);
    }

    #[test]
    fn test_duplicates_placed_independently() {
        let built = builder::build_with_seed(&["rat", "rat"], 9, 2);
        assert_eq!(built.placements.len(), 2);
        assert_ne!(built.placements[0], built.placements[1]);
        assert_well_formed(&built, 9);
    }
}

#[cfg(test)]
mod pipeline {
    use super::*;

    fn seeded(size: usize, seed: u64) -> PuzzleConfig {
        PuzzleConfig { size, seed: Some(seed), ..PuzzleConfig::default() }
    }

    #[test]
    fn test_from_str_end_to_end() {
        let puzzle = generate_puzzle_from_str("kiškis, lapė, ežys, vilkas", &seeded(11, 3)).unwrap();
        assert_eq!(puzzle.placements.len(), 4);
        assert_eq!(puzzle.clues.len(), 4);

        let blank = render::render_grid(&puzzle, RenderMode::Blank);
        let answers = render::render_grid(&puzzle, RenderMode::Answers);
        assert_eq!(blank.lines().count(), 11);
        assert!(!blank.contains('K'));
        assert!(answers.contains('Š'));
    }

    #[test]
    fn test_word_file() {
        let list = WordList::load_from_path("tests/fixtures/forest_words.txt").unwrap();
        assert_eq!(list.words, vec!["kiškis", "lapė", "ežys", "vilkas", "meška"]);

        let puzzle = generate_puzzle(&list.words, &seeded(13, 7)).unwrap();
        assert!(puzzle.is_complete());
    }

    #[test]
    fn test_json_output_shape() {
        let puzzle = generate_puzzle(&owned(&["cat", "tiger", "rat"]), &seeded(9, 5)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&puzzle).unwrap()).unwrap();

        assert_eq!(json["grid"].as_array().map(Vec::len), Some(9));
        assert_eq!(json["placements"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["placements"][0]["word"], "TIGER");
        let cells: Vec<&str> = json["grid"][0].as_array().unwrap().iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| c.chars().count() == 1));
    }

    #[test]
    fn test_errors_carry_codes() {
        let bad_char = generate_puzzle(&owned(&["cat", "t-rex"]), &seeded(9, 1)).unwrap_err();
        assert!(matches!(bad_char, PuzzleError::ParseFailure(ref pe) if pe.code() == "E002"));

        let blank = generate_puzzle(&owned(&["cat", ""]), &seeded(9, 1)).unwrap_err();
        assert!(matches!(blank, PuzzleError::ParseFailure(ref pe) if pe.code() == "E001"));

        let too_big = generate_puzzle(&owned(&["cat"]), &seeded(41, 1)).unwrap_err();
        assert_eq!(too_big.code(), "P002");

        let strict = PuzzleConfig { strict: true, ..seeded(5, 1) };
        let too_long = generate_puzzle(&owned(&["cat", "elephant"]), &strict).unwrap_err();
        assert_eq!(too_long.code(), "P003");
        assert!(too_long.display_detailed().contains("--size"));
    }

    #[test]
    fn test_worksheet_text() {
        let puzzle = generate_puzzle(&owned(&["cat", "tiger", "rat"]), &seeded(9, 12)).unwrap();
        let text = render::render_worksheet(&puzzle, RenderMode::Blank);
        assert!(text.contains("TIGER (5)"));
        assert!(!text.contains("Not placed"));
        for clue in &puzzle.clues {
            assert!(text.contains(&render::clue_line(clue)));
        }
    }
}
