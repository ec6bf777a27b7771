use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordgrid::errors::ParseError;
use wordgrid::puzzle::{self, PuzzleConfig, PuzzleError};
use wordgrid::render::{self, RenderMode};
use wordgrid::word_list::WordList;

/// Crossword generator for printable worksheets
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Comma-separated words (e.g., "kiškis, lapė, ežys")
    #[arg(required_unless_present = "word_file", conflicts_with = "word_file")]
    words: Option<String>,

    /// Read words from a file instead (commas or one word per line)
    #[arg(short = 'f', long)]
    word_file: Option<String>,

    /// Cells per side of the square grid
    #[arg(short, long, default_value_t = puzzle::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Seed for the tie-break shuffle; a fresh one is drawn and reported if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the grid with the answers filled in
    #[arg(short, long)]
    answers: bool,

    /// Print the puzzle as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Fail if a word is longer than the grid instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Stop the search after this many placements and keep the best partial grid
    #[arg(long, default_value_t = puzzle::DEFAULT_SEARCH_LIMIT, conflicts_with = "exhaustive")]
    search_limit: u64,

    /// Search until every arrangement has been tried (may take minutes on crowded grids)
    #[arg(long)]
    exhaustive: bool,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {

    // Set up logging
    wordgrid::log::init_logger(wordgrid::log::debug_requested());

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting for our own error types
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Read the words from the argument or the word file.
/// 3. Generate the puzzle.
/// 4. Print it (text or JSON) on stdout.
/// 5. Print the seed and timing on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Collect the words
    let list = match (&cli.word_file, &cli.words) {
        (Some(path), _) => WordList::load_from_path(path),
        (None, Some(text)) => WordList::parse_from_str(text),
        (None, None) => Ok(WordList::default()),
    }
    .and_then(WordList::require_non_empty)
    .map_err(|e| *e)?;

    let config = PuzzleConfig {
        size: cli.size,
        seed: cli.seed,
        search_limit: (!cli.exhaustive).then_some(cli.search_limit),
        strict: cli.strict,
        ..PuzzleConfig::default()
    };

    // 2. Build and number
    let t_build = Instant::now();
    let puzzle = puzzle::generate_puzzle(&list.words, &config)?;
    let build_secs = t_build.elapsed().as_secs_f64();

    // 3. Print
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        print!("{}", render::render_worksheet(&puzzle, RenderMode::Blank));
        if cli.answers {
            println!();
            print!("{}", render::render_grid(&puzzle, RenderMode::Answers));
        }
    }

    // 4. Diagnostics
    if !puzzle.is_complete() {
        eprintln!("⚠️  {} of {} words could not be placed", puzzle.unplaced.len(), list.len());
    }
    eprintln!(
        "Placed {} words on a {}x{} grid in {:.3}s (seed {}).",
        puzzle.placements.len(),
        puzzle.size,
        puzzle.size,
        build_secs,
        puzzle.seed
    );

    Ok(())
}
