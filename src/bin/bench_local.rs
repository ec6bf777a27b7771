//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of word sets on *your* machine.
//! - Each case is built with several seeds; each seed is run several times and the
//!   median over all runs is reported.
//! - Also reports how many words were placed and how many placements the search tried,
//!   which is a better signal than wall time for backtracking regressions.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - More seeds per case:            `cargo run --bin bench_local --release -- --seeds 20`
//! - Print the grid of the last run: `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Word sets live in `get_cases()` below.
//! - I/O (printing) is kept outside the timed section.
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::builder::{BuildStatus, Builder};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Simple local benchmark runner: build a few fixed word sets with several seeds.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per (case, seed) pair (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Number of seeds per case (seeds 0..N)
    #[arg(long = "seeds", default_value_t = 5)]
    num_seeds: u64,

    /// Stop each build after this many placements
    #[arg(long)]
    search_limit: Option<u64>,

    /// Print the grid from the last run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// A benchmark case: a name, the words and the grid size.
#[derive(Clone)]
struct Case {
    name: &'static str,
    words: &'static [&'static str],
    size: usize,
}

/// Edit/add new word sets here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "animals-3", words: &["cat", "tiger", "rat"], size: 9 },
        Case {
            name: "forest-8",
            words: &["kiškis", "lapė", "ežys", "vilkas", "meška", "briedis", "stirna", "šernas"],
            size: 13,
        },
        Case {
            name: "fruit-12",
            words: &[
                "apple", "banana", "cherry", "grape", "lemon", "mango",
                "melon", "orange", "peach", "pear", "plum", "kiwi",
            ],
            size: 13,
        },
        Case {
            name: "school-15",
            words: &[
                "pencil", "eraser", "ruler", "book", "desk", "chair", "teacher", "lesson",
                "paper", "notebook", "scissors", "glue", "chalk", "board", "map",
            ],
            size: 15,
        },
        // Note: tight grid, so this one spends most of its time backtracking
        Case { name: "tight-6", words: &["planet", "comet", "star", "moon", "orbit", "sun"], size: 7 },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 12;

fn main() {
    /// One row in the benchmark summary: (case name, median seconds, mean words placed,
    /// words in the case, median placements tried, complete builds).
    type SummaryRow = (String, f64, f64, usize, f64, usize);

    let cli = Cli::parse();
    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({} words, {}x{})", idx + 1, case.name, case.words.len(), case.size, case.size);

        let builder = Builder::new(case.size).search_limit(cli.search_limit);

        let mut times = Vec::new();
        let mut nodes = Vec::new();
        let mut placed_total = 0usize;
        let mut complete = 0usize;
        let mut last = None;

        for seed in 0..cli.num_seeds {
            for _ in 0..cli.num_repeats {
                let mut rng = StdRng::seed_from_u64(seed);

                // Keep only the *core* operation inside the timed region.
                let t_build = Instant::now();
                let built = builder.build(black_box(case.words), &mut rng);
                let build_secs = t_build.elapsed().as_secs_f64();

                times.push(build_secs);
                nodes.push(built.nodes_visited as f64);
                placed_total += built.placements.len();
                if built.status == BuildStatus::Complete {
                    complete += 1;
                }
                last = Some(built);
            }
            eprintln!("  seed {seed:>3}: {:.4}s", times.last().copied().unwrap_or(0.0));
        }

        let runs = times.len().max(1);
        let med = median(times);
        let med_nodes = median(nodes);
        let mean_placed = placed_total as f64 / runs as f64;

        if cli.print_grid {
            if let Some(built) = &last {
                println!("{}: {}", case.name, pluralizer(built.placements.len(), "word".into(), None));
                println!("{}", built.grid);
            }
        }

        eprintln!(
            "  → median {:.4}s over {} run(s); {:.1}/{} words placed on average; {}/{} complete",
            med,
            runs,
            mean_placed,
            case.words.len(),
            complete,
            runs
        );

        summary.push((case.name.to_string(), med, mean_placed, case.words.len(), med_nodes, complete));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_NAME_LEN$} | {:>10} | {:>8} | {:>12} | {:>8}",
        "case", "median (s)", "placed", "median nodes", "complete"
    );
    eprintln!(
        "{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<8}-+-{:-<12}-+-{:-<8}",
        "", "", "", "", ""
    );
    for (name, med, placed, total, med_nodes, complete) in &summary {
        let placed_str = format!("{placed:.1}/{total}");
        eprintln!(
            "{name:<MAX_NAME_LEN$} | {med:>10.4} | {placed_str:>8} | {med_nodes:>12.0} | {complete:>8}"
        );
    }
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    let noun = if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    };
    format!("{count} {noun}")
}
