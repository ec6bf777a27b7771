//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` and `PuzzleError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordgrid::errors::ParseError;
use wordgrid::puzzle::PuzzleError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::EmptyWord { position: 1 },
        ParseError::InvalidWordChar { word: "ice cream".to_string(), invalid_char: ' ' },
        ParseError::EmptyWordList,
        ParseError::Io {
            path: "words.txt".to_string(),
            message: "No such file or directory (os error 2)".to_string(),
        },
    ]
}

/// Helper to create all `PuzzleError` variants for documentation
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::ParseFailure(Box::new(ParseError::InvalidWordChar {
            word: "d0g".to_string(),
            invalid_char: '0',
        })),
        PuzzleError::InvalidGridSize { size: 0 },
        PuzzleError::GridTooSmall { word: "hippopotamus".to_string(), len: 12, size: 9 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Puzzle Errors (P001–P003)](#puzzle-errors)");
    println!("- [Parse Errors (E001–E004)](#parse-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    generate_puzzle_error_docs();
    generate_parse_error_docs();

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: No words given (E003)");
    println!("Example: 'cat, tiger, rat'");
    println!("```\n");
    println!("1. Note the error code (e.g., `E003`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

fn generate_puzzle_error_docs() {
    println!("## Puzzle Errors\n");
    println!("Top-level errors from the puzzle pipeline. These wrap word-list parse errors or reject the grid settings.\n");
    generate_error_docs!(all_puzzle_error_variants());
}

fn generate_parse_error_docs() {
    println!("## Parse Errors\n");
    println!("Errors that occur when reading or validating the word list.\n");
    generate_error_docs!(all_parse_error_variants());
}
