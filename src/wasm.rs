use crate::errors::ParseError;
use crate::log::init_logger;
use crate::puzzle::{generate_puzzle, PuzzleConfig, PuzzleError};
use crate::render::{self, RenderMode};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E002", "P002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<&ParseError> for WasmError {
    fn from(pe: &ParseError) -> Self {
        WasmError {
            code: pe.code().to_string(),
            message: pe.to_string(),
            description: pe.description().to_string(),
            details: pe.details().to_string(),
            help: pe.help().map(|s| s.to_string()),
        }
    }
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        // For ParseFailure, surface the nested ParseError details
        match &e {
            PuzzleError::ParseFailure(pe) => WasmError::from(pe.as_ref()),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        // Format a comprehensive error message
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize wordgrid logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    // 1. Set up panic hook
    console_error_panic_hook::set_once();

    // 2. Initialize logging with the provided debug setting
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

#[derive(serde::Serialize)]
struct WasmPuzzle<'a> {
    #[serde(flatten)]
    puzzle: &'a crate::puzzle::Puzzle,
    /// Plain-text grids, for quick previews
    blank_text: String,
    answers_text: String,
}

/// JS entry: (words: string[], size: number, seed?: number, search_limit?: number)
/// returns the puzzle object (grid, placements, clues, unplaced, seed, status)
///
/// `search_limit` defaults to [`crate::puzzle::DEFAULT_SEARCH_LIMIT`] so a crowded list
/// can't lock up the page; check `status` for `"search_limit_reached"`.
#[wasm_bindgen]
pub fn generate_puzzle_wasm(
    words: JsValue,
    size: usize,
    seed: Option<f64>,
    search_limit: Option<f64>,
) -> Result<JsValue, JsValue> {
    // words: string[] -> Vec<String>
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['kiškis', 'lapė', 'ežys']".to_string()),
    })?;

    let defaults = PuzzleConfig::default();
    let config = PuzzleConfig {
        size,
        // JS numbers are f64; seeds beyond 2^53 are not representable there anyway
        seed: seed.map(|s| s as u64),
        search_limit: search_limit.map(|n| n as u64).or(defaults.search_limit),
        ..defaults
    };

    let puzzle = generate_puzzle(&words, &config).map_err(WasmError::from)?;

    let result = WasmPuzzle {
        puzzle: &puzzle,
        blank_text: render::render_grid(&puzzle, RenderMode::Blank),
        answers_text: render::render_grid(&puzzle, RenderMode::Answers),
    };

    // plain objects instead of Maps, so `puzzle.clues[0].number` works in JS
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    serde::Serialize::serialize(&result, &serializer)
        .map_err(|e| serialization_error("WASM002", "puzzle", e))
}

/// Parse the text of the word-list form field (comma or newline separated).
///
/// Returns the words as a `string[]`.
///
/// # Errors
/// Returns a JS `Error` if a word contains a non-letter character.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let list = WordList::parse_from_str(text).map_err(|pe| WasmError::from(pe.as_ref()))?;
    to_value(&list.words).map_err(|e| serialization_error("WASM003", "word list", e))
}

/// Generate a debug report for troubleshooting.
///
/// Users copy/paste this when reporting a puzzle that came out wrong. The seed makes
/// the exact puzzle reproducible.
#[wasm_bindgen]
pub fn get_debug_info(words: &str, error_message: &str, size: usize, seed: Option<f64>) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails (infallible operation)
    // we use `let _ =` to explicitly ignore the Result without panicking
    let _ = writeln!(&mut report, "=== WORDGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Words: {}", words);
    let _ = writeln!(&mut report, "Grid Size: {}", size);
    match seed {
        Some(s) => {
            let _ = writeln!(&mut report, "Seed: {}", s as u64);
        }
        None => {
            let _ = writeln!(&mut report, "Seed: none");
        }
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
