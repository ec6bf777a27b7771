//! Error types for word-list input with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E004) for documentation lookup:
//!
//! - E001: `EmptyWord` (Blank word in an explicit list)
//! - E002: `InvalidWordChar` (Non-letter character in a word)
//! - E003: `EmptyWordList` (No words given)
//! - E004: `Io` (Word file could not be read)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::ParseError;
//! use wordgrid::word_list::WordList;
//!
//! match WordList::parse_from_str("cat, d0g") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(list) => println!("{} words", list.len()),
//! }
//! ```

/// Custom error type for word-list parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Word #{} is empty", .position + 1)]
    EmptyWord { position: usize },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only letters allowed)")]
    InvalidWordChar { word: String, invalid_char: char },

    #[error("No words given")]
    EmptyWordList,

    #[error("failed to read word list from '{path}': {message}")]
    Io { path: String, message: String },
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyWord { .. } => "E001",
            ParseError::InvalidWordChar { .. } => "E002",
            ParseError::EmptyWordList => "E003",
            ParseError::Io { .. } => "E004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::EmptyWord { .. } => "Blank word in an explicit list",
            ParseError::InvalidWordChar { .. } => "Non-letter character in a word",
            ParseError::EmptyWordList => "No words given",
            ParseError::Io { .. } => "Word file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::EmptyWord { .. } => "A list of words was passed item by item and one of the items is empty or only whitespace. Comma-separated input skips empty items instead.",
            ParseError::InvalidWordChar { .. } => "Crossword cells hold exactly one letter each, so words may only contain letters. Letters with diacritics (ą, č, ė, ž, ...) are accepted; spaces, digits, hyphens and apostrophes are not.",
            ParseError::EmptyWordList => "The input contained no words after splitting on commas and newlines and dropping blank items.",
            ParseError::Io { .. } => "The word file passed with --word-file does not exist or is not readable UTF-8 text.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyWord { .. } => Some("Remove the blank entry from the list"),
            ParseError::InvalidWordChar { .. } => Some("Write multi-word answers without spaces (e.g., 'icecream') and drop digits or punctuation"),
            ParseError::EmptyWordList => Some("Example: 'cat, tiger, rat'"),
            ParseError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
