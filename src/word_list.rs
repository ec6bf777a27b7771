//! Parse and validate the words a worksheet is generated from.
//!
//! Words arrive the way they are typed into the worksheet form: one string with
//! the words separated by commas (`"kiškis, lapė, ežys"`). Files may also put one word
//! per line, so newlines count as separators too.
//!
//! The parsing logic:
//! - Items are trimmed; empty items (e.g. from `"a,,b"` or a trailing comma) are skipped.
//! - Every character of an item must be alphabetic. Letters with diacritics are fine;
//!   inner spaces, digits and punctuation are rejected with a [`ParseError`].
//! - Order is preserved and duplicates are kept (the builder places duplicates independently).
//!
//! Case normalization happens in the builder via [`normalize_word`], not here, so the
//! list keeps the spelling the user typed (useful for captions and image lookups).

use crate::errors::ParseError;

/// A validated list of words, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a comma- and/or newline-separated list of words.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidWordChar`] for the first item that contains a
    /// non-alphabetic character.
    pub fn parse_from_str(contents: &str) -> Result<WordList, Box<ParseError>> {
        let mut words = Vec::new();

        for item in contents.split([',', '\n']) {
            let word = item.trim();
            if word.is_empty() {
                continue;
            }
            if let Some(invalid_char) = word.chars().find(|c| !c.is_alphabetic()) {
                return Err(Box::new(ParseError::InvalidWordChar {
                    word: word.to_string(),
                    invalid_char,
                }));
            }
            words.push(word.to_string());
        }

        Ok(WordList { words })
    }

    /// Validate words that were already split by the caller (e.g. a JS `string[]`).
    ///
    /// Unlike [`WordList::parse_from_str`], an empty item here is an error: the caller
    /// handed us an explicit slot with nothing in it.
    ///
    /// # Errors
    ///
    /// [`ParseError::EmptyWord`] or [`ParseError::InvalidWordChar`].
    pub fn from_words<S: AsRef<str>>(items: &[S]) -> Result<WordList, Box<ParseError>> {
        let mut words = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let word = item.as_ref().trim();
            if word.is_empty() {
                return Err(Box::new(ParseError::EmptyWord { position }));
            }
            if let Some(invalid_char) = word.chars().find(|c| !c.is_alphabetic()) {
                return Err(Box::new(ParseError::InvalidWordChar {
                    word: word.to_string(),
                    invalid_char,
                }));
            }
            words.push(word.to_string());
        }
        Ok(WordList { words })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// [`ParseError::Io`] if the file can't be read, otherwise whatever
    /// [`WordList::parse_from_str`] reports.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, Box<ParseError>> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            Box::new(ParseError::Io {
                path: path_ref.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Self::parse_from_str(&data)
    }

    /// Fail with [`ParseError::EmptyWordList`] if nothing was parsed.
    ///
    /// The builder itself accepts an empty list (it returns an all-block grid); this
    /// check is for front ends that want to tell the user they forgot the words.
    ///
    /// # Errors
    ///
    /// [`ParseError::EmptyWordList`] when `self.words` is empty.
    pub fn require_non_empty(self) -> Result<WordList, Box<ParseError>> {
        if self.words.is_empty() {
            Err(Box::new(ParseError::EmptyWordList))
        } else {
            Ok(self)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Uppercase a word for placement.
///
/// Uses full Unicode case mapping (`ė` → `Ė`). A letter whose uppercase form is more
/// than one character (`ß` → `SS`) is kept unchanged so one letter stays one cell.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim()
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}
