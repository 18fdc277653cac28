//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a word list from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// lines that are not valid five-letter words are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);
    log::debug!("Loaded {} words from {}", words.len(), path.display());
    WordList::new(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| log::warn!("Skipping line {}: '{trimmed}': {e}", n + 1))
                .ok()
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordgame::wordlists::loader::words_from_slice;
/// use wordgame::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
