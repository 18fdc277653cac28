//! Word lists
//!
//! The accepted words double as the pool answers are drawn from. The default
//! list is embedded into the binary at build time; a custom list can be
//! loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;

/// Membership and random selection, the two things the game needs from a word list
pub trait Dictionary {
    /// Check whether `word` is an accepted guess
    fn contains(&self, word: &Word) -> bool;

    /// Pick a word uniformly at random, never returning `exclude` unless it is
    /// the only word available
    ///
    /// Implementations must hold at least one word.
    fn pick<R: Rng>(&self, rng: &mut R, exclude: Option<&Word>) -> &Word;
}

/// Error type for word list construction
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// An ordered, de-duplicated, non-empty list of words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no words are given.
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::Word;
    /// use wordgame::wordlists::WordList;
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let list = WordList::new(words).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains_str("SLATE"));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The list compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded list is empty, which the build guarantees against.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is not empty")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test on raw text, case-insensitive
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|w| self.index.contains(&w))
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    fn pick<R: Rng>(&self, rng: &mut R, exclude: Option<&Word>) -> &Word {
        let excluded = exclude
            .filter(|_| self.words.len() > 1)
            .and_then(|e| self.words.iter().position(|w| w == e));

        let index = match excluded {
            // Draw from the remaining n-1 slots and step over the excluded one
            Some(skip) => {
                let i = rng.random_range(0..self.words.len() - 1);
                if i >= skip { i + 1 } else { i }
            }
            None => rng.random_range(0..self.words.len()),
        };
        &self.words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(loader::words_from_slice(words)).unwrap()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_has_no_duplicates() {
        assert_eq!(WordList::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            WordList::new(Vec::new()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let words = list(&["crane", "slate"]);
        assert!(words.contains(&Word::new("CRANE").unwrap()));
        assert!(words.contains_str("Slate"));
        assert!(!words.contains_str("trace"));
        assert!(!words.contains_str("cr"));
    }

    #[test]
    fn pick_never_repeats_excluded_word() {
        let words = list(&["crane", "slate", "trace"]);
        let mut rng = StdRng::seed_from_u64(7);
        let previous = Word::new("slate").unwrap();

        for _ in 0..200 {
            let picked = words.pick(&mut rng, Some(&previous));
            assert_ne!(picked, &previous);
        }
    }

    #[test]
    fn pick_reaches_every_other_word() {
        let words = list(&["crane", "slate", "trace"]);
        let mut rng = StdRng::seed_from_u64(11);
        let previous = Word::new("crane").unwrap();

        let seen: FxHashSet<&str> = (0..200)
            .map(|_| words.pick(&mut rng, Some(&previous)).text())
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn pick_single_word_list_returns_it() {
        let words = list(&["crane"]);
        let mut rng = StdRng::seed_from_u64(1);
        let only = Word::new("crane").unwrap();
        assert_eq!(words.pick(&mut rng, Some(&only)), &only);
    }

    #[test]
    fn pick_with_unknown_exclusion_draws_from_all() {
        let words = list(&["crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(3);
        let stranger = Word::new("zesty").unwrap();
        let picked = words.pick(&mut rng, Some(&stranger));
        assert!(words.contains(picked));
    }
}
