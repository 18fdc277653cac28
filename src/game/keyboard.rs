//! Per-letter status for keyboard highlighting

use crate::core::{Feedback, Score, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best known status of a letter
///
/// Variants are ordered by priority so `max` keeps the most informative one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    Unknown,
    Absent,
    InWord,
    InPlace,
}

impl From<Feedback> for LetterStatus {
    fn from(feedback: Feedback) -> Self {
        match (feedback.in_place, feedback.in_word) {
            (true, _) => Self::InPlace,
            (false, true) => Self::InWord,
            (false, false) => Self::Absent,
        }
    }
}

/// Letter statuses derived from every submitted guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardSummary {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyboardSummary {
    /// Fold a guess history into one status per letter
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{Score, Word};
    /// use wordgame::game::{KeyboardSummary, LetterStatus};
    ///
    /// let answer = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let history = [(guess.clone(), Score::calculate(&guess, &answer))];
    ///
    /// let summary = KeyboardSummary::from_history(&history);
    /// assert_eq!(summary.status('t'), LetterStatus::Absent);
    /// assert_eq!(summary.status('C'), LetterStatus::InWord);
    /// assert_eq!(summary.status('q'), LetterStatus::Unknown);
    /// ```
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a (Word, Score)>) -> Self {
        let mut statuses: FxHashMap<u8, LetterStatus> = FxHashMap::default();

        for (word, score) in history {
            for (&letter, &feedback) in word.chars().iter().zip(score.feedback()) {
                let status = statuses.entry(letter).or_default();
                *status = (*status).max(feedback.into());
            }
        }

        Self { statuses }
    }

    /// Status of a letter, case-insensitive
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(|b| self.statuses.get(&b).copied())
            .unwrap_or_default()
    }
}
