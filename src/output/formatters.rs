//! Formatting utilities for terminal output

use crate::core::{Cell, Score};
use crate::game::LetterStatus;
use colored::{ColoredString, Colorize};

/// Render a score as emoji squares
#[must_use]
pub fn score_to_emoji(score: &Score) -> String {
    score.to_emoji()
}

/// A board cell as a padded, coloured tile
///
/// `scored` is false for the row still being typed, whose flags are not final.
#[must_use]
pub fn cell_tile(cell: &Cell, scored: bool) -> ColoredString {
    let text = format!(" {} ", cell.letter.map_or('_', |l| char::from(l.to_ascii_uppercase())));

    if !scored || cell.is_empty() {
        return text.normal();
    }
    match LetterStatus::from(cell.feedback()) {
        LetterStatus::InPlace => text.black().on_green().bold(),
        LetterStatus::InWord => text.black().on_yellow().bold(),
        LetterStatus::Absent | LetterStatus::Unknown => text.white().on_bright_black(),
    }
}

/// A keyboard key coloured by its status
#[must_use]
pub fn key_tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::InPlace => text.black().on_green(),
        LetterStatus::InWord => text.black().on_yellow(),
        LetterStatus::Absent => text.bright_black(),
        LetterStatus::Unknown => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn score_to_emoji_matches_feedback() {
        let answer = Word::new("crane").unwrap();
        let guess = Word::new("trace").unwrap();
        assert_eq!(
            score_to_emoji(&Score::calculate(&guess, &answer)),
            "⬜🟩🟩🟨🟩"
        );
        assert_eq!(score_to_emoji(&Score::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn cell_tile_shows_uppercase_or_placeholder() {
        colored::control::set_override(false);

        let cell = Cell {
            letter: Some(b'q'),
            ..Cell::EMPTY
        };
        assert_eq!(cell_tile(&cell, false).to_string(), " Q ");
        assert_eq!(cell_tile(&Cell::EMPTY, true).to_string(), " _ ");
    }
}
