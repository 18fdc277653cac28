//! Guess scoring
//!
//! Every position of a guess gets two flags:
//! - `in_place`: the letter matches the answer at the same position
//! - `in_word`: the letter occurs in the answer, credited at most once per
//!   occurrence that was not already claimed by an exact match
//!
//! An exact match always sets both flags.

use super::{WORD_LENGTH, Word};

/// Scoring result for one letter of a guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub in_word: bool,
    pub in_place: bool,
}

impl Feedback {
    pub const ABSENT: Self = Self {
        in_word: false,
        in_place: false,
    };
    pub const IN_WORD: Self = Self {
        in_word: true,
        in_place: false,
    };
    pub const IN_PLACE: Self = Self {
        in_word: true,
        in_place: true,
    };
}

/// Per-position feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([Feedback; WORD_LENGTH]);

impl Score {
    /// All letters in place
    pub const PERFECT: Self = Self([Feedback::IN_PLACE; WORD_LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool of
    ///    answer letters
    /// 2. Second pass: for every other position, credit the letter if it is
    ///    still in the pool and remove one occurrence
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{Feedback, Score, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let score = Score::calculate(&guess, &answer);
    ///
    /// assert_eq!(score.feedback()[0], Feedback::ABSENT);
    /// assert_eq!(score.feedback()[1], Feedback::IN_PLACE);
    /// assert_eq!(score.feedback()[3], Feedback::IN_WORD);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::ABSENT; WORD_LENGTH];
        let mut pool = answer.char_counts();

        // Exact matches first so they cannot be claimed by a misplaced duplicate
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Feedback::IN_PLACE;
                if let Some(count) = pool.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i].in_place {
                continue;
            }
            if let Some(count) = pool.get_mut(&letter)
                && *count > 0
            {
                result[i] = Feedback::IN_WORD;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Feedback for each position
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is in place
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of letters in place
    #[must_use]
    pub fn count_in_place(&self) -> usize {
        self.0.iter().filter(|f| f.in_place).count()
    }

    /// Number of letters in the word but not in place
    #[must_use]
    pub fn count_in_word(&self) -> usize {
        self.0.iter().filter(|f| f.in_word && !f.in_place).count()
    }

    /// Render as an emoji row, e.g. "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|f| match (f.in_place, f.in_word) {
                (true, _) => '🟩',
                (false, true) => '🟨',
                (false, false) => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, answer: &str) -> Score {
        Score::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn trace_against_crane() {
        let s = score("trace", "crane");
        assert_eq!(
            s.feedback(),
            &[
                Feedback::ABSENT,
                Feedback::IN_PLACE,
                Feedback::IN_PLACE,
                Feedback::IN_WORD,
                Feedback::IN_PLACE,
            ]
        );
        assert_eq!(s.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn all_absent() {
        let s = score("abcde", "fghij");
        assert_eq!(s.count_in_place(), 0);
        assert_eq!(s.count_in_word(), 0);
    }

    #[test]
    fn identical_words_are_perfect() {
        for word in ["crane", "level", "aaaaa"] {
            assert!(score(word, word).is_perfect());
        }
    }

    #[test]
    fn in_place_iff_letters_equal() {
        let pairs = [
            ("level", "elfel"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("trace", "crane"),
            ("aabbb", "bbaaa"),
        ];
        for (answer, guess) in pairs {
            let s = score(guess, answer);
            for i in 0..WORD_LENGTH {
                assert_eq!(
                    s.feedback()[i].in_place,
                    guess.as_bytes()[i] == answer.as_bytes()[i],
                    "{guess} vs {answer} at {i}"
                );
            }
        }
    }

    #[test]
    fn duplicate_letters_credited_once_per_occurrence() {
        // ELFEL's last two letters are exact, leaving one L and one E in LEVEL
        let s = score("elfel", "level");
        assert_eq!(
            s.feedback(),
            &[
                Feedback::IN_WORD,
                Feedback::IN_WORD,
                Feedback::ABSENT,
                Feedback::IN_PLACE,
                Feedback::IN_PLACE,
            ]
        );

        let guess = Word::new("elfel").unwrap();
        let answer = Word::new("level").unwrap();
        for letter in [b'e', b'l'] {
            let credited = guess
                .chars()
                .iter()
                .zip(s.feedback())
                .filter(|(c, f)| **c == letter && f.in_word)
                .count();
            let available = answer.chars().iter().filter(|c| **c == letter).count();
            assert!(credited <= available);
        }
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_duplicate() {
        // FLOOR has two O: one is exact at index 3, the other credits index 1
        let s = score("robot", "floor");
        assert_eq!(s.feedback()[1], Feedback::IN_WORD);
        assert_eq!(s.feedback()[3], Feedback::IN_PLACE);
        assert_eq!(s.count_in_place(), 1);
        assert_eq!(s.count_in_word(), 2);
    }

    #[test]
    fn repeated_guess_letter_with_single_answer_occurrence() {
        // SPEED has two E, ERASE has two E as well but no P or D
        let s = score("speed", "erase");
        assert_eq!(s.count_in_word(), 3);

        // CRANE has a single E and the exact match claims it
        let s = score("eerie", "crane");
        assert_eq!(s.feedback()[0], Feedback::ABSENT);
        assert_eq!(s.feedback()[4], Feedback::IN_PLACE);
        assert_eq!(s.feedback()[1], Feedback::ABSENT);
        assert_eq!(s.feedback()[3], Feedback::ABSENT);
    }
}
