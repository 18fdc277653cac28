//! One-shot scoring of a guess against an answer

use crate::core::{Score, Word};
use crate::wordlists::{Dictionary, WordList};
use anyhow::{Context, Result, bail};

/// A scored guess, ready for display
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub score: Score,
}

/// Score `guess` against `answer`
///
/// The guess must be in the word list; the answer only has to be a valid word.
///
/// # Errors
///
/// Returns an error if either word is malformed or the guess is not accepted.
pub fn score_guess(guess: &str, answer: &str, words: &WordList) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let answer = Word::new(answer).with_context(|| format!("Invalid answer '{answer}'"))?;

    if !words.contains(&guess) {
        bail!("'{guess}' is not in the word list");
    }

    let score = Score::calculate(&guess, &answer);
    Ok(ScoreResult {
        guess,
        answer,
        score,
    })
}
