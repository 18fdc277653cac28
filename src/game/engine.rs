//! Guess engine: puzzle state and turn handling
//!
//! All operations are synchronous and infallible. Input that does not apply
//! to the current state (typing after the game is over, submitting a partial
//! row, ...) leaves the state untouched.

use super::keyboard::KeyboardSummary;
use crate::core::{Board, MAX_GUESSES, Score, WORD_LENGTH, Word};
use crate::wordlists::{Dictionary, WordList};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Terminal state of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GameOver,
    Incomplete,
    NotInWordList,
}

/// Result of [`GuessEngine::submit_guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing changed
    Rejected(Rejection),
    /// The row was scored; `outcome` is the game state afterwards
    Scored { score: Score, outcome: Outcome },
}

/// Single-player puzzle state
///
/// # Examples
/// ```
/// use wordgame::core::Word;
/// use wordgame::game::{GuessEngine, Outcome};
/// use wordgame::wordlists::WordList;
///
/// let words = WordList::new(["crane", "trace"].map(|w| Word::new(w).unwrap())).unwrap();
/// let mut engine = GuessEngine::with_answer(&words, Word::new("crane").unwrap());
///
/// for letter in "crane".chars() {
///     engine.enter_letter(letter);
/// }
/// engine.submit_guess();
/// assert_eq!(engine.outcome(), Outcome::Won);
/// ```
#[derive(Debug, Clone)]
pub struct GuessEngine<'a, D: Dictionary = WordList> {
    words: &'a D,
    rng: StdRng,
    answer: Word,
    board: Board,
    current_row: usize,
    current_column: usize,
    outcome: Outcome,
    history: Vec<(Word, Score)>,
}

impl<'a, D: Dictionary> GuessEngine<'a, D> {
    /// Start a game with a randomly drawn answer
    #[must_use]
    pub fn new(words: &'a D) -> Self {
        Self::with_seed(words, rand::random())
    }

    /// Start a game whose answer sequence is reproducible from `seed`
    #[must_use]
    pub fn with_seed(words: &'a D, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let answer = words.pick(&mut rng, None).clone();
        Self::start(words, rng, answer)
    }

    /// Start a game with a fixed first answer
    ///
    /// Later games started with [`new_game`](Self::new_game) are drawn from the list.
    #[must_use]
    pub fn with_answer(words: &'a D, answer: Word) -> Self {
        Self::start(words, StdRng::seed_from_u64(rand::random()), answer)
    }

    fn start(words: &'a D, rng: StdRng, answer: Word) -> Self {
        log::debug!("New game started");
        log::trace!("Answer is {answer}");
        Self {
            words,
            rng,
            answer,
            board: Board::new(),
            current_row: 0,
            current_column: 0,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Type a letter at the cursor and move right, stopping at the last column
    ///
    /// Non-alphabetic input is ignored.
    pub fn enter_letter(&mut self, letter: char) {
        if self.outcome.is_over() || !letter.is_ascii_alphabetic() {
            return;
        }

        let column = self.current_column.min(WORD_LENGTH - 1);
        self.board.cell_mut(self.current_row, column).letter =
            u8::try_from(letter.to_ascii_lowercase()).ok();
        self.current_column = (column + 1).min(WORD_LENGTH - 1);
    }

    /// Clear the letter at the cursor, first stepping left if the cursor cell is empty
    pub fn backspace(&mut self) {
        if self.outcome.is_over() {
            return;
        }

        if self.current_column > 0
            && self
                .board
                .cell(self.current_row, self.current_column)
                .is_empty()
        {
            self.current_column -= 1;
        }
        self.board
            .cell_mut(self.current_row, self.current_column)
            .letter = None;
    }

    /// Move the cursor to another column of the active row
    pub fn select_column(&mut self, column: usize) {
        if !self.outcome.is_over() && column < WORD_LENGTH {
            self.current_column = column;
        }
    }

    /// Whether [`submit_guess`](Self::submit_guess) would score the active row
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submittable_guess().is_ok()
    }

    fn submittable_guess(&self) -> Result<Word, Rejection> {
        if self.outcome.is_over() {
            return Err(Rejection::GameOver);
        }
        let guess = self
            .board
            .row_word(self.current_row)
            .ok_or(Rejection::Incomplete)?;
        if !self.words.contains(&guess) {
            return Err(Rejection::NotInWordList);
        }
        Ok(guess)
    }

    /// Score the active row and advance the game
    ///
    /// Rejected submissions change nothing.
    pub fn submit_guess(&mut self) -> Submission {
        let guess = match self.submittable_guess() {
            Ok(guess) => guess,
            Err(rejection) => {
                log::debug!(
                    "Rejected '{}': {rejection:?}",
                    self.board.row_text(self.current_row)
                );
                return Submission::Rejected(rejection);
            }
        };

        let row = self.current_row;
        let score = Score::calculate(&guess, &self.answer);
        self.board.apply_score(row, &score);

        if guess == self.answer {
            self.outcome = Outcome::Won;
            log::info!("Solved in {} guesses", row + 1);
        } else if row == MAX_GUESSES - 1 {
            self.board.reveal(row, &self.answer);
            self.outcome = Outcome::Lost;
            log::info!("Out of guesses, answer was {}", self.answer);
        } else {
            self.current_row += 1;
            self.current_column = 0;
        }
        self.history.push((guess, score));

        Submission::Scored {
            score,
            outcome: self.outcome,
        }
    }

    /// Draw a different answer and clear the board
    pub fn new_game(&mut self) {
        self.answer = self.words.pick(&mut self.rng, Some(&self.answer)).clone();
        self.board.clear();
        self.current_row = 0;
        self.current_column = 0;
        self.outcome = Outcome::InProgress;
        self.history.clear();

        log::debug!("New game started");
        log::trace!("Answer is {}", self.answer);
    }

    /// Best known status of every guessed letter
    #[must_use]
    pub fn letter_status_summary(&self) -> KeyboardSummary {
        KeyboardSummary::from_history(&self.history)
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_column(&self) -> usize {
        self.current_column
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Submitted guesses of the current game, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Score)] {
        &self.history
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.board.row_text(self.current_row)
    }
}
