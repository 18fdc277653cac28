//! Core domain types for the word game
//!
//! Pure value types with no I/O: words, scoring and the board grid.

mod board;
mod score;
mod word;

pub use board::{Board, Cell};
pub use score::{Feedback, Score};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board, one per allowed guess
pub const MAX_GUESSES: usize = 6;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = WORD_LENGTH * MAX_GUESSES;
