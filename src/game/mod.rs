//! Game state machine
//!
//! [`GuessEngine`] owns the puzzle for one session. Front-ends read its state
//! and forward user intents to it.

mod engine;
pub mod keyboard;
mod stats;

pub use engine::{GuessEngine, Outcome, Rejection, Submission};
pub use keyboard::{KEYBOARD_ROWS, KeyboardSummary, LetterStatus};
pub use stats::Statistics;
