//! Word Game
//!
//! A single-player, Wordle-style word-guessing game with a terminal UI.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgame::core::Word;
//! use wordgame::game::{GuessEngine, Outcome, Submission};
//! use wordgame::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let mut engine = GuessEngine::with_answer(&words, Word::new("crane").unwrap());
//!
//! for letter in "trace".chars() {
//!     engine.enter_letter(letter);
//! }
//! if let Submission::Scored { score, outcome } = engine.submit_guess() {
//!     println!("{}", score.to_emoji()); // ⬜🟩🟩🟨🟩
//!     assert_eq!(outcome, Outcome::InProgress);
//! }
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
