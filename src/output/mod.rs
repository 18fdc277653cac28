//! Terminal output formatting
//!
//! Display utilities for the simple mode and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_keyboard, print_outcome, print_score_result, print_statistics,
};
