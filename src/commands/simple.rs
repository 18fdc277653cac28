//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GuessEngine, Rejection, Statistics, Submission};
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<D: Dictionary>(
    engine: &mut GuessEngine<'_, D>,
    show_answer: bool,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║              Word Game - Simple Mode         ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word. After each guess:");
    println!("  - {} letter is in the right spot", " A ".black().on_green());
    println!("  - {} letter is in the word", " A ".black().on_yellow());
    println!("  - {} letter is not in the word", " A ".white().on_bright_black());
    println!("\nCommands: 'new' for a new game, 'quit' to exit\n");

    let mut stats = Statistics::default();

    loop {
        print_board(engine);
        print_keyboard(&engine.letter_status_summary());
        if show_answer {
            println!("Answer: {}", engine.answer().text().to_uppercase());
        }

        let Some(input) = get_user_input(&format!("Guess {}", engine.guesses_used() + 1))? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                engine.new_game();
                println!("\n🔄 New game started!");
                continue;
            }
            word => {
                if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                    println!("{}", format!("❌ Enter exactly {WORD_LENGTH} letters").red());
                    continue;
                }
                type_guess(engine, word);
            }
        }

        match engine.submit_guess() {
            Submission::Rejected(Rejection::NotInWordList) => {
                println!("{}", "❌ Not in word list".red());
            }
            Submission::Rejected(rejection) => {
                println!("{}", format!("❌ Guess rejected: {rejection:?}").red());
            }
            Submission::Scored { outcome, .. } if outcome.is_over() => {
                print_board(engine);
                print_outcome(outcome, engine.answer(), engine.guesses_used());
                stats.record(outcome, engine.guesses_used());
                print_statistics(&stats);

                let again = get_user_input("\nPlay again? (yes/no)")?.unwrap_or_default();
                if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                    break;
                }
                engine.new_game();
                println!("\n🔄 New game started!");
            }
            Submission::Scored { .. } => {}
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Replace the active row's letters with `word`
fn type_guess<D: Dictionary>(engine: &mut GuessEngine<'_, D>, word: &str) {
    engine.select_column(WORD_LENGTH - 1);
    for _ in 0..WORD_LENGTH {
        engine.backspace();
    }
    for letter in word.chars() {
        engine.enter_letter(letter);
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
