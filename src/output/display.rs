//! Display functions for the line-oriented front-ends

use super::formatters::{cell_tile, key_tile, score_to_emoji};
use crate::core::{MAX_GUESSES, Score, Word};
use crate::game::{GuessEngine, KEYBOARD_ROWS, KeyboardSummary, Outcome, Statistics};
use crate::wordlists::Dictionary;
use colored::Colorize;

/// Print every board row, flags shown only for submitted rows
pub fn print_board<D: Dictionary>(engine: &GuessEngine<'_, D>) {
    println!();
    for row in 0..MAX_GUESSES {
        // A lost game's last row holds the revealed answer, not a scored guess
        let scored = row < engine.current_row()
            || (row == engine.current_row() && engine.outcome() == Outcome::Won);
        let marker = if row == engine.current_row() && !engine.outcome().is_over() {
            "▶".bright_cyan()
        } else {
            " ".normal()
        };
        let tiles: String = engine
            .board()
            .row(row)
            .iter()
            .map(|cell| cell_tile(cell, scored).to_string())
            .collect();
        println!("  {marker} {tiles}");
    }
    println!();
}

/// Print the keyboard coloured by letter status
pub fn print_keyboard(summary: &KeyboardSummary) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|c| key_tile(c, summary.status(c)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the win or lose banner
pub fn print_outcome(outcome: Outcome, answer: &Word, guesses_used: usize) {
    match outcome {
        Outcome::Won => println!(
            "{}",
            format!(
                "🎉 YOU WIN! Solved in {guesses_used} {}",
                if guesses_used == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        Outcome::Lost => println!(
            "{} The answer was {}",
            "SORRY, GAME OVER!".red().bold(),
            answer.text().to_uppercase().bright_yellow().bold()
        ),
        Outcome::InProgress => {}
    }
}

/// Print the result of scoring one guess against an answer
pub fn print_score_result(guess: &Word, answer: &Word, score: &Score) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", score_to_emoji(score));
    println!(
        "{} in place, {} in word",
        score.count_in_place().to_string().green(),
        score.count_in_word().to_string().yellow()
    );
}

/// Print session statistics with a guess distribution bar chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    if stats.games_won == 0 {
        return;
    }
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution[guesses];
        let width = count * 30 / stats.games_won;
        println!(
            "  {guesses}: {}{} {count}",
            "█".repeat(width).green(),
            "░".repeat(30 - width).bright_black()
        );
    }
}
