//! Word Game - CLI
//!
//! Wordle-style guessing game with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordgame::{
    commands::{run_simple, score_guess},
    game::GuessEngine,
    output::print_score_result,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordgame",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible answers
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the answer while playing (for debugging)
    #[arg(long, global = true)]
    show_answer: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against an answer and exit
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => load_from_file(path).with_context(|| format!("Cannot use word list '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let words = load_wordlist(&cli.wordlist)?;
    log::debug!("Using {} words", words.len());

    let engine = match cli.seed {
        Some(seed) => GuessEngine::with_seed(&words, seed),
        None => GuessEngine::new(&words),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(engine, cli.show_answer),
        Commands::Simple => {
            let mut engine = engine;
            run_simple(&mut engine, cli.show_answer)
        }
        Commands::Score { guess, answer } => run_score_command(&guess, &answer, &words),
    }
}

fn run_score_command(guess: &str, answer: &str, words: &WordList) -> Result<()> {
    let result = score_guess(guess, answer, words)?;
    print_score_result(&result.guess, &result.answer, &result.score);
    Ok(())
}

fn run_play_command(engine: GuessEngine<'_>, show_answer: bool) -> Result<()> {
    use wordgame::interactive::{App, run_tui};

    let app = App::new(engine, show_answer);
    run_tui(app)
}
