//! TUI application state and logic

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::game::{GuessEngine, Outcome, Rejection, Statistics, Submission};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: GuessEngine<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub show_answer: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: GuessEngine<'a>, show_answer: bool) -> Self {
        Self {
            engine,
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            show_answer,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.engine.outcome().is_over() => self.handle_game_over_key(key.code),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => self.engine.enter_letter(c),
            KeyCode::Backspace => self.engine.backspace(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left => {
                let column = self.engine.current_column().saturating_sub(1);
                self.engine.select_column(column);
            }
            KeyCode::Right => self.engine.select_column(self.engine.current_column() + 1),
            KeyCode::Home => self.engine.select_column(0),
            KeyCode::End => self.engine.select_column(WORD_LENGTH - 1),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.engine.submit_guess() {
            Submission::Rejected(Rejection::Incomplete) => {
                self.add_message(
                    &format!("Word must be exactly {WORD_LENGTH} letters!"),
                    MessageStyle::Error,
                );
            }
            Submission::Rejected(Rejection::NotInWordList) => {
                let guess = self.engine.current_guess().to_uppercase();
                self.add_message(
                    &format!("'{guess}' is not in the word list"),
                    MessageStyle::Error,
                );
            }
            Submission::Rejected(Rejection::GameOver) => {}
            Submission::Scored { outcome, .. } => self.finish_turn(outcome),
        }
    }

    fn finish_turn(&mut self, outcome: Outcome) {
        let guesses = self.engine.guesses_used();
        match outcome {
            Outcome::InProgress => return,
            Outcome::Won => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                let answer = self.engine.answer().text().to_uppercase();
                self.add_message(
                    &format!("Out of guesses! The answer was {answer}"),
                    MessageStyle::Error,
                );
            }
        }
        self.stats.record(outcome, guesses);
        self.add_message("Press Enter for a new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    if app.stats.total_games > 0 {
        log::info!(
            "Session over: {} of {} games won",
            app.stats.games_won,
            app.stats.total_games
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> WordList {
        WordList::new(words_from_slice(&["crane", "trace", "slate"])).unwrap()
    }

    fn crane_app(words: &WordList) -> App<'_> {
        App::new(GuessEngine::with_answer(words, Word::new("crane").unwrap()), false)
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn welcome_message_states_rules() {
        let words = words();
        let app = crane_app(&words);
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].text, "Guess the 5-letter word in 6 tries.");
    }

    #[test]
    fn typing_and_backspace_edit_current_row() {
        let words = words();
        let mut app = crane_app(&words);

        type_word(&mut app, "sla");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.current_guess(), "sl");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.engine.current_column(), 1);
    }

    #[test]
    fn short_guess_reports_error() {
        let words = words();
        let mut app = crane_app(&words);

        type_word(&mut app, "cra");
        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.engine.current_row(), 0);
    }

    #[test]
    fn winning_records_stats_and_enter_restarts() {
        let words = words();
        let mut app = crane_app(&words);

        type_word(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.outcome(), Outcome::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.engine.outcome(), Outcome::Won);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.outcome(), Outcome::InProgress);
        assert!(app.engine.board().is_blank());
        assert_ne!(app.engine.answer().text(), "crane");
    }

    #[test]
    fn quit_keys() {
        let words = words();
        let mut app = App::new(GuessEngine::new(&words), false);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(GuessEngine::new(&words), false);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while the game runs");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let words = words();
        let mut app = App::new(GuessEngine::new(&words), false);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
