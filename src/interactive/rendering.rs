//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Cell, MAX_GUESSES};
use crate::game::{KEYBOARD_ROWS, KeyboardSummary, LetterStatus, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board and keyboard
            Constraint::Length(3),  // Banner
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_banner(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD GAME")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 + 2),
            Constraint::Min(5),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, &app.engine.letter_status_summary(), chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let in_progress = !engine.outcome().is_over();

    let lines: Vec<Line> = (0..MAX_GUESSES)
        .map(|row| {
            let active = row == engine.current_row();
            // A lost game's last row holds the revealed answer, not a scored guess
            let scored = row < engine.current_row() || (active && engine.outcome() == Outcome::Won);
            let revealed = active && engine.outcome() == Outcome::Lost;

            let marker = if active && in_progress { "▶ " } else { "  " };
            let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Cyan))];
            for (column, cell) in engine.board().row(row).iter().enumerate() {
                let focused = active && in_progress && column == engine.current_column();
                spans.push(Span::styled(cell_text(cell), cell_style(cell, scored, focused)));
                spans.push(Span::raw(" "));
            }
            if revealed {
                spans.push(Span::styled("← answer", Style::default().fg(Color::Red)));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn cell_text(cell: &Cell) -> String {
    format!(
        " {} ",
        cell.letter
            .map_or(' ', |l| char::from(l.to_ascii_uppercase()))
    )
}

/// Style for a board cell
///
/// Flags only colour submitted rows; the cursor cell is reversed.
pub(crate) fn cell_style(cell: &Cell, scored: bool, focused: bool) -> Style {
    let base = if scored && !cell.is_empty() {
        status_style(LetterStatus::from(cell.feedback()))
    } else {
        Style::default().fg(Color::White).bg(Color::Black)
    };

    if focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base.add_modifier(Modifier::BOLD)
    }
}

pub(crate) fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::InPlace => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::InWord => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, summary: &KeyboardSummary, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(format!(" {c} "), status_style(summary.status(c))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let (title, content, color) = match engine.outcome() {
        Outcome::Won => (
            " Press Enter for a new game or 'q' to quit ",
            "YOU WIN!".to_string(),
            Color::Green,
        ),
        Outcome::Lost => (
            " Press Enter for a new game or 'q' to quit ",
            "SORRY, GAME OVER!".to_string(),
            Color::Red,
        ),
        Outcome::InProgress => {
            let hint = if engine.can_submit() {
                "ready, press Enter"
            } else {
                "type a word"
            };
            (
                " Enter: Submit | ←/→: Move | Backspace: Delete ",
                format!("Guess: {} ({hint})", engine.current_guess().to_uppercase()),
                Color::Yellow,
            )
        }
    };

    let banner = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(banner, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let guess_text = format!(
        "Guess {}/{MAX_GUESSES}",
        (app.engine.guesses_used() + 1).min(MAX_GUESSES)
    );
    f.render_widget(Paragraph::new(guess_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let answer_text = if app.show_answer || app.engine.outcome().is_over() {
        format!("Answer: {}", app.engine.answer().text().to_uppercase())
    } else {
        String::new()
    };
    f.render_widget(Paragraph::new(answer_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GuessEngine;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn words() -> WordList {
        WordList::new(words_from_slice(&["crane", "trace"])).unwrap()
    }

    #[test]
    fn renders_typed_guess_and_hides_answer() {
        let words = words();
        let mut app = App::new(GuessEngine::with_answer(&words, Word::new("crane").unwrap()), false);
        for c in "tra".chars() {
            app.engine.enter_letter(c);
        }

        let screen = render(&app);
        assert!(screen.contains("Guess: TRA"));
        assert!(!screen.contains("Answer: CRANE"));
    }

    #[test]
    fn renders_win_banner() {
        let words = words();
        let mut app = App::new(GuessEngine::with_answer(&words, Word::new("crane").unwrap()), true);
        for c in "crane".chars() {
            app.engine.enter_letter(c);
        }
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("YOU WIN!"));
        assert!(screen.contains("Answer: CRANE"));
    }

    #[test]
    fn scored_cells_use_status_colours() {
        let cell = Cell {
            letter: Some(b'a'),
            in_word: true,
            in_place: false,
        };
        assert_eq!(cell_style(&cell, true, false).bg, Some(Color::Yellow));
        assert_eq!(cell_style(&cell, false, false).bg, Some(Color::Black));
        assert!(
            cell_style(&cell, false, true)
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }
}
