//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and side panels for the game.

use super::app::{App, MessageStyle};
use super::input::Phase;
use super::keyboard::KeyboardLayout;
use crate::core::{Cell, CellColor};
use crate::game::{GameState, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Widest distribution bar in the stats panel
const BAR_WIDTH: usize = 15;

/// Where each part of the screen goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub board: Rect,
    pub side: Rect,
    pub keyboard_panel: Rect,
    /// Inside of the keyboard panel's border, where the keys are placed
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the terminal for a board with `rows` guesses
///
/// Drawing and mouse hit-testing both go through this.
#[must_use]
pub fn screen_layout(area: Rect, rows: usize) -> ScreenAreas {
    // One line per row, a blank line between rows, plus the border
    let board_height = (rows as u16) * 2 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Min(board_height),                  // Board and side panel
            Constraint::Length(KeyboardLayout::HEIGHT + 2), // Keyboard
            Constraint::Length(3),                          // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    ScreenAreas {
        header: chunks[0],
        board: main_chunks[0],
        side: main_chunks[1],
        keyboard_panel: chunks[2],
        keyboard: keyboard_block().inner(chunks[2]),
        status: chunks[3],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let areas = screen_layout(f.area(), app.engine.max_attempts());

    render_header(f, app, areas.header);
    render_board(f, app, areas.board);
    render_side_panel(f, app, areas.side);
    render_keyboard(f, app, &areas);
    render_status(f, app, areas.status);
}

fn keyboard_block() -> Block<'static> {
    Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();
    let (text, color) = match state.map(GameState::status) {
        Some(GameStatus::Won) => (
            format!(
                "WORDY | Solved in {}! Press 'n' for a new game",
                state.map_or(0, GameState::attempts_used)
            ),
            Color::Green,
        ),
        Some(GameStatus::Lost) => (
            format!(
                "WORDY | The word was {}. Press 'n' for a new game",
                state.map(|s| s.secret().to_string()).unwrap_or_default()
            ),
            Color::Red,
        ),
        _ => ("WORDY | Guess the five-letter word".to_string(), Color::Cyan),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match app.phase() {
        Phase::Loading => vec![Line::from(Span::styled(
            format!("Loading word list from {}...", app.source),
            Style::default().fg(Color::Yellow),
        ))],
        Phase::Failed => vec![
            Line::from(Span::styled(
                "Could not load the word list",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(app.load_error.clone().unwrap_or_default()),
            Line::from(""),
            Line::from("Press 'r' to retry or 'q' to quit"),
        ],
        Phase::Playing | Phase::Finished => board_lines(app),
    };

    let board = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(board, area);
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let active = app
        .engine
        .state()
        .filter(|s| s.status() == GameStatus::InProgress)
        .map(GameState::active_row);

    let rows = app.engine.board().rows();
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        let mut spans = Vec::with_capacity(row.cells().len() * 2);
        for (col, cell) in row.cells().iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile(cell, active == Some(index)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn tile(cell: &Cell, active: bool) -> Span<'static> {
    match cell.letter {
        Some(letter) => Span::styled(format!(" {letter} "), tile_style(cell.color)),
        None if active => Span::styled(" _ ", Style::default().fg(Color::White)),
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn tile_style(color: CellColor) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match color {
        CellColor::Correct => style.fg(Color::Black).bg(Color::Green),
        CellColor::Present => style.fg(Color::Black).bg(Color::Yellow),
        CellColor::Absent => style.fg(Color::White).bg(Color::DarkGray),
        CellColor::Unset => style.fg(Color::White),
    }
}

fn key_style(color: CellColor) -> Style {
    match color {
        CellColor::Unset => Style::default().fg(Color::Black).bg(Color::Gray),
        CellColor::Absent => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        known => tile_style(known),
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Statistics
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!(
            "Played: {} | Win %: {:.0}",
            stats.total_games,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {} | Best: {}",
            stats.current_streak, stats.max_streak
        )),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = if most == 0 || count == 0 {
            0
        } else {
            (count * BAR_WIDTH / most).max(1)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:>2} ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
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

fn render_keyboard(f: &mut Frame, app: &App, areas: &ScreenAreas) {
    f.render_widget(keyboard_block(), areas.keyboard_panel);

    let phase = app.phase();
    let states = app.engine.board().letter_states();
    let layout = KeyboardLayout::new(areas.keyboard, phase == Phase::Finished);

    for button in layout.buttons() {
        let style = match button.letter() {
            Some(letter) => key_style(states.get(&letter).copied().unwrap_or_default()),
            None => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };
        f.render_widget(
            Paragraph::new(button.label.as_str()).style(style),
            button.area,
        );
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let phase = app.phase();
    let progress_text = match (phase, app.engine.state()) {
        (Phase::Playing, Some(state)) => format!(
            "Guess {}/{}",
            state.active_row() + 1,
            app.engine.max_attempts()
        ),
        (Phase::Finished, _) => "Game over".to_string(),
        (Phase::Failed, _) => "Word list unavailable".to_string(),
        _ => "Loading...".to_string(),
    };
    let progress = Paragraph::new(progress_text).alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let words_text = app
        .engine
        .source()
        .map_or_else(String::new, |v| format!("Words: {}", v.words().len()));
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help_text = match phase {
        Phase::Playing => "Enter: Submit | Backspace: Delete | Ctrl-N: New | Esc: Quit",
        Phase::Finished => "n/Enter: New Game | q: Quit",
        Phase::Failed => "r: Retry | q: Quit",
        Phase::Loading => "q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::Word;
    use crate::interactive::input::InputAction;
    use crate::wordlists::Vocabulary;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let vocabulary: Vocabulary = ["crane", "slate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let mut config = Config::default();
        config.game.seed = Some(3);
        App::with_vocabulary(vocabulary, &config)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn layout_fits_board_and_keyboard() {
        let areas = screen_layout(Rect::new(0, 0, 80, 40), 6);
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 3);
        assert!(areas.board.height >= 13);
        assert_eq!(areas.keyboard_panel.height, KeyboardLayout::HEIGHT + 2);
        assert_eq!(areas.keyboard.height, KeyboardLayout::HEIGHT);
        assert_eq!(areas.keyboard.x, areas.keyboard_panel.x + 1);
        assert_eq!(areas.board.y, 3);
    }

    #[test]
    fn renders_typed_letters_and_keyboard() {
        let mut app = app();
        for c in "sla".chars() {
            app.dispatch(InputAction::Append(c));
        }
        let screen = render(&app, 80, 40);
        assert!(screen.contains("WORDY"));
        assert!(screen.contains(" S   L   A "));
        assert!(screen.contains("ENTER"));
        assert!(screen.contains("BACK"));
        assert!(!screen.contains("RESTART"));
        assert!(screen.contains("Guess 1/6"));
    }

    #[test]
    fn restart_button_after_game_over() {
        let mut app = app();
        let secret = app.engine.state().unwrap().secret().text();
        for c in secret.chars() {
            app.dispatch(InputAction::Append(c));
        }
        app.dispatch(InputAction::Submit);

        let screen = render(&app, 80, 40);
        assert!(screen.contains("RESTART"));
        assert!(screen.contains("Solved in 1!"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app();
        render(&app, 10, 5);
    }

    #[test]
    fn tile_colors() {
        assert_eq!(tile_style(CellColor::Correct).bg, Some(Color::Green));
        assert_eq!(tile_style(CellColor::Present).bg, Some(Color::Yellow));
        assert_eq!(tile_style(CellColor::Absent).bg, Some(Color::DarkGray));
        assert_eq!(key_style(CellColor::Unset).bg, Some(Color::Gray));
    }
}
