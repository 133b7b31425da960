//! TUI application state and logic

use super::input::{self, InputAction, Phase};
use super::keyboard::KeyboardLayout;
use super::rendering;
use crate::config::Config;
use crate::error::GameError;
use crate::game::{GameEvent, GameState, GameStatus, GuessEngine, Statistics};
use crate::wordlists::{PendingWordList, Vocabulary, WordListSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;

/// How long the event loop waits for input before checking the loader again
const TICK: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub engine: GuessEngine<Vocabulary>,
    pub source: WordListSource,
    pub load_error: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    fetch_timeout: Duration,
    pending: Option<PendingWordList>,
    viewport: Rect,
    drawn_version: Option<u64>,
    dirty: bool,
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

impl App {
    /// Create the app and start loading the configured word list
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut app = Self::idle(config);
        app.start_loading();
        app
    }

    /// Create the app with a vocabulary that is already loaded
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary, config: &Config) -> Self {
        let mut app = Self::idle(config);
        app.install(vocabulary);
        app
    }

    fn idle(config: &Config) -> Self {
        Self {
            engine: GuessEngine::new(config.game.max_attempts, config.game.seed),
            source: config.words.source(),
            load_error: None,
            messages: Vec::new(),
            stats: Statistics::new(config.game.max_attempts),
            should_quit: false,
            fetch_timeout: config.words.fetch_timeout(),
            pending: None,
            viewport: Rect::default(),
            drawn_version: None,
            dirty: true,
        }
    }

    /// Start (or restart) loading the word list in the background
    ///
    /// A load that is still running is abandoned.
    pub fn start_loading(&mut self) {
        if let Some(old) = self.pending.take() {
            tracing::debug!(source = %old.source(), "discarding pending word list load");
        }
        self.load_error = None;
        self.add_message(
            &format!("Loading word list from {}...", self.source),
            MessageStyle::Info,
        );
        self.pending = Some(PendingWordList::spawn(self.source.clone(), self.fetch_timeout));
    }

    /// Check whether the background load finished; call once per tick
    pub fn poll_word_list(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        let source = pending.source().clone();
        self.pending = None;

        match result {
            Ok(vocabulary) => self.install(vocabulary),
            Err(err) => {
                tracing::warn!(%source, error = %err, "word list load failed");
                self.fail_loading(err.to_string());
            }
        }
    }

    fn install(&mut self, vocabulary: Vocabulary) {
        let count = vocabulary.words().len();
        match self.engine.attach(vocabulary) {
            Ok(event) => {
                self.add_message(
                    &format!("Loaded {count} words. Start guessing!"),
                    MessageStyle::Info,
                );
                self.on_event(event);
            }
            Err(err) => self.fail_loading(err.to_string()),
        }
    }

    fn fail_loading(&mut self, reason: String) {
        self.add_message(
            &format!("Could not load word list: {reason}"),
            MessageStyle::Error,
        );
        self.add_message("Press 'r' to retry or 'q' to quit.", MessageStyle::Info);
        self.load_error = Some(reason);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            return Phase::Loading;
        }
        match self.engine.status() {
            None => Phase::Failed,
            Some(GameStatus::InProgress) => Phase::Playing,
            Some(_) => Phase::Finished,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(action) = input::map_key(key, self.phase()) {
            self.dispatch(action);
        }
    }

    /// Left clicks on the on-screen keyboard act like key presses
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let phase = self.phase();
        let areas = rendering::screen_layout(self.viewport, self.engine.max_attempts());
        let layout = KeyboardLayout::new(areas.keyboard, phase == Phase::Finished);
        if let Some(action) = layout
            .hit_test(mouse.column, mouse.row)
            .and_then(|action| input::accept(phase, action))
        {
            self.dispatch(action);
        }
    }

    pub fn dispatch(&mut self, action: InputAction) {
        tracing::trace!(?action, "dispatch");
        match action {
            InputAction::Quit => self.should_quit = true,
            InputAction::Retry => self.start_loading(),
            InputAction::Restart => self.restart(),
            InputAction::Append(letter) => self.apply(|engine| engine.append_letter(letter)),
            InputAction::Delete => self.apply(GuessEngine::delete_letter),
            InputAction::Submit => self.apply(GuessEngine::submit_guess),
        }
    }

    /// New game with the loaded list, or reload the list if there is none
    pub fn restart(&mut self) {
        if self.engine.source().is_some() {
            self.messages.clear();
            self.apply(GuessEngine::restart);
        } else {
            self.start_loading();
        }
    }

    fn apply<F>(&mut self, op: F)
    where
        F: FnOnce(&mut GuessEngine<Vocabulary>) -> Result<GameEvent, GameError>,
    {
        match op(&mut self.engine) {
            Ok(event) => self.on_event(event),
            Err(err) if err.is_user_facing() => {
                self.add_message(&format!("Not a valid word! {err}"), MessageStyle::Error);
            }
            Err(err) => tracing::trace!(%err, "input ignored"),
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::NewGame { attempts } => {
                self.add_message(
                    &format!("New game! You have {attempts} tries."),
                    MessageStyle::Info,
                );
            }
            GameEvent::RowEvaluated {
                guess,
                feedback,
                status,
                ..
            } => {
                let attempts = self.engine.state().map_or(0, GameState::attempts_used);
                match status {
                    GameStatus::InProgress => {
                        self.add_message(
                            &format!("{guess} {}", feedback.to_emoji()),
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Won => {
                        self.stats.record_win(attempts);
                        let celebration = match attempts {
                            1 => "Game Won! Genius, first try!",
                            2 => "Game Won! Magnificent!",
                            3 => "Game Won! Impressive!",
                            4 => "Game Won! Splendid!",
                            5 => "Game Won! Great!",
                            _ => "Game Won! Phew!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.record_loss();
                        let secret = self
                            .engine
                            .state()
                            .map(|s| s.secret().to_string())
                            .unwrap_or_default();
                        self.add_message(
                            &format!("Game Lost! The word was {secret}."),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                }
            }
            GameEvent::LetterAppended { .. } | GameEvent::LetterDeleted { .. } => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
        self.dirty = true;
    }

    /// Whether anything changed since the last frame
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.drawn_version != Some(self.engine.version())
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Record the frame that was just drawn and its size
    pub fn mark_drawn(&mut self, area: Rect) {
        self.viewport = area;
        self.drawn_version = Some(self.engine.version());
        self.dirty = false;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "tui exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_word_list();

        if app.needs_redraw() {
            let frame = terminal.draw(|f| rendering::ui(f, &app))?;
            app.mark_drawn(frame.area);
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(&key),
                Event::Mouse(mouse) => app.handle_mouse(&mouse),
                Event::Resize(..) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellColor, Word};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;
    use std::thread;

    fn config(seed: u64) -> Config {
        let mut config = Config::default();
        config.game.seed = Some(seed);
        config
    }

    /// App playing against `secret`, with `others` also accepted as guesses
    fn app_with_secret(secret: &str, others: &[&str]) -> App {
        let vocabulary: Vocabulary = std::iter::once(secret)
            .chain(others.iter().copied())
            .map(|w| Word::new(w).unwrap())
            .collect();
        let mut app = App::with_vocabulary(vocabulary, &config(1));
        while app.engine.state().unwrap().secret().text() != secret {
            app.engine.restart().unwrap();
        }
        app
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn wait_for_load(app: &mut App) {
        for _ in 0..500 {
            app.poll_word_list();
            if app.phase() != Phase::Loading {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("word list did not load");
    }

    #[test]
    fn preloaded_app_is_playing() {
        let app = app_with_secret("crane", &[]);
        assert_eq!(app.phase(), Phase::Playing);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn typing_and_submitting_a_winning_guess() {
        let mut app = app_with_secret("crane", &["slate"]);
        type_keys(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase(), Phase::Playing);

        type_keys(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase(), Phase::Finished);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app
            .messages
            .iter()
            .any(|m| m.style == MessageStyle::Success));
    }

    #[test]
    fn invalid_word_is_reported() {
        let mut app = app_with_secret("crane", &["slate"]);
        type_keys(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Not a valid word!"));
        assert_eq!(app.engine.state().unwrap().active_col(), 5);
        assert_eq!(app.engine.state().unwrap().attempts_used(), 0);
    }

    #[test]
    fn losing_reveals_secret() {
        let mut app = app_with_secret("crane", &["slate"]);
        for _ in 0..6 {
            type_keys(&mut app, "slate");
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.phase(), Phase::Finished);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));

        // Letters are ignored once the game is over
        let version = app.engine.version();
        type_keys(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.version(), version);
    }

    #[test]
    fn restart_after_game_over() {
        let mut app = app_with_secret("crane", &["slate"]);
        type_keys(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase(), Phase::Finished);

        type_keys(&mut app, "n");
        assert_eq!(app.phase(), Phase::Playing);
        let state = app.engine.state().unwrap();
        assert_eq!(state.active_row(), 0);
        assert_eq!(state.attempts_used(), 0);
        assert!(app
            .engine
            .board()
            .rows()
            .iter()
            .all(|r| r.cells().iter().all(|c| c.color == CellColor::Unset)));
    }

    #[test]
    fn mouse_clicks_type_letters() {
        let mut app = app_with_secret("crane", &[]);
        let viewport = Rect::new(0, 0, 80, 40);
        app.mark_drawn(viewport);

        let areas = rendering::screen_layout(viewport, app.engine.max_attempts());
        let layout = KeyboardLayout::new(areas.keyboard, false);
        let button = layout
            .buttons()
            .iter()
            .find(|b| b.letter() == Some('C'))
            .unwrap()
            .clone();

        app.handle_mouse(&MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button.area.x + 1,
            row: button.area.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.engine.board().rows()[0].cells()[0].letter, Some('C'));

        // Right clicks do nothing
        app.handle_mouse(&MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: button.area.x + 1,
            row: button.area.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.engine.state().unwrap().active_col(), 1);
    }

    #[test]
    fn redraw_follows_engine_version() {
        let mut app = app_with_secret("crane", &[]);
        assert!(app.needs_redraw());
        app.mark_drawn(Rect::new(0, 0, 80, 40));
        assert!(!app.needs_redraw());

        type_keys(&mut app, "c");
        assert!(app.needs_redraw());
        app.mark_drawn(Rect::new(0, 0, 80, 40));

        // Ignored input changes nothing
        press(&mut app, KeyCode::Enter);
        assert!(!app.needs_redraw());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with_secret("crane", &[]);
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }

    #[test]
    fn background_load_becomes_playable() {
        let mut app = App::new(&config(5));
        assert_eq!(app.phase(), Phase::Loading);

        // Game keys are ignored while loading
        type_keys(&mut app, "a");
        assert!(!app.engine.is_ready());

        wait_for_load(&mut app);
        assert_eq!(app.phase(), Phase::Playing);
    }

    #[test]
    fn failed_load_can_be_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("words.txt");

        let mut config = config(5);
        config.words.source = path.display().to_string();
        let mut app = App::new(&config);
        wait_for_load(&mut app);

        assert_eq!(app.phase(), Phase::Failed);
        assert!(app.load_error.is_some());
        type_keys(&mut app, "a");
        assert!(!app.engine.is_ready());

        std::fs::write(&path, "crane\nslate\n").unwrap();
        type_keys(&mut app, "r");
        assert_eq!(app.phase(), Phase::Loading);
        wait_for_load(&mut app);
        assert_eq!(app.phase(), Phase::Playing);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn restart_while_loading_discards_pending_load() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("missing.txt");

        let mut config = config(5);
        config.words.source = path.display().to_string();
        let mut app = App::new(&config);
        assert_eq!(
            app.pending.as_ref().map(PendingWordList::source),
            Some(&WordListSource::File(path))
        );

        app.source = WordListSource::Embedded;
        app.dispatch(InputAction::Restart);
        assert_eq!(app.phase(), Phase::Loading);
        assert_eq!(
            app.pending.as_ref().map(PendingWordList::source),
            Some(&WordListSource::Embedded)
        );

        wait_for_load(&mut app);
        assert_eq!(app.phase(), Phase::Playing);
        assert!(app.load_error.is_none());
        assert!(
            !app.messages
                .iter()
                .any(|m| m.text.starts_with("Could not load"))
        );
    }
}
