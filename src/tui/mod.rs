//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the swatch row and status bar widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod clipboard;
pub mod handlers;
pub mod status_bar;
pub mod swatches;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::error::PaletteError;
use crate::models::Palette;
use crate::services::{
    HarmonyKind, PaletteIntent, PaletteStore, ShareState, ShareUrl, SHARE_PARAM,
};
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use status_bar::StatusBar;
pub use swatches::SwatchRow;
pub use theme::Theme;

/// What the keyboard currently drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Palette navigation and edits
    Normal,
    /// Typing a color for the selected cell
    ColorInput(String),
}

/// Application state for the TUI
pub struct AppState {
    /// Owner of the palette
    pub store: PaletteStore,
    /// Loaded configuration
    pub config: Config,
    /// Share link kept in sync with the palette
    pub share: ShareUrl,
    /// Highlighted cell
    pub selected: usize,
    /// Current input mode
    pub mode: InputMode,
    /// Index into `HarmonyKind::ALL` of the last applied harmony
    pub harmony_index: Option<usize>,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Status line text
    pub status_message: String,
    /// Error shown until dismissed
    pub error_message: Option<String>,
    /// Whether the key help line is visible
    pub show_help: bool,
    /// Color theme
    pub theme: Theme,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state, seeding the palette from `token` when it decodes
    /// and otherwise generating `count` (or `palette.default_size`) colors.
    #[must_use]
    pub fn new(config: Config, token: Option<&str>, count: Option<usize>) -> Self {
        Self::with_store(PaletteStore::new(), config, token, count)
    }

    /// Like [`AppState::new`] with an explicit store, for deterministic tests.
    #[must_use]
    pub fn with_store(
        mut store: PaletteStore,
        config: Config,
        token: Option<&str>,
        count: Option<usize>,
    ) -> Self {
        let mut share = ShareUrl::parse(&config.share.base_url);
        if let Some(token) = token {
            share.set(SHARE_PARAM, token);
        }

        let size = count.unwrap_or(config.palette.default_size);
        store.load(&share, size);
        store.publish(&mut share);

        let status_message = format!(
            "{} colors. Space regenerates unlocked swatches.",
            store.palette().len()
        );

        Self {
            store,
            share,
            selected: 0,
            mode: InputMode::Normal,
            harmony_index: None,
            shortcuts: ShortcutRegistry::new(),
            status_message,
            error_message: None,
            show_help: config.ui.show_help_on_startup,
            theme: Theme::default(),
            should_quit: false,
            config,
        }
    }

    /// The current palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        self.store.palette()
    }

    /// The share link for the current palette.
    #[must_use]
    pub fn share_url(&self) -> String {
        self.share.to_string()
    }

    /// Sends an intent to the store, then republishes the share link and
    /// keeps the selection inside the palette.
    pub fn apply(&mut self, intent: PaletteIntent) -> Result<(), PaletteError> {
        self.store.dispatch(intent)?;
        self.store.publish(&mut self.share);
        self.selected = self.selected.min(self.palette().len() - 1);
        Ok(())
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            // Resize events only need the redraw at the top of the loop
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Sets up the terminal, runs the loop and always restores the terminal.
pub fn run(config: Config, token: Option<&str>, count: Option<usize>) -> Result<String> {
    let mut state = AppState::new(config, token, count);
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result?;
    Ok(state.share_url())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let background = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(background, f.area());

    let status_height = if state.show_help { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar
            Constraint::Min(5),                // Swatches
            Constraint::Length(status_height), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    SwatchRow::render(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);
}

/// Render title bar with palette size and lock count
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.palette();
    let locked = palette.locked_positions().len();
    let harmony = state
        .harmony_index
        .map(|i| format!("  ·  {}", HarmonyKind::ALL[i]))
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} colors  ·  {locked} locked  ·  cell {}{harmony}",
                palette.len(),
                state.selected + 1
            ),
            Style::default().fg(state.theme.text_secondary),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.primary))
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Handle key events. Returns true when the app should quit.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // Errors block input until dismissed with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    match state.mode {
        InputMode::Normal => handlers::handle_main_input(state, key),
        InputMode::ColorInput(_) => handlers::handle_color_input(state, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PaletteCodec;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(token: Option<&str>) -> AppState {
        AppState::with_store(PaletteStore::seeded(7), Config::new(), token, Some(5))
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_state_publishes_share_url() {
        let state = app(None);
        assert_eq!(state.palette().len(), 5);
        let token = state.share.get(SHARE_PARAM).unwrap();
        assert_eq!(
            PaletteCodec::decode_colors(&token).unwrap(),
            state.palette().colors()
        );
        assert!(state.share_url().starts_with("http://localhost:5173/?colors="));
    }

    #[test]
    fn test_new_state_from_token() {
        let token = PaletteCodec::encode(&["#112233", "#445566"]);
        let state = app(Some(&token));
        assert_eq!(state.palette().hex_colors(), vec!["#112233", "#445566"]);

        let state = app(Some("garbage"));
        assert_eq!(state.palette().len(), 5);
    }

    #[test]
    fn test_space_regenerates_unlocked_only() {
        let mut state = app(None);
        press(&mut state, KeyCode::Char('l'));
        let locked = *state.palette().get(0).unwrap();
        let before_url = state.share_url();

        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.palette().get(0), Some(&locked));
        assert_ne!(state.share_url(), before_url);
    }

    #[test]
    fn test_navigation_and_resize_keep_selection_in_range() {
        let mut state = app(None);
        press(&mut state, KeyCode::End);
        assert_eq!(state.selected, 4);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.selected, 4);

        press(&mut state, KeyCode::Char('-'));
        assert_eq!(state.palette().len(), 4);
        assert_eq!(state.selected, 3);

        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.palette().len(), 5);

        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_color_input() {
        let mut state = app(None);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('c'));
        assert!(matches!(state.mode, InputMode::ColorInput(_)));

        // 'l' is text here, not a lock toggle
        type_text(&mut state, "hsl(120, 100%, 50%)");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.palette().get(1).unwrap().color.to_hex(), "#00FF00");
        assert!(!state.palette().get(1).unwrap().locked);
    }

    #[test]
    fn test_invalid_color_shows_error_and_keeps_palette() {
        let mut state = app(None);
        let before = state.palette().clone();

        press(&mut state, KeyCode::Char('c'));
        type_text(&mut state, "#12");
        press(&mut state, KeyCode::Enter);
        assert!(state.error_message.is_some());
        assert_eq!(state.palette(), &before);

        // Input is blocked until the error is dismissed
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.palette(), &before);
        press(&mut state, KeyCode::Esc);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_escape_cancels_color_input() {
        let mut state = app(None);
        let before = state.palette().clone();
        press(&mut state, KeyCode::Char('c'));
        type_text(&mut state, "#000");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.palette(), &before);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_shade_keys() {
        let mut state = app(Some(&PaletteCodec::encode(&["#808080"])));
        press(&mut state, KeyCode::Char(']'));
        assert!(state.palette().get(0).unwrap().color.to_hsl().l > 59.5);
        press(&mut state, KeyCode::Char('['));
        press(&mut state, KeyCode::Char('['));
        assert!(state.palette().get(0).unwrap().color.to_hsl().l < 41.0);
    }

    #[test]
    fn test_harmony_cycles_and_respects_locks() {
        let mut state = app(None);
        press(&mut state, KeyCode::Char('l'));
        let locked = *state.palette().get(0).unwrap();

        press(&mut state, KeyCode::Char('h'));
        assert_eq!(state.harmony_index, Some(0));
        press(&mut state, KeyCode::Char('h'));
        assert_eq!(state.harmony_index, Some(1));
        assert_eq!(state.palette().get(0), Some(&locked));
    }

    #[test]
    fn test_quit() {
        let mut state = app(None);
        assert!(press(&mut state, KeyCode::Char('q')));
        assert!(state.should_quit);
    }
}
