//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::MAIN_CONTEXT;
use crate::tui::AppState;

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(MAIN_CONTEXT, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
