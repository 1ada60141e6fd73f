//! Custom color entry for the selected cell.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::services::PaletteIntent;
use crate::shortcuts::{Action, INPUT_CONTEXT};
use crate::tui::{AppState, InputMode};

/// Longest accepted input; `hsl(360.0deg, 100.0%, 100.0%)` fits.
const MAX_INPUT_LEN: usize = 40;

/// Handle input while typing a color
pub fn handle_color_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let InputMode::ColorInput(buffer) = &mut state.mode else {
        return Ok(false);
    };

    match state.shortcuts.lookup(INPUT_CONTEXT, key) {
        Some(Action::Confirm) => {
            let input = std::mem::take(buffer);
            state.mode = InputMode::Normal;
            let position = state.selected;
            match state.apply(PaletteIntent::SetColor(position, input)) {
                Ok(()) => {
                    if let Some(cell) = state.palette().get(position) {
                        let message = format!("Cell {} is {}", position + 1, cell.color);
                        state.set_status(message);
                    }
                }
                Err(e) => state.set_error(e.to_string()),
            }
        }
        Some(Action::Cancel) => {
            state.mode = InputMode::Normal;
            state.set_status("Cancelled");
        }
        Some(Action::Quit) => {
            state.should_quit = true;
            return Ok(true);
        }
        _ => match key.code {
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && buffer.len() < MAX_INPUT_LEN =>
            {
                buffer.push(c);
            }
            _ => {}
        },
    }

    Ok(false)
}
