//! Action dispatch for the main palette view.

use anyhow::Result;
use tracing::debug;

use crate::services::{HarmonyKind, PaletteIntent};
use crate::shortcuts::Action;
use crate::tui::{clipboard, AppState, InputMode};

/// Executes `action`. Returns true when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    let len = state.palette().len();
    let step = state.config.palette.shade_step;

    if let Some(intent) = action.intent(state.selected, len, step) {
        apply_intent(state, action, intent);
        return Ok(false);
    }

    match action {
        Action::SelectPrevious => state.selected = state.selected.saturating_sub(1),
        Action::SelectNext => state.selected = (state.selected + 1).min(len - 1),
        Action::JumpToFirst => state.selected = 0,
        Action::JumpToLast => state.selected = len - 1,
        Action::CycleHarmony => apply_next_harmony(state),
        Action::EnterColor => {
            state.mode = InputMode::ColorInput(String::new());
            state.set_status("Type a hex or hsl() color, Enter to apply, Esc to cancel");
        }
        Action::CopyShareUrl => {
            let url = state.share_url();
            match clipboard::copy_text(&url) {
                Ok(()) => state.set_status(format!("Copied {url}")),
                Err(e) => state.set_error(format!("{e:#}")),
            }
        }
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        // Handled by the intent mapping above or only bound in other contexts
        Action::Regenerate
        | Action::ToggleLock
        | Action::Grow
        | Action::Shrink
        | Action::Lighten
        | Action::Darken
        | Action::Confirm
        | Action::Cancel => {}
    }

    Ok(false)
}

fn apply_intent(state: &mut AppState, action: Action, intent: PaletteIntent) {
    debug!(action = action.id(), "Dispatching intent");
    match state.apply(intent) {
        Ok(()) => {
            let message = match action {
                Action::Regenerate => "Regenerated unlocked colors".to_string(),
                Action::ToggleLock => {
                    let locked = state
                        .palette()
                        .get(state.selected)
                        .is_some_and(|cell| cell.locked);
                    format!(
                        "Cell {} {}",
                        state.selected + 1,
                        if locked { "locked" } else { "unlocked" }
                    )
                }
                Action::Grow | Action::Shrink => format!("{} colors", state.palette().len()),
                _ => state
                    .palette()
                    .get(state.selected)
                    .map(|cell| format!("Cell {} is {}", state.selected + 1, cell.color))
                    .unwrap_or_default(),
            };
            state.set_status(message);
        }
        Err(e) => state.set_error(e.to_string()),
    }
}

/// Applies the next harmony scheme, using the selected color's hue as base.
fn apply_next_harmony(state: &mut AppState) {
    let index = state
        .harmony_index
        .map_or(0, |i| (i + 1) % HarmonyKind::ALL.len());
    let kind = HarmonyKind::ALL[index];
    let hue = state
        .palette()
        .get(state.selected)
        .map_or(0.0, |cell| cell.color.to_hsl().h);

    match state.apply(PaletteIntent::ApplyHarmony(kind, hue)) {
        Ok(()) => {
            state.harmony_index = Some(index);
            state.set_status(format!("Harmony: {kind} around {hue:.0}°"));
        }
        Err(e) => state.set_error(e.to_string()),
    }
}
