//! Centralized shortcut and action system.
//!
//! This module maps key events to actions and actions to palette intents,
//! connecting the help line with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::models::ShadeDirection;
use crate::services::PaletteIntent;

/// Context for swatch navigation and palette edits.
pub const MAIN_CONTEXT: &str = "main";

/// Context while typing a custom color.
pub const INPUT_CONTEXT: &str = "color_input";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    SelectPrevious,
    SelectNext,
    JumpToFirst,
    JumpToLast,

    // === PALETTE ===
    Regenerate,
    ToggleLock,
    Grow,
    Shrink,
    Lighten,
    Darken,
    CycleHarmony,

    // === INPUT ===
    EnterColor,
    Confirm,

    // === SHARING ===
    CopyShareUrl,

    // === GENERAL ===
    ToggleHelp,
    Cancel,
    Quit,
}

impl Action {
    /// Stable identifier for the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SelectPrevious => "select_previous",
            Self::SelectNext => "select_next",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::Regenerate => "regenerate",
            Self::ToggleLock => "toggle_lock",
            Self::Grow => "grow",
            Self::Shrink => "shrink",
            Self::Lighten => "lighten",
            Self::Darken => "darken",
            Self::CycleHarmony => "cycle_harmony",
            Self::EnterColor => "enter_color",
            Self::Confirm => "confirm",
            Self::CopyShareUrl => "copy_share_url",
            Self::ToggleHelp => "toggle_help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }

    /// Short label shown in the help line.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SelectPrevious | Self::SelectNext => "select",
            Self::JumpToFirst => "first",
            Self::JumpToLast => "last",
            Self::Regenerate => "regenerate",
            Self::ToggleLock => "lock",
            Self::Grow => "more",
            Self::Shrink => "fewer",
            Self::Lighten => "lighter",
            Self::Darken => "darker",
            Self::CycleHarmony => "harmony",
            Self::EnterColor => "set color",
            Self::Confirm => "apply",
            Self::CopyShareUrl => "copy link",
            Self::ToggleHelp => "help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }

    /// The palette intent for this action, if it maps to one directly.
    ///
    /// `selected` is the highlighted cell and `len` the current palette
    /// length.
    #[must_use]
    pub fn intent(&self, selected: usize, len: usize, shade_step: f32) -> Option<PaletteIntent> {
        match self {
            Self::Regenerate => Some(PaletteIntent::RegenerateUnlocked),
            Self::ToggleLock => Some(PaletteIntent::ToggleLock(selected)),
            Self::Grow => Some(PaletteIntent::Resize(len + 1)),
            Self::Shrink => Some(PaletteIntent::Resize(len.saturating_sub(1))),
            Self::Lighten => Some(PaletteIntent::ShiftShade(
                selected,
                ShadeDirection::Lighter,
                shade_step,
            )),
            Self::Darken => Some(PaletteIntent::ShiftShade(
                selected,
                ShadeDirection::Darker,
                shade_step,
            )),
            _ => None,
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys held with it
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys, since the character already
    /// carries it and terminals disagree on reporting it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable key name for the help line.
    #[must_use]
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Help line entries per context, in registration order
    help: Vec<(&'static str, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            help: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry.register_input_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === PALETTE ===
        self.register(ctx, K::Char(' '), M::NONE, Action::Regenerate);
        self.register(ctx, K::Char('l'), M::NONE, Action::ToggleLock);

        // === NAVIGATION ===
        self.register(ctx, K::Left, M::NONE, Action::SelectPrevious);
        self.register(ctx, K::Right, M::NONE, Action::SelectNext);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        self.register(ctx, K::Char('+'), M::NONE, Action::Grow);
        self.register(ctx, K::Char('-'), M::NONE, Action::Shrink);
        self.register(ctx, K::Char(']'), M::NONE, Action::Lighten);
        self.register(ctx, K::Char('['), M::NONE, Action::Darken);
        self.register(ctx, K::Char('h'), M::NONE, Action::CycleHarmony);
        self.register(ctx, K::Char('c'), M::NONE, Action::EnterColor);

        // === SHARING ===
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyShareUrl);

        // === GENERAL ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the color input context.
    fn register_input_shortcuts(&mut self) {
        let ctx = INPUT_CONTEXT;
        self.register(ctx, KeyCode::Enter, KeyModifiers::NONE, Action::Confirm);
        self.register(ctx, KeyCode::Esc, KeyModifiers::NONE, Action::Cancel);
        self.register(ctx, KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        self.help.push((context, binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// `key label` pairs for a context's help line, one per action.
    #[must_use]
    pub fn help_entries(&self, context: &str) -> Vec<(String, &'static str)> {
        let mut seen: Vec<&'static str> = Vec::new();
        let mut entries = Vec::new();
        for (ctx, binding, action) in &self.help {
            if *ctx != context || binding.modifiers.contains(KeyModifiers::CONTROL) {
                continue;
            }
            let label = action.label();
            if let Some(pos) = seen.iter().position(|l| *l == label) {
                // Merge alternate keys for the same label ("←/→ select")
                let (keys, _) = &mut entries[pos];
                *keys = format!("{keys}/{}", binding.display());
            } else {
                seen.push(label);
                entries.push((binding.display(), label));
            }
        }
        entries
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
