//! Theme colors for the TUI chrome.
//!
//! Swatches draw their own colors; the theme only covers borders, text
//! and messages around them.

use ratatui::style::Color;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for key names and the input cursor
    pub accent: Color,
    /// Error state color
    pub error: Color,
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
}

impl Theme {
    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            background: Color::Black,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
