//! PaletteKit Library
//!
//! This library provides the palette engine behind the `palettekit` binary:
//! color parsing and conversion, lockable palettes, harmony schemes and
//! shareable palette tokens, plus the CLI and terminal UI built on them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use error::{ColorParseError, DecodeError, PaletteError};
pub use models::{Cell, Hsl, Palette, RgbColor, ShadeDirection};
pub use services::{HarmonyKind, PaletteCodec, PaletteIntent, PaletteStore, ShareState};
