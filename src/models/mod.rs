//! Data models for colors and palettes.
//!
//! This module contains the value types used throughout the application.
//! Models are independent of UI and of the store that mutates them.

pub mod hsl;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use hsl::Hsl;
pub use palette::{
    clamp_size, Cell, Palette, DEFAULT_CELLS, DEFAULT_SHADE_STEP, MAX_CELLS, MIN_CELLS,
};
pub use rgb::{RgbColor, ShadeDirection};
