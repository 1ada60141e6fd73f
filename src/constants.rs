//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PaletteKit";

/// The binary name of the application (used in command examples and directory names).
pub const APP_BINARY_NAME: &str = "palettekit";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PALETTEKIT_CONFIG_DIR";
