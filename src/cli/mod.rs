//! CLI command handlers for palettekit.
//!
//! This module provides headless, scriptable access to the palette engine
//! for automation and testing.

pub mod color;
pub mod common;
pub mod config;
pub mod edit;
pub mod generate;
pub mod harmony;
pub mod share;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use edit::EditArgs;
pub use generate::GenerateArgs;
pub use harmony::HarmonyArgs;
pub use share::{DecodeArgs, EncodeArgs};
