//! Shared CLI plumbing: error type, exit codes and palette output.

use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::error::{ColorParseError, DecodeError, PaletteError};
use crate::models::{Palette, RgbColor};
use crate::services::{PaletteCodec, ShareState, ShareUrl, SHARE_PARAM};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad user input: color, position, token or option value
    ValidationError = 1,
    /// Filesystem, terminal or clipboard failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed command, carrying the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PaletteError> for CliError {
    fn from(err: PaletteError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        Self::validation(format!("Invalid share token: {err}"))
    }
}

impl From<ColorParseError> for CliError {
    fn from(err: ColorParseError) -> Self {
        Self::validation(format!("Invalid color: {err}"))
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Parses a color argument.
pub fn parse_color(input: &str) -> CliResult<RgbColor> {
    RgbColor::parse(input)
        .map_err(|e| CliError::validation(format!("Invalid color '{input}': {e}")))
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Printable summary of a palette: colors, locks, token and share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteReport {
    /// Colors in order, as `#RRGGBB`
    pub colors: Vec<String>,
    /// Locked positions
    pub locked: Vec<usize>,
    /// Share token
    pub token: String,
    /// Share link built from the configured base URL
    pub url: String,
}

impl PaletteReport {
    /// Builds a report for `palette`, linking against `base_url`.
    #[must_use]
    pub fn new(palette: &Palette, base_url: &str) -> Self {
        let token = PaletteCodec::encode_colors(&palette.colors());
        Self {
            colors: palette.hex_colors(),
            locked: palette.locked_positions(),
            url: share_url(base_url, &token),
            token,
        }
    }

    /// Prints the report, as JSON or as one line per cell.
    pub fn print(&self, json: bool) -> CliResult<()> {
        if json {
            return print_json(self);
        }

        for (i, color) in self.colors.iter().enumerate() {
            let lock = if self.locked.contains(&i) { "  [locked]" } else { "" };
            println!("{i:>3}  {color}{lock}");
        }
        println!();
        println!("Token: {}", self.token);
        println!("Share: {}", self.url);
        Ok(())
    }
}

/// Renders `base_url` with the share parameter set to `token`.
#[must_use]
pub fn share_url(base_url: &str, token: &str) -> String {
    let mut url = ShareUrl::parse(base_url);
    url.set(SHARE_PARAM, token);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").code.code(), 1);
        assert_eq!(CliError::io("disk").code.code(), 2);
    }

    #[test]
    fn test_palette_errors_are_validation_errors() {
        let err: CliError = PaletteError::OutOfRange { position: 4, len: 2 }.into();
        assert_eq!(err.code, ExitCode::ValidationError);
        assert!(err.message.contains("position 4"));
    }

    #[test]
    fn test_report() {
        let palette = Palette::from_colors([RgbColor::new(0x11, 0x22, 0x33)]).unwrap();
        let report = PaletteReport::new(&palette, "https://x.dev/app?theme=dark");
        assert_eq!(report.colors, vec!["#112233"]);
        assert!(report.locked.is_empty());
        assert_eq!(
            report.url,
            format!("https://x.dev/app?theme=dark&colors={}", report.token)
        );
    }
}
