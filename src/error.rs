//! Error types for the palette engine.
//!
//! Store operations report [`PaletteError`], color parsing reports
//! [`ColorParseError`], and share-token decoding reports [`DecodeError`].
//! Decode failures are expected and recoverable: the store absorbs them and
//! falls back to random generation.

use thiserror::Error;

/// Failure to parse a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or whitespace only.
    #[error("empty color string")]
    Empty,

    /// Hex input with a digit count other than 3 or 6.
    #[error("invalid hex length {0}, expected 3 or 6 digits")]
    InvalidLength(usize),

    /// Hex input containing non-hex characters.
    #[error("invalid hex digits in '{0}'")]
    InvalidHex(String),

    /// Malformed `hsl(...)` function.
    #[error("invalid hsl() function '{0}'")]
    InvalidHsl(String),

    /// An HSL component outside its valid range.
    #[error("{component} value {value} is out of range")]
    OutOfRange {
        /// Component name ("hue", "saturation" or "lightness").
        component: &'static str,
        /// The rejected value, as written.
        value: String,
    },
}

/// Errors returned by palette store operations.
///
/// Neither variant mutates the palette.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Position is not a valid index into the current palette.
    #[error("position {position} is out of range for a palette of {len} cells")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Current palette length.
        len: usize,
    },

    /// A color string that is neither hex nor `hsl(...)`.
    #[error("invalid color '{input}': {source}")]
    InvalidColor {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        #[source]
        source: ColorParseError,
    },
}

/// Failure to decode a share token.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Token was empty.
    #[error("share token is empty")]
    EmptyToken,

    /// Token is not valid base64.
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not JSON.
    #[error("share token does not contain JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON value is not an array.
    #[error("share token does not contain a list of colors")]
    NotAList,

    /// Array entry at the given index is not a string.
    #[error("entry {0} of the share token is not a string")]
    NonStringEntry(usize),

    /// Array is empty.
    #[error("share token contains no colors")]
    EmptyList,

    /// Entry at the given index is not a valid color.
    #[error("entry {index} of the share token is not a valid color: {source}")]
    InvalidColor {
        /// Entry index.
        index: usize,
        /// Parse failure.
        #[source]
        source: ColorParseError,
    },

    /// More colors than a palette can hold.
    #[error("share token contains {0} colors, more than a palette can hold")]
    TooManyColors(usize),
}
