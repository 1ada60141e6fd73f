//! Share-token codec and harmony front end.
//!
//! A share token is the palette's color list serialized as a JSON array of
//! strings and then base64-encoded with the URL-safe alphabet, so it can
//! sit in a query parameter without escaping.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;
use serde_json::Value;

use super::harmony::{self, HarmonyKind};
use crate::error::DecodeError;
use crate::models::{Hsl, RgbColor, MAX_CELLS};

/// Converts palettes to and from share tokens.
///
/// Stateless; all functions are pure apart from the spatial harmony scheme,
/// which draws from the supplied random source.
pub struct PaletteCodec;

impl PaletteCodec {
    /// Encodes an ordered list of color strings into a share token.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::services::PaletteCodec;
    ///
    /// let token = PaletteCodec::encode(&["#112233", "#AABBCC"]);
    /// assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    /// assert_eq!(PaletteCodec::decode(&token).unwrap(), vec!["#112233", "#AABBCC"]);
    /// ```
    pub fn encode<S: AsRef<str>>(colors: &[S]) -> String {
        let list = Value::Array(
            colors
                .iter()
                .map(|color| Value::String(color.as_ref().to_string()))
                .collect(),
        );
        URL_SAFE_NO_PAD.encode(list.to_string())
    }

    /// Encodes typed colors in their canonical `#RRGGBB` form.
    pub fn encode_colors(colors: &[RgbColor]) -> String {
        let hex: Vec<String> = colors.iter().map(RgbColor::to_hex).collect();
        Self::encode(&hex)
    }

    /// Decodes a share token back into its ordered list of color strings.
    ///
    /// Both the URL-safe and the standard base64 alphabet are accepted,
    /// with or without padding. The entries are returned verbatim; use
    /// [`PaletteCodec::decode_colors`] to validate them.
    pub fn decode(token: &str) -> Result<Vec<String>, DecodeError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DecodeError::EmptyToken);
        }

        let normalized: String = token
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                other => other,
            })
            .collect();
        let bytes = URL_SAFE_NO_PAD.decode(normalized)?;

        let Value::Array(entries) = serde_json::from_slice::<Value>(&bytes)? else {
            return Err(DecodeError::NotAList);
        };
        if entries.is_empty() {
            return Err(DecodeError::EmptyList);
        }

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::String(color) => Ok(color),
                _ => Err(DecodeError::NonStringEntry(index)),
            })
            .collect()
    }

    /// Decodes a share token into validated colors.
    ///
    /// Fails if any entry is not a valid color or if there are more colors
    /// than a palette can hold.
    pub fn decode_colors(token: &str) -> Result<Vec<RgbColor>, DecodeError> {
        let entries = Self::decode(token)?;
        if entries.len() > MAX_CELLS {
            return Err(DecodeError::TooManyColors(entries.len()));
        }

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                RgbColor::parse(entry).map_err(|source| DecodeError::InvalidColor { index, source })
            })
            .collect()
    }

    /// Generates a harmony palette of exactly 20 HSL entries.
    ///
    /// Uses the thread-local random source for the spatial scheme.
    pub fn generate_harmony(kind: HarmonyKind, base_hue: f32) -> Vec<Hsl> {
        Self::generate_harmony_with_rng(kind, base_hue, &mut rand::thread_rng())
    }

    /// Generates a harmony palette with an explicit random source.
    pub fn generate_harmony_with_rng<R: Rng>(
        kind: HarmonyKind,
        base_hue: f32,
        rng: &mut R,
    ) -> Vec<Hsl> {
        harmony::generate(kind, base_hue, rng)
    }
}
