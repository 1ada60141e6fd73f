//! RGB color handling with hex/HSL parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hsl::{normalize_hue, Hsl};
use crate::error::ColorParseError;

/// Digits drawn from when generating random colors.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Brightness threshold (scaled by 1000) above which a color counts as light.
const LIGHT_THRESHOLD: u32 = 128_000;

/// Direction of a shade shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ShadeDirection {
    /// Raise lightness
    Lighter,
    /// Lower lightness
    Darker,
}

impl ShadeDirection {
    /// Returns the magnitude of `amount` signed for this direction.
    ///
    /// A non-finite amount counts as zero.
    #[must_use]
    pub fn signed(self, amount: f32) -> f32 {
        let amount = if amount.is_finite() { amount.abs() } else { 0.0 };
        match self {
            Self::Lighter => amount,
            Self::Darker => -amount,
        }
    }
}

impl FromStr for ShadeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lighter" | "lighten" | "light" => Ok(Self::Lighter),
            "darker" | "darken" | "dark" => Ok(Self::Darker),
            other => Err(format!(
                "Invalid shade direction '{other}'. Must be 'lighter' or 'darker'"
            )),
        }
    }
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parses from hex (`#RRGGBB`, `#RGB`) or `hsl(...)` strings and always
/// serializes to the canonical uppercase `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from any supported textual form.
    ///
    /// Accepts hex (`#RRGGBB`, `RRGGBB`, `#RGB`, any case) and
    /// `hsl(h, s%, l%)`. HSL input is converted to RGB immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse("#ff0000").unwrap(), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::parse("hsl(120, 100%, 50%)").unwrap(), RgbColor::new(0, 255, 0));
    /// assert!(RgbColor::parse("not a color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if trimmed
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("hsl("))
        {
            let hsl: Hsl = trimmed.parse()?;
            return Ok(Self::from_hsl(hsl));
        }

        Self::from_hex(trimmed)
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("0F0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => Ok(Self::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Generates a random color by drawing each of the six hex digits
    /// independently and uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        // The index into HEX_DIGITS is the digit's value
        let mut digit = || rng.gen_range(0..HEX_DIGITS.len()) as u8;

        let r = (digit() << 4) | digit();
        let g = (digit() << 4) | digit();
        let b = (digit() << 4) | digit();
        Self::new(r, g, b)
    }

    /// Perceived brightness scaled by 1000 (Rec.601 luma weights).
    #[must_use]
    pub fn brightness(&self) -> u32 {
        u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114
    }

    /// Returns true when perceived brightness exceeds 128.
    ///
    /// Used by renderers to pick legible overlay text.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::models::RgbColor;
    ///
    /// assert!(RgbColor::new(255, 255, 255).is_light());
    /// assert!(!RgbColor::new(0, 0, 0).is_light());
    /// assert!(!RgbColor::new(128, 128, 128).is_light()); // exactly 128
    /// ```
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.brightness() > LIGHT_THRESHOLD
    }

    /// Converts the RGB color to HSL.
    ///
    /// Hue is in degrees (0.0 for grayscale), saturation and lightness are
    /// percentages.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        // Same sextant formula as HSV
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        Hsl {
            h: normalize_hue(h),
            s: (s * 100.0).clamp(0.0, 100.0),
            l: (l * 100.0).clamp(0.0, 100.0),
        }
    }

    /// Creates an `RgbColor` from HSL.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(0.0, 100.0, 50.0)), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(240.0, 100.0, 50.0)), RgbColor::new(0, 0, 255));
    /// ```
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = normalize_hue(hsl.h);
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Returns this color with its HSL lightness moved by `amount`
    /// percentage points, clamped to `[0, 100]`.
    ///
    /// Hue and saturation are carried through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettekit::models::{RgbColor, ShadeDirection};
    ///
    /// let white = RgbColor::new(255, 255, 255);
    /// assert_eq!(white.shift_lightness(ShadeDirection::Lighter, 10.0), white);
    /// ```
    #[must_use]
    pub fn shift_lightness(&self, direction: ShadeDirection, amount: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l + direction.signed(amount)).clamp(0.0, 100.0);
        Self::from_hsl(hsl)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Hsl> for RgbColor {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
