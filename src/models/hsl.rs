//! HSL color triples as produced by harmony schemes.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// A color in HSL space.
///
/// `h` is in degrees, `s` and `l` are percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0-360.0)
    pub h: f32,
    /// Saturation percentage (0.0-100.0)
    pub s: f32,
    /// Lightness percentage (0.0-100.0)
    pub l: f32,
}

impl Hsl {
    /// Creates an `Hsl`, normalizing the hue into `[0, 360)` and clamping
    /// saturation and lightness into `[0, 100]`.
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }
}

/// Wraps any hue into `[0, 360)`.
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    if h.is_finite() {
        let wrapped = h.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        0.0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorParseError;

    /// Parses `hsl(h, s%, l%)`.
    ///
    /// Components may be separated by commas or whitespace, the `%` signs
    /// and a `deg` suffix on the hue are optional. Hue wraps around;
    /// saturation and lightness must lie within 0-100.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = trimmed.to_ascii_lowercase();
        let args = lower
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::InvalidHsl(trimmed.to_string()))?;

        let parts: Vec<&str> = args
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() != 3 {
            return Err(ColorParseError::InvalidHsl(trimmed.to_string()));
        }

        let number = |raw: &str, suffix: &str| -> Result<f32, ColorParseError> {
            let raw = raw.strip_suffix(suffix).unwrap_or(raw);
            raw.parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ColorParseError::InvalidHsl(trimmed.to_string()))
        };

        let h = number(parts[0], "deg")?;
        let sat = number(parts[1], "%")?;
        let light = number(parts[2], "%")?;

        if !(0.0..=100.0).contains(&sat) {
            return Err(ColorParseError::OutOfRange {
                component: "saturation",
                value: parts[1].to_string(),
            });
        }
        if !(0.0..=100.0).contains(&light) {
            return Err(ColorParseError::OutOfRange {
                component: "lightness",
                value: parts[2].to_string(),
            });
        }

        Ok(Self::new(h, sat, light))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Hsl::new(18.0, 80.0, 60.0).to_string(), "hsl(18, 80%, 60%)");
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_string(), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_new_normalizes() {
        let hsl = Hsl::new(-30.0, 120.0, -5.0);
        assert_eq!(hsl.h, 330.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);

        assert_eq!(Hsl::new(720.0, 50.0, 50.0).h, 0.0);
    }

    #[test]
    fn test_parse_comma_and_space_forms() {
        let a: Hsl = "hsl(210, 80%, 40%)".parse().unwrap();
        let b: Hsl = "HSL(210deg 80 40)".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.h, 210.0);
        assert_eq!(a.s, 80.0);
        assert_eq!(a.l, 40.0);
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let original = Hsl::new(123.5, 42.0, 17.25);
        let parsed: Hsl = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("".parse::<Hsl>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "hsl(1, 2%)".parse::<Hsl>(),
            Err(ColorParseError::InvalidHsl(_))
        ));
        assert!(matches!(
            "rgb(1, 2, 3)".parse::<Hsl>(),
            Err(ColorParseError::InvalidHsl(_))
        ));
        assert!(matches!(
            "hsl(10, abc%, 20%)".parse::<Hsl>(),
            Err(ColorParseError::InvalidHsl(_))
        ));
        assert!(matches!(
            "hsl(10, 50%, 105%)".parse::<Hsl>(),
            Err(ColorParseError::OutOfRange {
                component: "lightness",
                ..
            })
        ));
    }
}
