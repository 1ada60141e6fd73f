//! Harmony schemes: themed palettes derived from a single base hue.
//!
//! Every scheme yields exactly [`HARMONY_SIZE`] entries. Schemes that split
//! the row across several hues fill the remainder by repeating the last
//! generated entry, so every scheme except [`HarmonyKind::Spatial`] is
//! deterministic.

use rand::Rng;
use std::fmt;

use crate::models::hsl::{normalize_hue, Hsl};

/// Number of entries every harmony scheme produces.
pub const HARMONY_SIZE: usize = 20;

/// Saturation shared by the hue-based schemes.
const BASE_SATURATION: f32 = 80.0;

/// A color-harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// One hue, lightness stepped from dark to light
    Monochromatic,
    /// Base hue and its neighbours at ±30°
    Analogous,
    /// Base hue and its opposite, paired at matching lightness
    Complementary,
    /// Base hue and the two hues beside its opposite (±30°)
    SplitComplementary,
    /// Three hues 120° apart
    Triadic,
    /// Four hues 90° apart
    Tetradic,
    /// One hue, lightness spread evenly from 20% to 80%
    Sequential,
    /// Base hue fading to white, then its opposite fading to black
    Diverging,
    /// Hues evenly spaced around the wheel, independent of the base hue
    Qualitative,
    /// Independently randomized hue, saturation and lightness
    Spatial,
    /// 4x5 grid of hue rows against saturation columns
    Grid,
}

impl HarmonyKind {
    /// All schemes, in menu order.
    pub const ALL: [Self; 11] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Sequential,
        Self::Diverging,
        Self::Qualitative,
        Self::Spatial,
        Self::Grid,
    ];

    /// Canonical name of the scheme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Sequential => "sequential",
            Self::Diverging => "diverging",
            Self::Qualitative => "qualitative",
            Self::Spatial => "spatial",
            Self::Grid => "grid",
        }
    }

    /// Looks up a scheme by name, accepting the `square` and `tetradic-3`
    /// aliases. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "tetradic" | "tetradic-3" | "square" => Some(Self::Tetradic),
            "split-complementary" | "splitcomplementary" => Some(Self::SplitComplementary),
            other => Self::ALL.into_iter().find(|kind| kind.name() == other),
        }
    }

    /// Like [`HarmonyKind::from_name`], but unknown names fall back to
    /// [`HarmonyKind::Monochromatic`].
    #[must_use]
    pub fn from_name_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::Monochromatic)
    }

    /// Returns true if the scheme ignores the base hue.
    #[must_use]
    pub const fn ignores_base_hue(&self) -> bool {
        matches!(self, Self::Qualitative | Self::Spatial | Self::Grid)
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates the harmony palette for `kind` around `base_hue` (degrees).
///
/// `rng` is only consulted by [`HarmonyKind::Spatial`].
pub fn generate<R: Rng>(kind: HarmonyKind, base_hue: f32, rng: &mut R) -> Vec<Hsl> {
    let h = normalize_hue(base_hue);

    let mut colors = match kind {
        HarmonyKind::Monochromatic => (0..HARMONY_SIZE)
            .map(|i| Hsl::new(h, BASE_SATURATION, 10.0 + i as f32 * 5.0))
            .collect(),
        HarmonyKind::Analogous => stepped_hues(&[h, h + 30.0, h - 30.0]),
        HarmonyKind::Complementary => {
            let opposite = h + 180.0;
            (0..HARMONY_SIZE / 2)
                .flat_map(|i| {
                    let lightness = 20.0 + i as f32 * 8.0;
                    [
                        Hsl::new(h, BASE_SATURATION, lightness),
                        Hsl::new(opposite, BASE_SATURATION, lightness),
                    ]
                })
                .collect()
        }
        HarmonyKind::SplitComplementary => stepped_hues(&[h, h + 150.0, h + 210.0]),
        HarmonyKind::Triadic => stepped_hues(&[h, h + 120.0, h + 240.0]),
        HarmonyKind::Tetradic => stepped_hues(&[h, h + 90.0, h + 180.0, h + 270.0]),
        HarmonyKind::Sequential => lightness_ramp(h, 20.0, 80.0, HARMONY_SIZE),
        HarmonyKind::Diverging => {
            let half = HARMONY_SIZE / 2;
            let mut colors = lightness_ramp(h, 50.0, 100.0, half);
            colors.extend(lightness_ramp(h + 180.0, 50.0, 0.0, HARMONY_SIZE - half));
            colors
        }
        HarmonyKind::Qualitative => {
            let step = 360.0 / HARMONY_SIZE as f32;
            (0..HARMONY_SIZE)
                .map(|i| Hsl::new(i as f32 * step, BASE_SATURATION, 60.0))
                .collect()
        }
        HarmonyKind::Spatial => (0..HARMONY_SIZE)
            .map(|_| {
                Hsl::new(
                    f32::from(rng.gen_range(0..360u16)),
                    f32::from(rng.gen_range(20..100u8)),
                    f32::from(rng.gen_range(20..80u8)),
                )
            })
            .collect(),
        HarmonyKind::Grid => {
            const ROWS: usize = 4;
            const COLS: usize = 5;
            (0..ROWS)
                .flat_map(|row| {
                    (0..COLS).map(move |col| {
                        Hsl::new(
                            row as f32 * (360.0 / ROWS as f32),
                            col as f32 * (100.0 / COLS as f32),
                            50.0,
                        )
                    })
                })
                .collect()
        }
    };

    fill_to_size(&mut colors);
    colors
}

/// Splits the row evenly across `hues`, stepping lightness from 20% by 10
/// points within each hue.
fn stepped_hues(hues: &[f32]) -> Vec<Hsl> {
    let per_hue = HARMONY_SIZE / hues.len();
    hues.iter()
        .flat_map(|&hue| {
            (0..per_hue).map(move |i| Hsl::new(hue, BASE_SATURATION, 20.0 + i as f32 * 10.0))
        })
        .collect()
}

/// `count` entries of one hue with lightness evenly spaced from `start` to `end`.
fn lightness_ramp(hue: f32, start: f32, end: f32, count: usize) -> Vec<Hsl> {
    if count <= 1 {
        return vec![Hsl::new(hue, BASE_SATURATION, start); count];
    }
    let step = (end - start) / (count - 1) as f32;
    (0..count)
        .map(|i| Hsl::new(hue, BASE_SATURATION, start + step * i as f32))
        .collect()
}

/// Repeats the last entry until the row holds exactly [`HARMONY_SIZE`] entries.
fn fill_to_size(colors: &mut Vec<Hsl>) {
    colors.truncate(HARMONY_SIZE);
    let last = colors
        .last()
        .copied()
        .unwrap_or_else(|| Hsl::new(0.0, BASE_SATURATION, 50.0));
    colors.resize(HARMONY_SIZE, last);
}
