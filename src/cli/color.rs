//! Color command: inspect and shade a single color.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_color, print_json, CliError, CliResult};
use crate::models::{RgbColor, ShadeDirection};

/// Inspect a color
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color as hex (`#RRGGBB`, `#RGB`) or `hsl(h, s%, l%)`
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Raise lightness by N points before printing
    #[arg(long, value_name = "N", conflicts_with = "darken")]
    pub lighten: Option<f32>,

    /// Lower lightness by N points before printing
    #[arg(long, value_name = "N")]
    pub darken: Option<f32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct ColorOutput {
    hex: String,
    hsl: String,
    rgb: [u8; 3],
    brightness: u32,
    light: bool,
}

impl From<RgbColor> for ColorOutput {
    fn from(color: RgbColor) -> Self {
        Self {
            hex: color.to_hex(),
            hsl: color.to_hsl().to_string(),
            rgb: [color.r, color.g, color.b],
            brightness: color.brightness(),
            light: color.is_light(),
        }
    }
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        let mut color = parse_color(&self.color)?;

        let shift = match (self.lighten, self.darken) {
            (Some(n), _) => Some((ShadeDirection::Lighter, n)),
            (None, Some(n)) => Some((ShadeDirection::Darker, n)),
            (None, None) => None,
        };
        if let Some((direction, amount)) = shift {
            if !(0.0..=100.0).contains(&amount) {
                return Err(CliError::validation(format!(
                    "Shade amount must be between 0 and 100, got {amount}"
                )));
            }
            color = color.shift_lightness(direction, amount);
        }

        let output = ColorOutput::from(color);
        if self.json {
            return print_json(&output);
        }

        println!("Hex:        {}", output.hex);
        println!("HSL:        {}", output.hsl);
        println!(
            "RGB:        {}, {}, {}",
            output.rgb[0], output.rgb[1], output.rgb[2]
        );
        println!(
            "Brightness: {} ({})",
            output.brightness,
            if output.light { "light" } else { "dark" }
        );
        Ok(())
    }
}
