//! Harmony command: print a 20-color harmony scheme.

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::cli::common::{load_config, print_json, share_url, CliResult};
use crate::models::RgbColor;
use crate::services::{HarmonyKind, PaletteCodec};

/// Generate a color harmony
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Scheme name (monochromatic, analogous, complementary, split-complementary,
    /// triadic, tetradic, sequential, diverging, qualitative, spatial, grid)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Base hue in degrees
    #[arg(long, value_name = "DEGREES", default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f32,

    /// Print hex codes instead of hsl() strings
    #[arg(long)]
    pub hex: bool,

    /// Also print the share token and link for the scheme
    #[arg(long)]
    pub token: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct HarmonyOutput {
    kind: String,
    hue: f32,
    colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let kind = HarmonyKind::from_name(&self.kind).unwrap_or_else(|| {
            warn!(
                "Unknown harmony '{}', using {}",
                self.kind,
                HarmonyKind::Monochromatic
            );
            HarmonyKind::Monochromatic
        });

        let scheme = PaletteCodec::generate_harmony(kind, self.hue);
        let hex: Vec<String> = scheme
            .iter()
            .map(|&hsl| RgbColor::from_hsl(hsl).to_hex())
            .collect();
        let colors = if self.hex {
            hex.clone()
        } else {
            scheme.iter().map(ToString::to_string).collect()
        };

        let (token, url) = if self.token {
            let config = load_config()?;
            let token = PaletteCodec::encode(&hex);
            let url = share_url(&config.share.base_url, &token);
            (Some(token), Some(url))
        } else {
            (None, None)
        };

        let output = HarmonyOutput {
            kind: kind.name().to_string(),
            hue: self.hue,
            colors,
            token,
            url,
        };

        if self.json {
            return print_json(&output);
        }

        for color in &output.colors {
            println!("{color}");
        }
        if let (Some(token), Some(url)) = (&output.token, &output.url) {
            println!();
            println!("Token: {token}");
            println!("Share: {url}");
        }
        Ok(())
    }
}
