//! Encode and decode commands for share tokens.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::models::RgbColor;
use crate::services::PaletteCodec;

/// Encode colors into a share token
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Colors as hex (`#RRGGBB`, `#RGB`) or `hsl(h, s%, l%)`
    #[arg(value_name = "COLOR", required = true, num_args = 1..=100)]
    pub colors: Vec<String>,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self
            .colors
            .iter()
            .map(|color| parse_color(color))
            .collect::<CliResult<Vec<RgbColor>>>()?;

        println!("{}", PaletteCodec::encode_colors(&colors));
        Ok(())
    }
}

/// Decode a share token into its colors
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Share token
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct DecodeOutput {
    colors: Vec<RgbColor>,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let colors = PaletteCodec::decode_colors(&self.token)?;

        if self.json {
            return print_json(&DecodeOutput { colors });
        }

        for color in colors {
            println!("{color}");
        }
        Ok(())
    }
}
