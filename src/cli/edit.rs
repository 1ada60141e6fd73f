//! Edit command: apply store operations to a shared palette.
//!
//! Operations run in a fixed order (locks, recolors, lighten, darken,
//! resize, regenerate) so a single invocation can express "lock these,
//! reroll the rest".

use clap::Args;
use tracing::info;

use crate::cli::common::{load_config, CliError, CliResult, PaletteReport};
use crate::models::ShadeDirection;
use crate::services::{PaletteCodec, PaletteIntent, PaletteStore};

/// Modify a shared palette
#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Share token of the palette to edit
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Toggle the lock of a cell (repeatable)
    #[arg(long = "lock", value_name = "POS")]
    pub locks: Vec<usize>,

    /// Recolor a cell, e.g. `--set 2=#FF8800` or `--set "0=hsl(200, 50%, 40%)"` (repeatable)
    #[arg(long = "set", value_name = "POS=COLOR", value_parser = parse_assignment)]
    pub assignments: Vec<(usize, String)>,

    /// Lighten a cell by the shade step (repeatable)
    #[arg(long = "lighten", value_name = "POS")]
    pub lighten: Vec<usize>,

    /// Darken a cell by the shade step (repeatable)
    #[arg(long = "darken", value_name = "POS")]
    pub darken: Vec<usize>,

    /// Lightness points per lighten/darken step (defaults to palette.shade_step)
    #[arg(long, value_name = "N")]
    pub amount: Option<f32>,

    /// Resize the palette (clamped to 1-100)
    #[arg(long, value_name = "N")]
    pub resize: Option<usize>,

    /// Regenerate every unlocked cell
    #[arg(long)]
    pub regenerate: bool,

    /// Seed for the random source, for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl EditArgs {
    /// Execute the edit command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let amount = self.amount.unwrap_or(config.palette.shade_step);
        if !(amount > 0.0 && amount <= 100.0) {
            return Err(CliError::validation(format!(
                "Shade amount must be in (0, 100], got {amount}"
            )));
        }

        // Unlike generate, an undecodable token is an error here
        let colors = PaletteCodec::decode_colors(&self.token)?;
        let mut store = self.seed.map_or_else(PaletteStore::new, PaletteStore::seeded);
        store.initialize(colors.len(), Some(&self.token));

        for intent in self.intents(amount) {
            store.dispatch(intent)?;
        }

        let palette = store.palette();
        info!(len = palette.len(), "Edited palette");
        PaletteReport::new(palette, &config.share.base_url).print(self.json)
    }

    fn intents(&self, amount: f32) -> Vec<PaletteIntent> {
        let mut intents: Vec<PaletteIntent> = self
            .locks
            .iter()
            .map(|&pos| PaletteIntent::ToggleLock(pos))
            .collect();

        intents.extend(
            self.assignments
                .iter()
                .map(|(pos, color)| PaletteIntent::SetColor(*pos, color.clone())),
        );
        intents.extend(
            self.lighten
                .iter()
                .map(|&pos| PaletteIntent::ShiftShade(pos, ShadeDirection::Lighter, amount)),
        );
        intents.extend(
            self.darken
                .iter()
                .map(|&pos| PaletteIntent::ShiftShade(pos, ShadeDirection::Darker, amount)),
        );

        if let Some(size) = self.resize {
            intents.push(PaletteIntent::Resize(size));
        }
        if self.regenerate {
            intents.push(PaletteIntent::RegenerateUnlocked);
        }

        intents
    }
}

/// Parses `POS=COLOR`.
fn parse_assignment(input: &str) -> Result<(usize, String), String> {
    let (pos, color) = input
        .split_once('=')
        .ok_or_else(|| format!("expected POS=COLOR, got '{input}'"))?;
    let pos = pos
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid position '{pos}': {e}"))?;
    Ok((pos, color.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        edit: EditArgs,
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("2=#FF8800"),
            Ok((2, "#FF8800".to_string()))
        );
        assert_eq!(
            parse_assignment("0=hsl(200, 50%, 40%)"),
            Ok((0, "hsl(200, 50%, 40%)".to_string()))
        );
        assert!(parse_assignment("#FF8800").is_err());
        assert!(parse_assignment("x=#FF8800").is_err());
    }

    #[test]
    fn test_intent_order() {
        let args = Harness::parse_from([
            "edit", "TOKEN", "--regenerate", "--resize", "4", "--darken", "1", "--lighten", "0",
            "--set", "3=#000", "--lock", "2",
        ])
        .edit;

        assert_eq!(
            args.intents(10.0),
            vec![
                PaletteIntent::ToggleLock(2),
                PaletteIntent::SetColor(3, "#000".to_string()),
                PaletteIntent::ShiftShade(0, ShadeDirection::Lighter, 10.0),
                PaletteIntent::ShiftShade(1, ShadeDirection::Darker, 10.0),
                PaletteIntent::Resize(4),
                PaletteIntent::RegenerateUnlocked,
            ]
        );
    }
}
