//! Generate command: a fresh palette, optionally seeded by a share token.

use clap::Args;
use tracing::info;

use crate::cli::common::{load_config, CliResult, PaletteReport};
use crate::services::PaletteStore;

/// Generate a new palette
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Number of colors (clamped to 1-100; defaults to palette.default_size)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// Share token to start from; ignored with a warning if it does not decode
    #[arg(short, long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Seed for the random source, for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let size = self.count.unwrap_or(config.palette.default_size);

        let mut store = self.seed.map_or_else(PaletteStore::new, PaletteStore::seeded);
        let palette = store.initialize(size, self.token.as_deref());
        info!(len = palette.len(), "Generated palette");

        PaletteReport::new(palette, &config.share.base_url).print(self.json)
    }
}
