//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use tracing::info;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Number of colors in a new palette (1-100)
    #[arg(long, value_name = "N")]
    default_size: Option<usize>,

    /// Lightness points per lighten/darken step
    #[arg(long, value_name = "N")]
    shade_step: Option<f32>,

    /// Base URL for share links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Show the key help line when the TUI starts
    #[arg(long, value_name = "BOOL")]
    show_help: Option<bool>,

    /// Print hex codes on TUI swatches
    #[arg(long, value_name = "BOOL")]
    hex_labels: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.default_size.is_none()
            && self.shade_step.is_none()
            && self.base_url.is_none()
            && self.show_help.is_none()
            && self.hex_labels.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-size, --shade-step, --base-url, --show-help, or --hex-labels",
            ));
        }

        // A missing file loads as defaults; a broken one must not be overwritten
        let mut config = load_config()?;

        if let Some(size) = self.default_size {
            config.palette.default_size = size;
        }
        if let Some(step) = self.shade_step {
            config.palette.shade_step = step;
        }
        if let Some(url) = &self.base_url {
            config.share.base_url.clone_from(url);
        }
        if let Some(show) = self.show_help {
            config.ui.show_help_on_startup = show;
        }
        if let Some(show) = self.hex_labels {
            config.ui.show_hex_labels = show;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        info!("Configuration saved");
        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Palette:");
    println!("  Default Size: {}", config.palette.default_size);
    println!("  Shade Step:   {}", config.palette.shade_step);
    println!();

    println!("Share:");
    println!("  Base URL: {}", config.share.base_url);
    println!();

    println!("UI:");
    println!("  Show Help On Startup: {}", config.ui.show_help_on_startup);
    println!("  Show Hex Labels:      {}", config.ui.show_hex_labels);
    println!();
}
