//! PaletteKit - color palette generator for the terminal
//!
//! Runs the interactive swatch view by default, or one of the headless
//! commands for scripting.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettekit::cli::{
    CliError, CliResult, ColorArgs, ConfigArgs, DecodeArgs, EditArgs, EncodeArgs, GenerateArgs,
    HarmonyArgs,
};

/// PaletteKit - lockable color palettes with shareable links
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new palette
    Generate(GenerateArgs),
    /// Modify a shared palette
    Edit(EditArgs),
    /// Generate a color harmony
    Harmony(HarmonyArgs),
    /// Encode colors into a share token
    Encode(EncodeArgs),
    /// Decode a share token into its colors
    Decode(DecodeArgs),
    /// Inspect a color
    Color(ColorArgs),
    /// Manage configuration
    Config(ConfigArgs),
    /// Open the interactive swatch view (default)
    Tui(TuiArgs),
}

/// Open the interactive swatch view
#[derive(Args, Debug, Default)]
struct TuiArgs {
    /// Share token to start from
    #[arg(short, long, value_name = "TOKEN")]
    token: Option<String>,

    /// Number of colors when not starting from a token
    #[arg(short, long, value_name = "N")]
    count: Option<usize>,
}

/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Generate(args) => args.execute(),
        Command::Edit(args) => args.execute(),
        Command::Harmony(args) => args.execute(),
        Command::Encode(args) => args.execute(),
        Command::Decode(args) => args.execute(),
        Command::Color(args) => args.execute(),
        Command::Config(args) => args.execute(),
        Command::Tui(args) => run_tui(&args),
    }
}

#[cfg(feature = "ratatui")]
fn run_tui(args: &TuiArgs) -> CliResult<()> {
    let config = palettekit::cli::common::load_config()?;
    let url = palettekit::tui::run(config, args.token.as_deref(), args.count)
        .map_err(|e| CliError::io(format!("{e:#}")))?;
    println!("{url}");
    Ok(())
}

#[cfg(not(feature = "ratatui"))]
fn run_tui(_args: &TuiArgs) -> CliResult<()> {
    Err(CliError::validation(
        "This build has no terminal UI; rebuild with the `ratatui` feature",
    ))
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the screen, so only headless commands log
    let command = match cli.command {
        Some(Command::Tui(args)) => Command::Tui(args),
        None => Command::Tui(TuiArgs::default()),
        Some(command) => {
            init_tracing(cli.verbose);
            command
        }
    };

    if let Err(CliError { code, message }) = run_command(command) {
        eprintln!("Error: {message}");
        std::process::exit(code.code());
    }
}
