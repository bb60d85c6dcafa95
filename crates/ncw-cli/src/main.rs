//! CLI frontend for the Night City weather reporter.

mod commands;
mod delivery;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ncw_weather::WeatherConfig;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ncw",
    about = "NCWR: Night City Weather Report, rolled from the Time of the Red tables",
    version,
    propagate_version = true
)]
struct Cli {
    /// Ongoing events file (overrides NCWR_LEDGER_PATH)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// RNG seed for reproducible rolls (overrides NCWR_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the weather now, like the !weather chat command
    Roll {
        /// Report date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Produce the scheduled daily report with its greeting
    Daily {
        /// Report date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Post to NCWR_WEBHOOK_URL instead of printing
        #[arg(long)]
        deliver: bool,
    },

    /// Answer chat commands read line by line from stdin
    Chat,

    /// Post the daily report every day at NCWR_POST_TIME
    Serve,

    /// List ongoing multi-day events without decaying them
    Events,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| match cli.command {
        Commands::Roll { date, json } => commands::roll::run(&config, date, json),
        Commands::Daily { date, deliver } => commands::daily::run(&config, date, deliver),
        Commands::Chat => commands::chat::run(&config),
        Commands::Serve => commands::serve::run(&config),
        Commands::Events => commands::events::run(&config),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Environment first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<WeatherConfig, String> {
    let mut config = WeatherConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(path) = &cli.ledger {
        config = config.with_ledger_path(path);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Log to stderr at `info` unless RUST_LOG says otherwise.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
