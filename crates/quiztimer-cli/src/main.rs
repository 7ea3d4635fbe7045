//! quiztimer CLI — ask the questions from a CSV file against the clock.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quiztimer_core::config::{parse_duration, ConfigOverrides};

mod run;

#[derive(Parser)]
#[command(name = "quiztimer", version, about = "Timed command-line quiz")]
struct Cli {
    /// Path to a csv quiz file [default: ./resources/problems.csv]
    #[arg(long)]
    path: Option<PathBuf>,

    /// Quiz duration, e.g. "20s" or "1m30s" [default: 20s]
    #[arg(long, value_parser = parse_duration)]
    timeout: Option<Duration>,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path [default: ./quiztimer.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the quiz itself.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiztimer=warn")),
        )
        .init();

    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        path: cli.path,
        timeout: cli.timeout,
        seed: cli.seed,
    };

    if let Err(e) = run::execute(cli.config, overrides).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
