//! Hot/Cold - CLI
//!
//! Interactive number-guessing game with a persistent result log.

use anyhow::{Context, Result};
use clap::Parser;
use hotcold::logging::init_logging;
use hotcold::session::{Session, SessionConfig};
use hotcold::store::DEFAULT_RESULTS_PATH;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hotcold",
    about = "Guess the secret number with hot/warm/cold hints",
    version,
    author
)]
struct Cli {
    /// File that keeps the history of finished rounds
    #[arg(long, env = "HOTCOLD_RESULTS", default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Fixed seed for reproducible secrets (default: seeded from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = SessionConfig::new(cli.results).with_seed(cli.seed);
    tracing::debug!(
        path = %config.results_path.display(),
        seeded = config.seed.is_some(),
        "starting session"
    );

    let mut session = Session::from_config(&config, io::stdin().lock(), io::stdout());
    session.run().context("terminal I/O failed")?;

    Ok(())
}
