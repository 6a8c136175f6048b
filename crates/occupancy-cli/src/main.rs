//! `occupancy` CLI: rebuild the merged occupancy timeline for rental units.
//!
//! ## Usage
//!
//! ```sh
//! # Dry run against the default data directory: report, don't write
//! occupancy
//!
//! # Dry run against another data directory
//! occupancy --root ./data
//!
//! # Write <root>/occupancy.json and print the status object
//! occupancy --root ./data --write --verbose
//! ```
//!
//! Logs go to stderr; stdout carries only the JSON status object.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use occupancy_engine::config::DEFAULT_ROOT;
use occupancy_engine::{OccupancyConfig, RunReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "occupancy",
    version,
    about = "Merge local blocks and channel calendar feeds into one occupancy timeline"
)]
struct Cli {
    /// Root data directory holding local_sources.json and channels.json.
    /// Relative ics_path entries in channels.json resolve against this
    /// directory, not the working directory
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Planning horizon in months (accepted, currently unused)
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Write <root>/occupancy.json instead of a dry run
    #[arg(long)]
    write: bool,

    /// Debug logging, and print the status object after writing
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> OccupancyConfig {
        OccupancyConfig {
            horizon_months: self.months,
            write: self.write,
            ..OccupancyConfig::with_root(&self.root)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let report = occupancy_engine::run(&config)
        .with_context(|| format!("Failed to build occupancy for {}", config.root.display()))?;

    let print = match report {
        RunReport::DryRun { .. } => true,
        RunReport::Written { .. } => cli.verbose,
    };
    if print {
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}

/// Log to stderr at `warn`, or `debug` with `--verbose`. `RUST_LOG` wins.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
