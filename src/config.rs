//! Runtime configuration for the terminal game.
//!
//! Every flag can also be set through an environment variable:
//!
//! - `COLOUR_CLICKER_SEED`: replay a deterministic sequence of rounds
//! - `COLOUR_CLICKER_MAX_ROUND`: final round (default 30)
//! - `COLOUR_CLICKER_TICK_MS`: elapsed-time timer cadence (default 100)
//! - `COLOUR_CLICKER_LOG`: log file path (default `colour_clicker.log`)
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::{DifficultyCurve, EntropyRandom, RandomSource, SimpleRng};
use crate::types::{CurveError, MAX_ROUND, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "colour-clicker", version, about = "Find the odd tile out")]
pub struct Config {
    /// Seed for a reproducible game (random when omitted)
    #[arg(long, env = "COLOUR_CLICKER_SEED")]
    pub seed: Option<u32>,

    /// Clearing this round wins the game
    #[arg(long, env = "COLOUR_CLICKER_MAX_ROUND", default_value_t = MAX_ROUND)]
    pub max_round: u32,

    /// Milliseconds between elapsed-time ticks
    #[arg(long, env = "COLOUR_CLICKER_TICK_MS", default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Where to write logs (the terminal is owned by the game)
    #[arg(long, env = "COLOUR_CLICKER_LOG", default_value = "colour_clicker.log")]
    pub log_file: PathBuf,
}

impl Config {
    /// Standard curve ending at the configured round.
    pub fn curve(&self) -> Result<DifficultyCurve, CurveError> {
        DifficultyCurve::standard().with_max_round(self.max_round)
    }

    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(EntropyRandom::new()),
        }
    }
}

/// Send tracing output to `path`; the terminal belongs to the game.
pub fn init_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    // Already initialized (e.g. by a test harness) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
