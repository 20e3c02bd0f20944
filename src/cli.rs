//! Command-line configuration.
//!
//! Every flag can also be set through the environment, so a shell profile can
//! pin a player name or a seed without retyping it.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::AppConfig;
use crate::input::normalize_name;
use crate::types::DEFAULT_REVEAL_MS;

/// Memory Pairs - flip two cards a turn and find all eight pairs
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-pairs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Player name; skips the start screen when given
    #[arg(long, env = "PAIRS_PLAYER")]
    pub name: Option<String>,

    /// Seed for dealing the table (random when omitted)
    #[arg(long, env = "PAIRS_SEED")]
    pub seed: Option<u32>,

    /// How long a mismatched pair stays visible, in milliseconds
    #[arg(long, env = "PAIRS_REVEAL_MS", default_value_t = DEFAULT_REVEAL_MS)]
    pub reveal_ms: u32,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, env = "PAIRS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            seed: self.seed,
            reveal_ms: self.reveal_ms,
        }
    }

    /// Name to start with, if one was supplied
    pub fn player_name(&self) -> Option<String> {
        self.name.as_deref().map(normalize_name)
    }
}
