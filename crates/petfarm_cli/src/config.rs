//! Command-line configuration.
//!
//! Resolves logging settings from flags, environment, or build defaults.

use clap::Parser;
use petfarm_core::default_log_level;
use std::path::PathBuf;

const DEFAULT_LOG_DIR_NAME: &str = "petfarm-logs";

#[derive(Debug, Parser)]
#[command(name = "petfarm")]
#[command(about = "Interactive pet farm registry", long_about = None)]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "PETFARM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "PETFARM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Settings used by startup wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            log_level: cli
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: cli
                .log_dir
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
        }
    }
}
