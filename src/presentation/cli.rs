//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Every flag is optional;
//! running `solbuild` with no arguments performs the default build.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

/// solbuild - compile a Solidity source file into per-contract JSON artifacts
#[derive(Parser, Debug, Default)]
#[command(name = "solbuild")]
#[command(version, about, long_about = None)]
#[command(after_help = "Settings not given as flags are read from solbuild.toml when present.")]
pub struct Cli {
    /// Solidity source file [default: contracts/Campaign.sol]
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Output directory, removed and recreated on every build [default: build]
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// solc executable [default: solc]
    #[arg(long, value_name = "BIN")]
    pub solc: Option<PathBuf>,

    /// Config file to use instead of ./solbuild.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Compile with the optimizer disabled
    #[arg(long)]
    pub no_optimize: bool,

    /// Pretty-print artifact JSON
    #[arg(long)]
    pub pretty: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags that override config values
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source: self.source.clone(),
            out_dir: self.out_dir.clone(),
            solc: self.solc.clone(),
            no_optimize: self.no_optimize,
            pretty: self.pretty,
        }
    }

    /// `tracing` level for the `-v` count
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
