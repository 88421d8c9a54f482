//! Configuration module for solbuild
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Project config (`solbuild.toml`, or the file given with `--config`)
//! 3. Built-in defaults (lowest priority)
//!
//! Environment variables are never consulted.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{CompilerConfig, Config, ConfigOverrides, OutputConfig, PathsConfig};
