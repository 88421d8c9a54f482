//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::BuildOptions;
use crate::domain::value_objects::{ConfigWarning, JsonFormat, RecordLayout};
use crate::error::BuildResult;
use crate::infrastructure::OptimizerSettings;

use super::loader::{self, LoadedConfig};

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("contracts").join("Campaign.sol")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("build")
}

/// Compiler invocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// solc executable, a path or a name looked up on `PATH`
    #[serde(default = "default_solc")]
    pub solc: PathBuf,

    #[serde(default = "default_true")]
    pub optimize: bool,

    #[serde(default = "default_runs")]
    pub runs: u32,

    #[serde(default)]
    pub layout: RecordLayout,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            solc: default_solc(),
            optimize: true,
            runs: default_runs(),
            layout: RecordLayout::default(),
        }
    }
}

fn default_solc() -> PathBuf {
    PathBuf::from("solc")
}

fn default_runs() -> u32 {
    OptimizerSettings::default().runs
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print artifact JSON
    #[serde(default)]
    pub pretty: bool,

    /// Use unicode icons in the text report
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            unicode: true,
        }
    }
}

/// Values given on the command line; `None`/`false` leaves the config value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub solc: Option<PathBuf>,
    pub no_optimize: bool,
    pub pretty: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BuildResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> BuildResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `solbuild.toml` from `root` (or `explicit`), falling back to defaults
    pub fn load_project(root: &Path, explicit: Option<&Path>) -> BuildResult<LoadedConfig> {
        loader::load_project(root, explicit)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(source) = &overrides.source {
            self.paths.source = source.clone();
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir = out_dir.clone();
        }
        if let Some(solc) = &overrides.solc {
            self.compiler.solc = solc.clone();
        }
        if overrides.no_optimize {
            self.compiler.optimize = false;
        }
        if overrides.pretty {
            self.output.pretty = true;
        }
        self
    }

    pub fn optimizer(&self) -> OptimizerSettings {
        OptimizerSettings {
            enabled: self.compiler.optimize,
            runs: self.compiler.runs,
        }
    }

    pub fn json_format(&self) -> JsonFormat {
        JsonFormat::from_pretty(self.output.pretty)
    }

    /// Build options with relative paths resolved against `root`
    pub fn build_options(&self, root: &Path) -> BuildOptions {
        BuildOptions::new(
            root.join(&self.paths.source),
            root.join(&self.paths.out_dir),
        )
        .with_format(self.json_format())
    }
}
