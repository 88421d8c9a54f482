//! Error types for solbuild
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` at the
//! top level.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CompilerError, FsError};

/// Result type alias for solbuild operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Reset,
    Load,
    Compile,
    Plan,
    Write,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Config => "config",
            Stage::Reset => "reset",
            Stage::Load => "load",
            Stage::Compile => "compile",
            Stage::Plan => "plan",
            Stage::Write => "write",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract key could not be turned into an artifact file name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    /// Key does not have the `<qualifier>:<name>` shape, or yields an unusable file name
    #[error("malformed contract key '{key}': {reason}")]
    MalformedKey { key: String, reason: &'static str },

    /// Two distinct keys map to the same artifact file
    #[error("contract keys '{first}' and '{second}' both map to artifact '{file_name}'")]
    Collision {
        file_name: String,
        first: String,
        second: String,
    },
}

/// Main error type for solbuild operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// Output directory could not be removed or recreated
    #[error("failed to reset output directory")]
    ResetOutputDir(#[source] FsError),

    /// Source file missing or unreadable
    #[error("failed to read source file")]
    ReadSource(#[source] FsError),

    /// The external compiler could not produce a result
    #[error("failed to compile {file}")]
    Compile {
        file: PathBuf,
        #[source]
        source: CompilerError,
    },

    /// Compiler result keys could not be mapped to artifact files
    #[error("failed to plan artifacts")]
    Plan(#[from] ArtifactError),

    /// Contract record could not be serialized
    #[error("failed to serialize artifact {file_name}")]
    Serialize {
        file_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact could not be written
    #[error("failed to write artifact")]
    WriteArtifact(#[source] FsError),

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// The pipeline stage this error aborted
    pub fn stage(&self) -> Stage {
        match self {
            BuildError::ResetOutputDir(_) => Stage::Reset,
            BuildError::ReadSource(_) => Stage::Load,
            BuildError::Compile { .. } => Stage::Compile,
            BuildError::Plan(_) => Stage::Plan,
            BuildError::Serialize { .. } | BuildError::WriteArtifact(_) => Stage::Write,
            BuildError::ConfigNotFound { .. }
            | BuildError::InvalidConfig { .. }
            | BuildError::Io(_) => Stage::Config,
        }
    }
}
