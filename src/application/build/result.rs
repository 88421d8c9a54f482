//! Build Result

use std::path::PathBuf;

use crate::domain::entities::{Diagnostic, Severity, WrittenArtifact};

/// Result of a completed build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Source file that was compiled
    pub source: PathBuf,
    /// Directory artifacts were written to
    pub out_dir: PathBuf,
    /// Artifacts in the order they were written
    pub artifacts: Vec<WrittenArtifact>,
    /// Diagnostics the compiler embedded in its result
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn new(source: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    /// Number of diagnostics at `severity`
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Build finished but the compiler produced nothing to write
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
