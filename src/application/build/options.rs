//! Build Options

use std::path::PathBuf;

use crate::domain::value_objects::JsonFormat;

/// Options for the build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Contract source file
    pub source: PathBuf,
    /// Output directory; wiped and recreated on every build
    pub out_dir: PathBuf,
    /// Artifact JSON layout
    pub format: JsonFormat,
}

impl BuildOptions {
    pub fn new(source: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            out_dir: out_dir.into(),
            format: JsonFormat::default(),
        }
    }

    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}
