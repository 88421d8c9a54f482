//! Artifact entities - planned and written build artifacts

use std::path::{Path, PathBuf};

use super::contract::{ContractKey, ContractRecord};

/// An artifact whose file name has been derived but not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedArtifact<'a> {
    key: ContractKey,
    record: &'a ContractRecord,
}

impl<'a> PlannedArtifact<'a> {
    pub fn new(key: ContractKey, record: &'a ContractRecord) -> Self {
        Self { key, record }
    }

    pub fn key(&self) -> &ContractKey {
        &self.key
    }

    pub fn record(&self) -> &'a ContractRecord {
        self.record
    }

    /// `<ContractName>.json`
    pub fn file_name(&self) -> String {
        self.key.artifact_file_name()
    }

    /// Full path inside `out_dir`
    pub fn path_in(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.file_name())
    }
}

/// An artifact that has been persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    /// Contract key as produced by the compiler
    pub key: String,
    /// Contract name (key without qualifier)
    pub contract: String,
    /// Where the artifact was written
    pub path: PathBuf,
    /// Serialized size in bytes
    pub bytes: usize,
}
