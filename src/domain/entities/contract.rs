//! Contract entities - keys and records produced by the compiler
//!
//! The compiler names each compiled unit `<qualifier>:<ContractName>`,
//! where the qualifier is the source unit name. Artifacts are named after
//! the key with the separator removed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// Separator between source qualifier and contract name
pub const KEY_SEPARATOR: char = ':';

/// Parsed `<qualifier>:<name>` contract key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContractKey {
    qualifier: String,
    name: String,
}

impl ContractKey {
    pub fn new(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    /// Parse a raw compiler key.
    ///
    /// The key must contain the separator exactly once, and removing it must
    /// leave a usable file name stem.
    pub fn parse(raw: &str) -> Result<Self, ArtifactError> {
        let malformed = |reason| ArtifactError::MalformedKey {
            key: raw.to_string(),
            reason,
        };

        let (qualifier, name) = raw
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| malformed("missing ':' separator"))?;

        if name.contains(KEY_SEPARATOR) {
            return Err(malformed("more than one ':' separator"));
        }

        let key = Self::new(qualifier, name);
        let stem = key.artifact_stem();

        if stem.is_empty() {
            return Err(malformed("empty contract name"));
        }
        if stem == "." || stem == ".." {
            return Err(malformed("name is a relative path component"));
        }
        if stem.contains(['/', '\\', '\0']) {
            return Err(malformed("name contains a path separator"));
        }

        Ok(key)
    }

    /// Source unit qualifier (empty for single-source builds)
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Contract name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key with the separator removed
    pub fn artifact_stem(&self) -> String {
        format!("{}{}", self.qualifier, self.name)
    }

    /// `<stem>.json`
    pub fn artifact_file_name(&self) -> String {
        format!("{}.json", self.artifact_stem())
    }
}

impl fmt::Display for ContractKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.qualifier, KEY_SEPARATOR, self.name)
    }
}

/// Opaque compiled output for one contract
///
/// The shape is owned by the compiler; it is persisted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractRecord(serde_json::Value);

impl ContractRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}
