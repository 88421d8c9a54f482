//! CompilerOutput entity - everything one compiler invocation returned

use std::collections::BTreeMap;
use std::fmt;

use super::contract::ContractRecord;

/// Severity of a compiler diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Parse the compiler's severity string; unknown values count as errors
    pub fn from_compiler(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message the compiler embedded in its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Structured compiler result: contracts keyed by raw contract key
///
/// Diagnostics are carried alongside but never make a build fail; a source
/// with syntax errors simply yields an empty contract map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOutput {
    contracts: BTreeMap<String, ContractRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl CompilerOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contract(mut self, key: impl Into<String>, record: ContractRecord) -> Self {
        self.insert(key, record);
        self
    }

    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, record: ContractRecord) {
        self.contracts.insert(key.into(), record);
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Contracts in key order
    pub fn contracts(&self) -> impl Iterator<Item = (&str, &ContractRecord)> {
        self.contracts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&ContractRecord> {
        self.contracts.get(key)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}
