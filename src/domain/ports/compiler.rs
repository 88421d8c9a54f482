//! Compiler port - the external compilation capability
//!
//! The build pipeline only needs "compile this source text, give me the
//! contracts". Implementations live in the infrastructure layer; tests use
//! `FakeCompiler`.

use std::io;

use thiserror::Error;

use crate::domain::entities::{CompilerOutput, SourceDocument};

/// Hard failures invoking the compiler
///
/// Source errors are not represented here: they come back as diagnostics
/// inside a (possibly empty) `CompilerOutput`.
#[derive(Error, Debug)]
pub enum CompilerError {
    /// Compiler executable could not be started
    #[error("failed to run compiler '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Piping input to, or output from, the compiler failed
    #[error("failed to communicate with compiler '{program}'")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Compiler process exited unsuccessfully
    #[error("compiler '{program}' exited with {status}: {stderr}")]
    Exited {
        program: String,
        status: String,
        stderr: String,
    },

    /// Compiler output is not the expected JSON document
    #[error("compiler produced invalid output")]
    InvalidOutput(#[source] serde_json::Error),
}

/// External compiler
pub trait Compiler {
    /// Compile a single source document
    fn compile(&self, source: &SourceDocument) -> Result<CompilerOutput, CompilerError>;
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn compile(&self, source: &SourceDocument) -> Result<CompilerOutput, CompilerError> {
        (**self).compile(source)
    }
}

/// Compiler double returning a canned output
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct FakeCompiler {
    output: CompilerOutput,
    calls: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl FakeCompiler {
    pub fn new(output: CompilerOutput) -> Self {
        Self {
            output,
            calls: Default::default(),
        }
    }

    /// Source texts seen so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Compiler for FakeCompiler {
    fn compile(&self, source: &SourceDocument) -> Result<CompilerOutput, CompilerError> {
        self.calls.lock().unwrap().push(source.text().to_string());
        Ok(self.output.clone())
    }
}
