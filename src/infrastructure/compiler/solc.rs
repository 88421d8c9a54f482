//! solc process adapter
//!
//! Runs the `solc` executable in `--standard-json` mode, writing the request
//! to stdin and reading the response from stdout.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::entities::{CompilerOutput, SourceDocument};
use crate::domain::ports::{Compiler, CompilerError};
use crate::domain::value_objects::RecordLayout;

use super::standard_json::{self, OptimizerSettings};

/// Compiler port backed by a `solc` binary
#[derive(Debug, Clone)]
pub struct SolcCompiler {
    program: PathBuf,
    optimizer: OptimizerSettings,
    layout: RecordLayout,
}

impl SolcCompiler {
    /// Compiler invoking `program` (looked up on `PATH` if not a path)
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            optimizer: OptimizerSettings::default(),
            layout: RecordLayout::default(),
        }
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerSettings) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn optimizer(&self) -> OptimizerSettings {
        self.optimizer
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for SolcCompiler {
    fn default() -> Self {
        Self::new("solc")
    }
}

impl Compiler for SolcCompiler {
    fn compile(&self, source: &SourceDocument) -> Result<CompilerOutput, CompilerError> {
        let program = self.program_name();
        let input = standard_json::build_input(source.text(), self.optimizer).to_string();

        tracing::debug!(
            program = %program,
            optimize = self.optimizer.enabled,
            runs = self.optimizer.runs,
            "invoking solc --standard-json"
        );

        let mut child = Command::new(&self.program)
            .arg("--standard-json")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CompilerError::Spawn {
                program: program.clone(),
                source,
            })?;

        // solc consumes all of stdin before writing any output. A broken pipe
        // means it exited early; its exit status is reported below instead.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(input.as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(source) => {
                    return Err(CompilerError::Io {
                        program: program.clone(),
                        source,
                    })
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|source| CompilerError::Io {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CompilerError::Exited {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        standard_json::parse_output(&output.stdout, self.layout)
            .map_err(CompilerError::InvalidOutput)
    }
}
