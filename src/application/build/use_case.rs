//! Build Use Case
//!
//! Reset output directory, load source, compile, write artifacts. Each
//! stage runs to completion before the next starts and the first failure
//! ends the build; nothing is retried or rolled back.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use crate::domain::entities::{CompilerOutput, Severity, SourceDocument, WrittenArtifact};
use crate::domain::ports::{Compiler, FileSystem};
use crate::domain::services::plan_artifacts;
use crate::domain::value_objects::JsonFormat;
use crate::error::{BuildError, BuildResult};

use super::options::BuildOptions;
use super::result::BuildReport;

/// Build use case - compiles one source file into per-contract artifacts
pub struct BuildUseCase<C, FS>
where
    C: Compiler,
    FS: FileSystem,
{
    compiler: C,
    fs: FS,
}

impl<C, FS> BuildUseCase<C, FS>
where
    C: Compiler,
    FS: FileSystem,
{
    /// Create a new build use case
    pub fn new(compiler: C, fs: FS) -> Self {
        Self { compiler, fs }
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Run the full pipeline
    pub fn execute(&self, options: &BuildOptions) -> BuildResult<BuildReport> {
        self.reset_output_dir(&options.out_dir)?;
        let source = self.load_source(&options.source)?;
        let output = self.compile(&source)?;
        let artifacts = self.write_artifacts(&output, &options.out_dir, options.format)?;

        let mut report = BuildReport::new(&options.source, &options.out_dir);
        report.artifacts = artifacts;
        report.diagnostics = output.diagnostics().to_vec();

        info!(
            artifacts = report.artifact_count(),
            out_dir = %options.out_dir.display(),
            "build complete"
        );
        Ok(report)
    }

    /// Ensure `dir` exists and is empty
    pub fn reset_output_dir(&self, dir: &Path) -> BuildResult<()> {
        let _span = info_span!("reset", dir = %dir.display()).entered();

        if self.fs.exists(dir) {
            debug!("removing previous build output");
        }
        self.fs
            .remove_dir_all(dir)
            .map_err(BuildError::ResetOutputDir)?;
        self.fs
            .create_dir_all(dir)
            .map_err(BuildError::ResetOutputDir)?;

        info!("output directory reset");
        Ok(())
    }

    /// Read the contract source as UTF-8 text
    pub fn load_source(&self, path: &Path) -> BuildResult<SourceDocument> {
        let _span = info_span!("load", source = %path.display()).entered();

        let text = self.fs.read(path).map_err(BuildError::ReadSource)?;
        let source = SourceDocument::new(path, text);

        info!(bytes = source.len(), "source loaded");
        Ok(source)
    }

    /// Hand the source to the compiler
    ///
    /// Diagnostics are logged, never raised; an uncompilable source yields
    /// an output with no contracts.
    pub fn compile(&self, source: &SourceDocument) -> BuildResult<CompilerOutput> {
        let _span = info_span!("compile", source = %source.path().display()).entered();

        let output = self
            .compiler
            .compile(source)
            .map_err(|e| BuildError::Compile {
                file: source.path().to_path_buf(),
                source: e,
            })?;

        for diagnostic in output.diagnostics() {
            debug!(severity = %diagnostic.severity, "{}", diagnostic.message);
        }
        if output.contract_count() == 0 && output.has_errors() {
            warn!("compiler reported errors and produced no contracts");
        }

        let errors = output
            .diagnostics()
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        info!(contracts = output.contract_count(), errors, "compiled");
        Ok(output)
    }

    /// Write one `<ContractName>.json` per contract into `out_dir`
    ///
    /// All file names are derived up front; a malformed key or a name
    /// collision aborts before the first write. A failed write aborts the
    /// remaining ones and leaves earlier files in place.
    pub fn write_artifacts(
        &self,
        output: &CompilerOutput,
        out_dir: &Path,
        format: JsonFormat,
    ) -> BuildResult<Vec<WrittenArtifact>> {
        let _span = info_span!("write", out_dir = %out_dir.display()).entered();

        let planned = plan_artifacts(output)?;
        let mut written = Vec::with_capacity(planned.len());

        for artifact in planned {
            let file_name = artifact.file_name();
            let path = artifact.path_in(out_dir);

            let content = format
                .encode(artifact.record())
                .map_err(|source| BuildError::Serialize {
                    file_name: file_name.clone(),
                    source,
                })?;

            self.fs
                .write(&path, &content)
                .map_err(BuildError::WriteArtifact)?;

            debug!(
                key = %artifact.key(),
                file = %file_name,
                bytes = content.len(),
                "artifact written"
            );
            written.push(WrittenArtifact {
                key: artifact.key().to_string(),
                contract: artifact.key().name().to_string(),
                path,
                bytes: content.len(),
            });
        }

        Ok(written)
    }
}
