//! Output Rendering
//!
//! Renders build reports, errors and config warnings as text or JSON.
//! Renderers write to any `io::Write` so the binary can pick stdout/stderr
//! and tests can capture into a buffer.

use std::io::{self, Write};

use serde::Serialize;

use crate::application::BuildReport;
use crate::domain::entities::Severity;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{BuildError, Stage};

const COMMAND: &str = "build";

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            warn: "[!]",
        }
    }
}

/// Trait for rendering build outcomes
pub trait BuildRenderer {
    /// Render a successful build
    fn render_report(&self, report: &BuildReport, out: &mut dyn Write) -> io::Result<()>;

    /// Render a fatal error
    fn render_error(&self, err: &anyhow::Error, out: &mut dyn Write) -> io::Result<()>;

    /// Render non-fatal config warnings
    fn render_warnings(&self, warnings: &[ConfigWarning], out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for build results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

impl BuildRenderer for TextRenderer {
    fn render_report(&self, report: &BuildReport, out: &mut dyn Write) -> io::Result<()> {
        let icons = self.icons();
        let errors = report.count(Severity::Error);
        let warnings = report.count(Severity::Warning);

        writeln!(out, "{} Build Complete", icons.check)?;
        writeln!(out)?;
        writeln!(out, "  Source: {}", report.source.display())?;
        writeln!(out, "  Output: {}", report.out_dir.display())?;
        writeln!(
            out,
            "  {} artifacts, {} compiler errors, {} warnings",
            report.artifact_count(),
            errors,
            warnings
        )?;

        if !report.artifacts.is_empty() {
            writeln!(out)?;
            writeln!(out, "  Written ({}):", report.artifact_count())?;
            for artifact in &report.artifacts {
                writeln!(out, "    {} {}", icons.write, artifact.path.display())?;
            }
        }

        if report.is_empty() && errors > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "  {} compiler reported errors; no artifacts were written",
                icons.warn
            )?;
        }

        if self.verbose > 0 && !report.diagnostics.is_empty() {
            writeln!(out)?;
            writeln!(out, "  Diagnostics ({}):", report.diagnostics.len())?;
            for diagnostic in &report.diagnostics {
                let first_line = diagnostic.message.lines().next().unwrap_or_default();
                writeln!(out, "    [{}] {}", diagnostic.severity, first_line)?;
            }
        }

        Ok(())
    }

    fn render_error(&self, err: &anyhow::Error, out: &mut dyn Write) -> io::Result<()> {
        let icons = self.icons();
        match error_stage(err) {
            Some(stage) => writeln!(out, "{} Build Failed ({} stage)", icons.cross, stage)?,
            None => writeln!(out, "{} Build Failed", icons.cross)?,
        }
        writeln!(out)?;
        writeln!(out, "  {:#}", err)
    }

    fn render_warnings(&self, warnings: &[ConfigWarning], out: &mut dyn Write) -> io::Result<()> {
        for warning in warnings {
            writeln!(out, "[WARN] {}", warning)?;
        }
        Ok(())
    }
}

/// Event emitted when the build completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub source: String,
    pub out_dir: String,
    pub artifacts: Vec<ArtifactEntry<'a>>,
    pub diagnostics: usize,
}

/// One written artifact in a `CompleteEvent`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEntry<'a> {
    pub contract: &'a str,
    pub key: &'a str,
    pub path: String,
    pub bytes: usize,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(report: &'a BuildReport) -> Self {
        Self {
            event: "complete",
            command: COMMAND,
            source: report.source.display().to_string(),
            out_dir: report.out_dir.display().to_string(),
            artifacts: report
                .artifacts
                .iter()
                .map(|a| ArtifactEntry {
                    contract: &a.contract,
                    key: &a.key,
                    path: a.path.display().to_string(),
                    bytes: a.bytes,
                })
                .collect(),
            diagnostics: report.diagnostics.len(),
        }
    }
}

/// Event emitted when the build fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(err: &anyhow::Error) -> Self {
        Self {
            event: "error",
            command: COMMAND,
            stage: error_stage(err).map(Stage::as_str),
            message: format!("{:#}", err),
        }
    }
}

/// Event emitted for a non-fatal config warning.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning: &ConfigWarning) -> Self {
        Self {
            event: "warning",
            command: COMMAND,
            message: warning.to_string(),
        }
    }
}

fn emit<T: Serialize>(event: &T, out: &mut dyn Write) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    writeln!(out, "{}", line)
}

/// JSON renderer for build results, one object per line
pub struct JsonRenderer;

impl BuildRenderer for JsonRenderer {
    fn render_report(&self, report: &BuildReport, out: &mut dyn Write) -> io::Result<()> {
        emit(&CompleteEvent::new(report), out)
    }

    fn render_error(&self, err: &anyhow::Error, out: &mut dyn Write) -> io::Result<()> {
        emit(&ErrorEvent::new(err), out)
    }

    fn render_warnings(&self, warnings: &[ConfigWarning], out: &mut dyn Write) -> io::Result<()> {
        for warning in warnings {
            emit(&WarningEvent::new(warning), out)?;
        }
        Ok(())
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn BuildRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Stage of the first `BuildError` in the chain, if any
fn error_stage(err: &anyhow::Error) -> Option<Stage> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BuildError>())
        .map(BuildError::stage)
}
