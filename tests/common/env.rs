//! Test environment builder for isolated solbuild testing.
//!
//! Provides `TestEnv` - a temp project directory with a stub `solc` on a
//! private `bin/` directory, plus helpers to run the solbuild binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{CAMPAIGN_RESPONSE, SYNTAX_ERROR_RESPONSE};

/// Result of running a solbuild CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp project directory.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Directory holding the stub `solc`, prepended to `PATH`
    bin_dir: PathBuf,
    solbuild_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of the stub compiler
    pub fn solc_path(&self) -> PathBuf {
        self.bin_dir.join("solc")
    }

    /// Standard-JSON request the stub compiler last received
    pub fn last_solc_input(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.bin_dir.join("last-input.json"))
            .expect("stub solc was not invoked");
        serde_json::from_str(&raw).expect("stub solc input is not JSON")
    }

    /// Run solbuild in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run solbuild from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut dirs = vec![self.bin_dir.clone()];
                dirs.extend(std::env::split_paths(&existing));
                std::env::join_paths(dirs).expect("PATH entries are joinable")
            }
            None => self.bin_dir.clone().into_os_string(),
        };

        let mut attempts = 0;
        loop {
            let output = Command::new(&self.solbuild_bin)
                .current_dir(cwd)
                .args(args)
                .env("PATH", &path)
                .output()
                .expect("Failed to execute solbuild");
            let result = output_to_result(output);

            // ETXTBSY: a sibling test forked while its stub was still open for writing
            if !result.success && result.stderr.contains("Text file busy") && attempts < 5 {
                attempts += 1;
                std::thread::sleep(std::time::Duration::from_millis(50));
                continue;
            }
            return result;
        }
    }

    /// Read a file from the project
    pub fn read_project_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Parse a JSON file from the project
    pub fn read_json(&self, relative_path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_project_file(relative_path))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative_path, e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Sorted file names directly inside a project directory
    pub fn list_dir(&self, relative_path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to list {}: {}", relative_path, e))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    solc_script: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            solc_script: None,
        }
    }

    /// Write `contracts/Campaign.sol`
    pub fn with_source(self, content: &str) -> Self {
        self.with_file("contracts/Campaign.sol", content)
    }

    /// Write `solbuild.toml`
    pub fn with_config(self, toml: &str) -> Self {
        self.with_file("solbuild.toml", toml)
    }

    /// Write an arbitrary project file
    pub fn with_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    /// Replace the stub compiler body (a `/bin/sh` script)
    pub fn with_solc_script(mut self, script: &str) -> Self {
        self.solc_script = Some(script.to_string());
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let bin_dir = project_root.path().join(".bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        for (name, content) in &self.files {
            let path = project_root.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&path, content).expect("Failed to write project file");
        }

        let script = self.solc_script.unwrap_or_else(default_solc_script);
        write_executable(&bin_dir.join("solc"), &script);

        TestEnv {
            project_root,
            bin_dir,
            solbuild_bin: PathBuf::from(env!("CARGO_BIN_EXE_solbuild")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stub compiler: records its input, answers with a canned response
///
/// Sources containing `contract CampaignFactory` compile; anything else is
/// reported as a parser error.
fn default_solc_script() -> String {
    format!(
        r#"input=$(cat)
printf '%s' "$input" > "$(dirname "$0")/last-input.json"
case "$input" in
  *"contract CampaignFactory"*) printf '%s' '{campaign}' ;;
  *) printf '%s' '{broken}' ;;
esac"#,
        campaign = CAMPAIGN_RESPONSE,
        broken = SYNTAX_ERROR_RESPONSE,
    )
}

fn write_executable(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, format!("#!/bin/sh\n{}\n", script)).expect("Failed to write stub");
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to make stub executable");
}
