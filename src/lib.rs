//! solbuild - compile one Solidity source file into per-contract artifacts
//!
//! A build resets the output directory, reads the source, hands it to an
//! external `solc`, and writes one `<ContractName>.json` file per contract
//! in the result.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildReport, BuildUseCase};
pub use config::{Config, ConfigOverrides};
pub use domain::entities::{CompilerOutput, ContractKey, ContractRecord};
pub use domain::ports::{Compiler, CompilerError, FileSystem, FsError};
pub use error::{ArtifactError, BuildError, BuildResult, Stage};
pub use infrastructure::{LocalFs, SolcCompiler};
