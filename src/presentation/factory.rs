//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::BuildUseCase;
use crate::config::Config;
use crate::infrastructure::{LocalFs, SolcCompiler};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<SolcCompiler, LocalFs>;

/// Create a build use case driving the configured solc binary
pub fn create_build_use_case(config: &Config) -> ConcreteBuildUseCase {
    let compiler = SolcCompiler::new(&config.compiler.solc)
        .with_optimizer(config.optimizer())
        .with_layout(config.compiler.layout);

    BuildUseCase::new(compiler, LocalFs::new())
}
