//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `compiler/` - `solc` standard-JSON adapter

pub mod compiler;
pub mod fs;

// Re-export for convenience
pub use compiler::{OptimizerSettings, SolcCompiler};
pub use fs::LocalFs;
