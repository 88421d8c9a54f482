//! Compiler Implementations
//!
//! Concrete implementations of the Compiler port.

mod solc;
pub mod standard_json;

pub use solc::SolcCompiler;
pub use standard_json::OptimizerSettings;
