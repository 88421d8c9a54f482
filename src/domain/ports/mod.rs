//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compiler;
pub mod file_system;

pub use compiler::{Compiler, CompilerError};
pub use file_system::{FileSystem, FsError, FsResult};

#[cfg(test)]
pub use compiler::FakeCompiler;
#[cfg(test)]
pub use file_system::MockFileSystem;
