//! Domain Entities
//!
//! - `SourceDocument` - the contract source read from disk
//! - `ContractKey` / `ContractRecord` - compiler keys and opaque records
//! - `CompilerOutput` - contracts plus diagnostics from one compile
//! - `PlannedArtifact` / `WrittenArtifact` - build artifacts

mod artifact;
mod compiler_output;
mod contract;
mod source_document;

pub use artifact::{PlannedArtifact, WrittenArtifact};
pub use compiler_output::{CompilerOutput, Diagnostic, Severity};
pub use contract::{ContractKey, ContractRecord, KEY_SEPARATOR};
pub use source_document::SourceDocument;
