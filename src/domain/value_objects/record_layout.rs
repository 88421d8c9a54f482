//! Contract record layout

use serde::{Deserialize, Serialize};

/// Shape of the contract records written to artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// Flat combined layout: `interface`, `bytecode`, `runtimeBytecode`, ...
    #[default]
    Legacy,
    /// Contract entry exactly as the compiler's standard-JSON output has it
    Standard,
}
