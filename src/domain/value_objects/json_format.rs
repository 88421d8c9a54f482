//! Artifact JSON layout

use serde::{Deserialize, Serialize};

/// How contract records are laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFormat {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// Two-space indented
    Pretty,
}

impl JsonFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonFormat::Pretty
        } else {
            JsonFormat::Compact
        }
    }

    pub fn encode<T: Serialize>(self, value: &T) -> serde_json::Result<String> {
        match self {
            JsonFormat::Compact => serde_json::to_string(value),
            JsonFormat::Pretty => serde_json::to_string_pretty(value),
        }
    }
}
