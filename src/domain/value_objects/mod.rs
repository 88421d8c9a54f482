//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod json_format;
mod record_layout;

pub use config_warning::ConfigWarning;
pub use json_format::JsonFormat;
pub use record_layout::RecordLayout;
