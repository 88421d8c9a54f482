//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use solbuild::presentation::factory;
//!
//! let use_case = factory::create_build_use_case(&config);
//! let report = use_case.execute(&config.build_options(&cwd))?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::create_build_use_case;
pub use output::{create_renderer, BuildRenderer, JsonRenderer, OutputFormat, TextRenderer};
