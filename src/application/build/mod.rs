//! Build Module
//!
//! Orchestrates the compile-and-emit flow.
//!
//! ## Structure
//!
//! - `options` - Input paths and artifact format (`BuildOptions`)
//! - `result` - Outcome of a successful build (`BuildReport`)
//! - `use_case` - Pipeline stages (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use solbuild::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(compiler, fs);
//! let report = use_case.execute(&BuildOptions::new("contracts/Campaign.sol", "build"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::BuildReport;
pub use use_case::BuildUseCase;
