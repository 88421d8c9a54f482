//! Common test utilities for solbuild CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus a stub `solc` executable
//! - Fixtures: Solidity sources and canned compiler responses

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
