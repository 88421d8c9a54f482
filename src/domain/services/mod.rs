//! Domain Services
//!
//! Stateless business logic that operates on domain entities.

mod artifact_planner;

pub use artifact_planner::plan_artifacts;
