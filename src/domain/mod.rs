//! Domain Layer
//!
//! The core of solbuild - build logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Source documents, contract keys/records, compiler output, artifacts
//! - `value_objects/` - Immutable value types (JsonFormat, ConfigWarning)
//! - `services/` - Domain services (artifact planning)
//! - `ports/` - Interface definitions for infrastructure (Compiler, FileSystem)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
