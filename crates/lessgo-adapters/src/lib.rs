//! Infrastructure adapters for LessGo.
//!
//! This crate implements the ports defined in `lessgo-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedCommandRunner, SystemCommandRunner};
