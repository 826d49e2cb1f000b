//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the engine needs from the outside world.
//! Adapters in `lessgo-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, file writes, existence checks
//!   - `CommandRunner`: external toolchain processes
//!   - `BlueprintCatalog`: blueprint lookup
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{BlueprintCatalog, CommandOutcome, CommandRunner, Filesystem};

#[cfg(test)]
pub use output::{MockBlueprintCatalog, MockCommandRunner, MockFilesystem};
