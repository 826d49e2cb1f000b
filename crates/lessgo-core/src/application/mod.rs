//! Application layer for LessGo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, BlueprintService)
//!   and the per-stage workers they drive
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but holds no scaffold
//! rules itself. Blueprint structure and rendering live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BlueprintInfo, // DTO for blueprint listings
    BlueprintService,
    PlannedFile,
    ScaffoldPlan,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BlueprintCatalog, CommandOutcome, CommandRunner, Filesystem};

pub use error::{ApplicationError, ScaffoldFailure};
