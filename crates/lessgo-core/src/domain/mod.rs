// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for LessGo.
//!
//! This module contains pure scaffolding logic with no I/O. Filesystem and
//! process access are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable values**: `ProjectContext` and `Blueprint` are never mutated
//!   once a scaffold starts
pub mod blueprint;
pub mod common;
pub mod error;
pub mod project;
pub mod render;
pub mod scaffold;

pub use blueprint::{
    Blueprint, BlueprintId, BootstrapStep, CommandInvocation, CommandSpec, DirectorySpec,
    FileSpec,
};
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use project::{ProjectContext, ProjectName};
pub use render::{PROJECT_NAME, RenderContext, placeholder_count};
pub use scaffold::{ScaffoldProgress, ScaffoldReport, ScaffoldStage, ScaffoldState};
