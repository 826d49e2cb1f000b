//! LessGo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the LessGo
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           lessgo-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, BlueprintService)    │
//! │  Materializers, ToolchainBootstrapper   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Catalog)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    lessgo-adapters (Infrastructure)     │
//! │ (BuiltinCatalog, LocalFilesystem, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectName, Blueprint, RenderContext, │
//! │            ScaffoldState)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lessgo_core::{
//!     application::{BlueprintService, ScaffoldService},
//!     domain::{BlueprintId, ProjectContext, ProjectName},
//! };
//!
//! // 1. Validate the name and fix the project root
//! let project = ProjectContext::in_current_dir(ProjectName::parse("demo").unwrap());
//!
//! // 2. Resolve the blueprint and run the scaffold (with injected adapters)
//! let blueprint = BlueprintService::new(catalog).resolve(BlueprintId::WebStarter).unwrap();
//! let service = ScaffoldService::new(filesystem, runner);
//! service.scaffold(&blueprint, &project).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlueprintInfo, BlueprintService, ScaffoldFailure, ScaffoldPlan, ScaffoldService,
        ports::{BlueprintCatalog, CommandOutcome, CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        Blueprint, BlueprintId, BootstrapStep, CommandInvocation, ProjectContext, ProjectName,
        RenderContext, ScaffoldProgress, ScaffoldReport, ScaffoldStage,
    };
    pub use crate::error::{ErrorCategory, LessgoError, LessgoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
