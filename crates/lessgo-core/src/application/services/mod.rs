//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "plan a blueprint".

pub mod blueprint_service;
pub mod directory_materializer;
pub mod file_materializer;
pub mod scaffold_service;
pub mod toolchain;

pub use blueprint_service::{BlueprintInfo, BlueprintService, PlannedFile, ScaffoldPlan};
pub use directory_materializer::DirectoryMaterializer;
pub use file_materializer::FileMaterializer;
pub use scaffold_service::ScaffoldService;
pub use toolchain::ToolchainBootstrapper;
