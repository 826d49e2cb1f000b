//! Application layer errors.
//!
//! These errors represent failures while materializing a project, not
//! domain rule violations. Domain errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ScaffoldProgress, ScaffoldStage};
use crate::error::ErrorCategory;

/// Errors that occur while a scaffold runs.
///
/// Every variant names the failing artifact and carries the underlying
/// system cause as text, so the value stays `Clone`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// `create_dir_all` reported an error.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// Creation reported success but the directory is not there.
    #[error("Directory {path} is missing after creation")]
    DirectoryVerificationFailed { path: PathBuf },

    /// A template could not be rendered.
    #[error("Failed to render {path}: {reason}")]
    FileRenderFailed { path: PathBuf, reason: String },

    /// Writing a rendered file failed.
    #[error("Failed to write {path}: {reason}")]
    FileWriteFailed { path: PathBuf, reason: String },

    /// The manifest initialization command failed.
    #[error("`{command}` failed: {reason}")]
    CommandInitFailed { command: String, reason: String },

    /// The dependency resolution command failed.
    #[error("`{command}` failed: {reason}")]
    CommandResolveFailed { command: String, reason: String },

    /// The blueprint failed structural validation.
    #[error("Blueprint is invalid: {reason}")]
    InvalidBlueprint { reason: String },

    /// The catalog has no blueprint under this identity.
    #[error("Blueprint '{id}' not found")]
    BlueprintNotFound { id: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions in the parent directory".into(),
                "Check available disk space".into(),
            ],
            Self::DirectoryVerificationFailed { path } => vec![
                format!("Directory did not appear: {}", path.display()),
                "The filesystem may be read-only or mounted with restrictions".into(),
            ],
            Self::FileRenderFailed { .. } => vec![
                "A built-in template could not be rendered".into(),
                "This is a bug in the blueprint, please report it".into(),
            ],
            Self::FileWriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommandInitFailed { command, .. } => vec![
                format!("`{}` did not succeed", command),
                "Ensure the Go toolchain is installed and `go` is in your PATH".into(),
                "A go.mod may already exist in the project directory".into(),
            ],
            Self::CommandResolveFailed { command, .. } => vec![
                format!("`{}` did not succeed", command),
                "Check your network connection and GOPROXY settings".into(),
                "Re-run `go mod tidy` inside the project once the problem is fixed".into(),
            ],
            Self::BlueprintNotFound { .. } => vec![
                "List available blueprints: lessgo list".into(),
            ],
            Self::InvalidBlueprint { .. } => vec![
                "This is a bug in the blueprint, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BlueprintNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

/// Terminal outcome of a scaffold run that did not reach `Done`.
///
/// Nothing is rolled back, so `progress` describes the partial project
/// left on disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Scaffold failed during the {stage} stage: {cause}")]
pub struct ScaffoldFailure {
    pub stage: ScaffoldStage,
    #[source]
    pub cause: ApplicationError,
    pub progress: ScaffoldProgress,
}

impl ScaffoldFailure {
    /// User-facing description of what is and is not on disk.
    pub fn partial_state(&self) -> String {
        format!(
            "Project left partially populated at {} ({})",
            self.progress.root.display(),
            self.progress.summary()
        )
    }
}
