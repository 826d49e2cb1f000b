// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside scaffold failure reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid blueprint '{blueprint}': {reason}")]
    InvalidBlueprint { blueprint: String, reason: String },

    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("File '{file}' has no declared parent directory '{parent}'")]
    OrphanFile { file: String, parent: String },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("Unresolved placeholder '{placeholder}' left after substitution")]
    UnresolvedPlaceholder { placeholder: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown blueprint '{0}'")]
    UnknownBlueprint(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, digits, '.', '-' and '_' only".into(),
                "Start with a letter or digit".into(),
                "Examples: demo, my-api, shop_service".into(),
            ],
            Self::UnknownBlueprint(id) => vec![
                format!("No blueprint is registered as '{}'", id),
                "List available blueprints: lessgo list".into(),
            ],
            Self::UnresolvedPlaceholder { placeholder } => vec![
                format!("The blueprint references an unbound variable: {}", placeholder),
                "This is a bug in the built-in blueprint, please report it".into(),
            ],
            Self::InvalidBlueprint { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::OrphanFile { .. } => vec![
                "The blueprint definition is malformed".into(),
                "This is a bug in the built-in blueprint, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownBlueprint(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
