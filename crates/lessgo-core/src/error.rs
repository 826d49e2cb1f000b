//! Unified error handling for LessGo Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, ScaffoldFailure};
use crate::domain::DomainError;

/// Root error type for LessGo Core operations.
///
/// This enum wraps all possible errors that can occur when using lessgo-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum LessgoError {
    /// Errors from the domain layer (invalid names, malformed blueprints).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer outside a scaffold run.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// A scaffold run that stopped in a failed state.
    #[error("{0}")]
    Scaffold(Box<ScaffoldFailure>),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl From<ScaffoldFailure> for LessgoError {
    fn from(failure: ScaffoldFailure) -> Self {
        Self::Scaffold(Box::new(failure))
    }
}

impl LessgoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Scaffold(f) => {
                let mut suggestions = vec![f.partial_state()];
                suggestions.extend(f.cause.suggestions());
                suggestions
            }
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in LessGo".into(),
                "Please report it together with the output of `lessgo --version`".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Scaffold(_) => ErrorCategory::Scaffold,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The failed scaffold, if this error came from one.
    pub fn scaffold_failure(&self) -> Option<&ScaffoldFailure> {
        match self {
            Self::Scaffold(f) => Some(f.as_ref()),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Scaffold,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type LessgoResult<T> = Result<T, LessgoError>;
