//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the engine needs from the outside world.
//! The `lessgo-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::domain::{Blueprint, BlueprintId, CommandInvocation};
use crate::error::LessgoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `lessgo_adapters::filesystem::LocalFilesystem` (production)
/// - `lessgo_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Errors are plain `io::Error`s; the materializers attach the path and
/// stage.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Existing directories are
    /// not an error.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Exit information from a finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard error, possibly empty.
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running external processes.
///
/// Implemented by:
/// - `lessgo_adapters::process::SystemCommandRunner` (production)
/// - `lessgo_adapters::process::ScriptedCommandRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run to completion in `invocation.working_dir`.
    ///
    /// `Err` means the process could not be started at all; a non-zero exit
    /// is reported through `CommandOutcome`.
    fn run(&self, invocation: &CommandInvocation) -> io::Result<CommandOutcome>;
}

/// Port for blueprint lookup.
///
/// Implemented by:
/// - `lessgo_adapters::catalog::BuiltinCatalog` (compiled-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait BlueprintCatalog: Send + Sync {
    /// Resolve a blueprint by identity.
    fn get(&self, id: BlueprintId) -> LessgoResult<Blueprint>;

    /// Every identity this catalog can resolve.
    fn list(&self) -> Vec<BlueprintId>;
}
