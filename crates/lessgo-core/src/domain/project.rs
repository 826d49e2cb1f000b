//! Project identity: the validated name and the root it is scaffolded into.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// A project name that is safe to use as a directory name, a Go module
/// identity and a substitution value.
///
/// Invariant: non-empty, no whitespace, no path separators, does not start
/// with `.` or `-`, only `[A-Za-z0-9._-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate raw user input. Leading and trailing whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name cannot contain whitespace"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.starts_with('-') {
            return Err(invalid("name cannot start with '-'"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything a scaffold operation knows about its target.
///
/// Created once from user input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    name: ProjectName,
    root: PathBuf,
}

impl ProjectContext {
    /// Project rooted at `<parent>/<name>`.
    pub fn new(name: ProjectName, parent: impl AsRef<Path>) -> Self {
        let root = parent.as_ref().join(name.as_str());
        Self { name, root }
    }

    /// Project rooted at `./<name>`.
    pub fn in_current_dir(name: ProjectName) -> Self {
        Self::new(name, ".")
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
