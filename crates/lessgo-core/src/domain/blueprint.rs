//! Blueprint model: the directory skeleton, file templates and toolchain
//! commands that make up one project layout.
//!
//! A [`Blueprint`] is pure data. It is resolved from a catalog by
//! [`BlueprintId`], validated once, rendered against a
//! [`ProjectContext`](crate::domain::ProjectContext) and handed to the
//! materializers.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, ProjectContext, RelativePath, RenderContext};

// ── Identity ──────────────────────────────────────────────────────────────────

/// Identity of a blueprint in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlueprintId {
    /// LessGo web starter: entry point, module/controller/service trio and
    /// container/task-runner/live-reload configuration.
    #[default]
    WebStarter,
}

impl BlueprintId {
    /// Every known identity, in listing order.
    pub const ALL: &'static [BlueprintId] = &[BlueprintId::WebStarter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebStarter => "web-starter",
        }
    }
}

impl fmt::Display for BlueprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlueprintId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownBlueprint(s.to_string()))
    }
}

// ── Specs ─────────────────────────────────────────────────────────────────────

/// A directory that must exist before files beneath it are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

/// A file template and where its rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub template: String,
}

/// Which toolchain step a command performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BootstrapStep {
    /// Create the dependency manifest (`go mod init`).
    InitManifest,
    /// Resolve and tidy the manifest (`go mod tidy`).
    ResolveDependencies,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitManifest => f.write_str("manifest initialization"),
            Self::ResolveDependencies => f.write_str("dependency resolution"),
        }
    }
}

/// An external command run inside the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub step: BootstrapStep,
    pub program: String,
    /// Argument templates; may reference render variables.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Bind arguments and pin the working directory to `root`.
    pub fn render(
        &self,
        ctx: &RenderContext,
        root: &Path,
    ) -> Result<CommandInvocation, DomainError> {
        let args = self
            .args
            .iter()
            .map(|arg| ctx.render(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CommandInvocation {
            step: self.step,
            program: self.program.clone(),
            args,
            working_dir: root.to_path_buf(),
        })
    }
}

/// A fully rendered command, ready to hand to a runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub step: BootstrapStep,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Blueprint ─────────────────────────────────────────────────────────────────

/// One project skeleton.
///
/// Ordering matters: directories are created in declaration order, files
/// are written in catalog order and commands run in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    id: BlueprintId,
    description: String,
    directories: Vec<DirectorySpec>,
    files: Vec<FileSpec>,
    commands: Vec<CommandSpec>,
    variables: Vec<(String, String)>,
}

impl Blueprint {
    pub fn new(id: BlueprintId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            directories: Vec::new(),
            files: Vec::new(),
            commands: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn with_directory(mut self, path: &str) -> Self {
        self.directories.push(DirectorySpec {
            path: RelativePath::new(path),
        });
        self
    }

    pub fn with_file(mut self, path: &str, template: impl Into<String>) -> Self {
        self.files.push(FileSpec {
            path: RelativePath::new(path),
            template: template.into(),
        });
        self
    }

    pub fn with_command(
        mut self,
        step: BootstrapStep,
        program: &str,
        args: &[&str],
    ) -> Self {
        self.commands.push(CommandSpec {
            step,
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    /// Bind a blueprint-level render variable (e.g. the application dir).
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((key.into(), value.into()));
        self
    }

    /// Replace the program of every toolchain command.
    pub fn with_toolchain_program(mut self, program: &str) -> Self {
        for command in &mut self.commands {
            command.program = program.to_string();
        }
        self
    }

    pub fn id(&self) -> BlueprintId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn directories(&self) -> &[DirectorySpec] {
        &self.directories
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Render context for `project`, including blueprint variables.
    pub fn render_context(&self, project: &ProjectContext) -> RenderContext {
        self.variables
            .iter()
            .fold(RenderContext::new(project), |ctx, (k, v)| {
                ctx.with_variable(k.as_str(), v.as_str())
            })
    }

    /// Render every command for `project`, in declaration order.
    pub fn command_invocations(
        &self,
        project: &ProjectContext,
    ) -> Result<Vec<CommandInvocation>, DomainError> {
        let ctx = self.render_context(project);
        self.commands
            .iter()
            .map(|c| c.render(&ctx, project.root()))
            .collect()
    }

    /// Check structural invariants.
    ///
    /// - at least one file
    /// - no path declared twice
    /// - every file's parent is the root or covered by a declared directory
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidBlueprint {
                blueprint: self.id.to_string(),
                reason: "blueprint declares no files".into(),
            });
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .map(|d| &d.path)
            .chain(self.files.iter().map(|f| &f.path));
        for path in paths {
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        for file in &self.files {
            let Some(parent) = file.path.parent() else {
                continue;
            };
            let covered = self.directories.iter().any(|d| d.path.starts_with(&parent));
            if !covered {
                return Err(DomainError::OrphanFile {
                    file: file.path.to_string(),
                    parent: parent.to_string(),
                });
            }
        }

        Ok(())
    }
}
