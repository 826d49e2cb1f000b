//! Scaffold lifecycle: stages, the linear state machine, and what a run
//! leaves behind.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The three fallible stages of a scaffold run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldStage {
    Directories,
    Files,
    Bootstrap,
}

impl fmt::Display for ScaffoldStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directories => f.write_str("directories"),
            Self::Files => f.write_str("files"),
            Self::Bootstrap => f.write_str("bootstrap"),
        }
    }
}

/// Orchestrator state.
///
/// ```text
/// Idle ─▶ DirectoriesReady ─▶ FilesReady ─▶ BootstrapComplete ─▶ Done
///   │             │                │
///   └─────────────┴────────────────┴──▶ Failed(stage)
/// ```
///
/// Transitions only move forward. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldState {
    Idle,
    DirectoriesReady,
    FilesReady,
    BootstrapComplete,
    Done,
    Failed(ScaffoldStage),
}

impl ScaffoldState {
    /// The stage that runs to leave this state, if any.
    pub fn pending_stage(self) -> Option<ScaffoldStage> {
        match self {
            Self::Idle => Some(ScaffoldStage::Directories),
            Self::DirectoriesReady => Some(ScaffoldStage::Files),
            Self::FilesReady => Some(ScaffoldStage::Bootstrap),
            Self::BootstrapComplete | Self::Done | Self::Failed(_) => None,
        }
    }

    /// Next state after the pending step succeeded. Terminal states stay put.
    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::DirectoriesReady,
            Self::DirectoriesReady => Self::FilesReady,
            Self::FilesReady => Self::BootstrapComplete,
            Self::BootstrapComplete => Self::Done,
            terminal => terminal,
        }
    }

    /// State after the pending stage failed. Only non-terminal states with a
    /// pending stage can fail; others stay put.
    pub fn fail(self) -> Self {
        match self.pending_stage() {
            Some(stage) => Self::Failed(stage),
            None => self,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

impl fmt::Display for ScaffoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::DirectoriesReady => f.write_str("directories-ready"),
            Self::FilesReady => f.write_str("files-ready"),
            Self::BootstrapComplete => f.write_str("bootstrap-complete"),
            Self::Done => f.write_str("done"),
            Self::Failed(stage) => write!(f, "failed({stage})"),
        }
    }
}

/// What a scaffold run has put on disk so far.
///
/// On failure this is the only record of the partial state, so every
/// stage appends to it as work completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldProgress {
    pub root: PathBuf,
    /// Directories created and confirmed present.
    pub directories: Vec<PathBuf>,
    /// Files written, in write order.
    pub files_written: Vec<PathBuf>,
    /// Files the blueprint declares.
    pub files_total: usize,
    /// Toolchain commands that exited successfully.
    pub commands_completed: Vec<String>,
    /// Toolchain command that was started and did not succeed, if any.
    /// It may still have left files behind.
    pub command_failed: Option<String>,
    /// Toolchain commands the blueprint declares.
    pub commands_total: usize,
}

impl ScaffoldProgress {
    pub fn new(root: impl Into<PathBuf>, files_total: usize, commands_total: usize) -> Self {
        Self {
            root: root.into(),
            files_total,
            commands_total,
            ..Self::default()
        }
    }

    /// One-line description of what exists on disk.
    pub fn summary(&self) -> String {
        let directories = if self.directories.is_empty() {
            "directories not confirmed".to_string()
        } else {
            format!("{} directories confirmed", self.directories.len())
        };
        let completed = format!(
            "{} of {} toolchain commands completed",
            self.commands_completed.len(),
            self.commands_total
        );
        let bootstrap = match &self.command_failed {
            Some(command) => format!("{completed} (`{command}` failed)"),
            None if self.commands_completed.is_empty() => {
                "toolchain bootstrap not run".to_string()
            }
            None => completed,
        };
        format!(
            "{directories}; {} of {} files written; {bootstrap}",
            self.files_written.len(),
            self.files_total
        )
    }
}

/// Successful scaffold outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project: String,
    pub progress: ScaffoldProgress,
}

impl ScaffoldReport {
    pub fn root(&self) -> &std::path::Path {
        &self.progress.root
    }
}
