//! Scaffold Service - main application orchestrator.
//!
//! This service sequences one "new project" run:
//! 1. Create and verify the directory skeleton
//! 2. Render and write every file template
//! 3. Bootstrap the Go module with the toolchain
//!
//! It drives the `ScaffoldState` machine and uses the driven ports
//! (`Filesystem`, `CommandRunner`) through the materializers.

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, ScaffoldFailure,
        ports::{CommandRunner, Filesystem},
        services::{DirectoryMaterializer, FileMaterializer, ToolchainBootstrapper},
    },
    domain::{
        Blueprint, CommandInvocation, ProjectContext, RenderContext, ScaffoldProgress,
        ScaffoldReport, ScaffoldStage, ScaffoldState,
    },
    error::LessgoResult,
};

/// Main scaffolding service.
///
/// Holds the adapters; the blueprint and project are supplied per call.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use lessgo_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl CommandRunner
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Scaffold a new project.
    ///
    /// Strictly linear and single pass. Nothing is rolled back on failure;
    /// the returned `ScaffoldFailure` says what was left on disk.
    #[instrument(
        skip_all,
        fields(
            blueprint = %blueprint.id(),
            project = %project.name(),
            root = %project.root().display()
        )
    )]
    pub fn scaffold(
        &self,
        blueprint: &Blueprint,
        project: &ProjectContext,
    ) -> LessgoResult<ScaffoldReport> {
        let root = project.root();
        let mut progress =
            ScaffoldProgress::new(root, blueprint.files().len(), blueprint.commands().len());

        let (ctx, invocations) = match prepare(blueprint, project) {
            Ok(prepared) => prepared,
            Err(cause) => {
                return Err(fail(ScaffoldStage::Directories, cause, progress));
            }
        };

        let mut state = ScaffoldState::Idle;
        while let Some(stage) = state.pending_stage() {
            let result = match stage {
                ScaffoldStage::Directories => DirectoryMaterializer::new(self.filesystem.as_ref())
                    .materialize(root, blueprint.directories())
                    .map(|confirmed| progress.directories = confirmed),
                ScaffoldStage::Files => FileMaterializer::new(self.filesystem.as_ref())
                    .materialize(root, blueprint.files(), &ctx, &mut progress),
                ScaffoldStage::Bootstrap => ToolchainBootstrapper::new(self.runner.as_ref())
                    .bootstrap(&invocations, &mut progress),
            };

            if let Err(cause) = result {
                return Err(fail(stage, cause, progress));
            }

            let next = state.advance();
            info!(from = %state, to = %next, "Scaffold state transition");
            state = next;
        }

        state = state.advance();
        info!(state = %state, summary = %progress.summary(), "Scaffold completed successfully");

        Ok(ScaffoldReport {
            project: project.name().to_string(),
            progress,
        })
    }
}

/// Validate the blueprint and bind everything that depends on the project.
fn prepare(
    blueprint: &Blueprint,
    project: &ProjectContext,
) -> Result<(RenderContext, Vec<CommandInvocation>), ApplicationError> {
    let invalid = |e: crate::domain::DomainError| ApplicationError::InvalidBlueprint {
        reason: e.to_string(),
    };

    blueprint.validate().map_err(invalid)?;
    let invocations = blueprint.command_invocations(project).map_err(invalid)?;
    Ok((blueprint.render_context(project), invocations))
}

fn fail(
    stage: ScaffoldStage,
    cause: ApplicationError,
    progress: ScaffoldProgress,
) -> crate::error::LessgoError {
    info!(state = %ScaffoldState::Failed(stage), error = %cause, "Scaffold failed");

    ScaffoldFailure {
        stage,
        cause,
        progress,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::{Path, PathBuf};

    use mockall::Sequence;

    use super::*;
    use crate::application::ports::{CommandOutcome, MockCommandRunner, MockFilesystem};
    use crate::domain::{BlueprintId, BootstrapStep, ProjectName};
    use crate::error::LessgoError;

    fn blueprint() -> Blueprint {
        Blueprint::new(BlueprintId::WebStarter, "test")
            .with_directory("app")
            .with_directory("app/cmd")
            .with_file("app/cmd/main.go", "package main // {{PROJECT_NAME}}")
            .with_file(".env", "ENV=development")
            .with_file("Makefile", "all:")
            .with_command(
                BootstrapStep::InitManifest,
                "go",
                &["mod", "init", "{{PROJECT_NAME}}"],
            )
            .with_command(BootstrapStep::ResolveDependencies, "go", &["mod", "tidy"])
    }

    fn project() -> ProjectContext {
        ProjectContext::new(ProjectName::parse("demo").unwrap(), "/w")
    }

    fn failure(err: LessgoError) -> ScaffoldFailure {
        match err {
            LessgoError::Scaffold(f) => *f,
            other => panic!("expected a scaffold failure, got {other:?}"),
        }
    }

    #[test]
    fn runs_stages_in_order_and_reports_success() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();

        fs.expect_create_dir_all()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_is_dir()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| true);
        fs.expect_write_file()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandOutcome::success()));

        let report = ScaffoldService::new(Box::new(fs), Box::new(runner))
            .scaffold(&blueprint(), &project())
            .unwrap();

        assert_eq!(report.project, "demo");
        assert_eq!(report.root(), Path::new("/w/demo"));
        assert_eq!(report.progress.directories.len(), 3);
        assert_eq!(report.progress.files_written.len(), 3);
        assert_eq!(
            report.progress.commands_completed,
            vec!["go mod init demo".to_string(), "go mod tidy".to_string()]
        );
    }

    #[test]
    fn directory_failure_writes_nothing() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();
        fs.expect_create_dir_all()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        fs.expect_write_file().never();
        runner.expect_run().never();

        let err = ScaffoldService::new(Box::new(fs), Box::new(runner))
            .scaffold(&blueprint(), &project())
            .unwrap_err();

        let failure = failure(err);
        assert_eq!(failure.stage, ScaffoldStage::Directories);
        assert_eq!(
            failure.cause,
            ApplicationError::DirectoryCreationFailed {
                path: PathBuf::from("/w/demo"),
                reason: "denied".into(),
            }
        );
        assert!(failure.progress.files_written.is_empty());
    }

    #[test]
    fn file_failure_skips_bootstrap_and_keeps_partial_state() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_is_dir().returning(|_| true);
        fs.expect_write_file().returning(|p, _| {
            if p.ends_with("Makefile") {
                Err(io::Error::other("disk full"))
            } else {
                Ok(())
            }
        });
        runner.expect_run().never();

        let err = ScaffoldService::new(Box::new(fs), Box::new(runner))
            .scaffold(&blueprint(), &project())
            .unwrap_err();

        let failure = failure(err);
        assert_eq!(failure.stage, ScaffoldStage::Files);
        assert_eq!(failure.progress.directories.len(), 3);
        assert_eq!(failure.progress.files_written.len(), 2);
        assert_eq!(
            failure.partial_state(),
            "Project left partially populated at /w/demo (3 directories confirmed; \
             2 of 3 files written; toolchain bootstrap not run)"
        );
    }

    #[test]
    fn failed_init_is_a_bootstrap_failure_and_skips_tidy() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_is_dir().returning(|_| true);
        fs.expect_write_file().times(3).returning(|_, _| Ok(()));
        runner
            .expect_run()
            .withf(|i| i.step == BootstrapStep::InitManifest)
            .times(1)
            .returning(|_| Ok(CommandOutcome::failure(1, "")));
        runner
            .expect_run()
            .withf(|i| i.step == BootstrapStep::ResolveDependencies)
            .never();

        let err = ScaffoldService::new(Box::new(fs), Box::new(runner))
            .scaffold(&blueprint(), &project())
            .unwrap_err();

        let failure = failure(err);
        assert_eq!(failure.stage, ScaffoldStage::Bootstrap);
        assert!(matches!(
            failure.cause,
            ApplicationError::CommandInitFailed { .. }
        ));
        assert_eq!(failure.progress.files_written.len(), 3);
        assert_eq!(
            failure.partial_state(),
            "Project left partially populated at /w/demo (3 directories confirmed; \
             3 of 3 files written; 0 of 2 toolchain commands completed \
             (`go mod init demo` failed))"
        );
    }

    #[test]
    fn invalid_blueprint_touches_nothing() {
        let mut fs = MockFilesystem::new();
        let mut runner = MockCommandRunner::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        runner.expect_run().never();

        let orphaned = blueprint().with_file("app/src/app_module.go", "package x");
        let err = ScaffoldService::new(Box::new(fs), Box::new(runner))
            .scaffold(&orphaned, &project())
            .unwrap_err();

        let failure = failure(err);
        assert_eq!(failure.stage, ScaffoldStage::Directories);
        assert!(matches!(
            failure.cause,
            ApplicationError::InvalidBlueprint { .. }
        ));
    }
}
