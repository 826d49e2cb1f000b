//! Toolchain Bootstrapper - runs the manifest commands in the new project.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner},
    },
    domain::{BootstrapStep, CommandInvocation, ScaffoldProgress},
};

/// Lines of captured stderr kept in a failure reason.
const STDERR_TAIL_LINES: usize = 5;

/// Runs toolchain commands strictly in order, stopping at the first one
/// that fails to start or exits unsuccessfully. No retries, no timeout.
pub struct ToolchainBootstrapper<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> ToolchainBootstrapper<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    #[instrument(skip_all, fields(count = invocations.len()))]
    pub fn bootstrap(
        &self,
        invocations: &[CommandInvocation],
        progress: &mut ScaffoldProgress,
    ) -> Result<(), ApplicationError> {
        for invocation in invocations {
            let command = invocation.to_string();
            info!(command = %command, dir = %invocation.working_dir.display(), "Running toolchain command");

            let reason = match self.runner.run(invocation) {
                Ok(outcome) if outcome.is_success() => {
                    debug!(command = %command, "Toolchain command succeeded");
                    progress.commands_completed.push(command);
                    continue;
                }
                Ok(outcome) => exit_reason(&outcome),
                Err(e) => format!("could not start `{}`: {}", invocation.program, e),
            };

            debug!(command = %command, reason = %reason, "Toolchain command failed");
            progress.command_failed = Some(command.clone());
            return Err(step_error(invocation.step, command, reason));
        }

        Ok(())
    }
}

fn step_error(step: BootstrapStep, command: String, reason: String) -> ApplicationError {
    match step {
        BootstrapStep::InitManifest => ApplicationError::CommandInitFailed { command, reason },
        BootstrapStep::ResolveDependencies => {
            ApplicationError::CommandResolveFailed { command, reason }
        }
    }
}

fn exit_reason(outcome: &CommandOutcome) -> String {
    let status = match outcome.code {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    };

    let lines: Vec<&str> = outcome
        .stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return status;
    }
    let tail = &lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..];
    format!("{status}: {}", tail.join(" | "))
}
