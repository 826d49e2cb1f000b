//! Runs toolchain commands as child processes.

use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use lessgo_core::{
    application::ports::{CommandOutcome, CommandRunner},
    domain::CommandInvocation,
};

/// Production runner backed by `std::process::Command`.
///
/// Output is captured rather than inherited so it cannot interleave with
/// progress output; stderr is handed back for failure reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %invocation, dir = %invocation.working_dir.display()))]
    fn run(&self, invocation: &CommandInvocation) -> io::Result<CommandOutcome> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .output()?;

        debug!(
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Process exited"
        );

        Ok(CommandOutcome {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::path::Path;

    use lessgo_core::domain::BootstrapStep;

    use super::*;

    fn invocation(program: &str, args: &[&str], dir: &Path) -> CommandInvocation {
        CommandInvocation {
            step: BootstrapStep::InitManifest,
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn runs_in_the_working_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = SystemCommandRunner::new()
            .run(&invocation("sh", &["-c", "touch marker"], tmp.path()))
            .unwrap();

        assert!(outcome.is_success());
        assert!(tmp.path().join("marker").exists());
    }

    #[test]
    fn non_zero_exit_is_an_outcome_with_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = SystemCommandRunner::new()
            .run(&invocation("sh", &["-c", "echo broken >&2; exit 3"], tmp.path()))
            .unwrap();

        assert_eq!(outcome.code, Some(3));
        assert_eq!(outcome.stderr.trim(), "broken");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner::new()
            .run(&invocation("lessgo-no-such-program", &[], tmp.path()))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
