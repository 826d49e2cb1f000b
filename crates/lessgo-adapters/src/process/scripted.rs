//! Scripted command runner for testing.

use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use lessgo_core::{
    application::ports::{CommandOutcome, CommandRunner},
    domain::{BootstrapStep, CommandInvocation},
};

/// Records every invocation and answers from a script instead of spawning.
///
/// Steps without a scripted answer succeed. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommandRunner {
    outcomes: HashMap<BootstrapStep, CommandOutcome>,
    invocations: Arc<Mutex<Vec<CommandInvocation>>>,
}

impl ScriptedCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `step` with `outcome`.
    pub fn with_outcome(mut self, step: BootstrapStep, outcome: CommandOutcome) -> Self {
        self.outcomes.insert(step, outcome);
        self
    }

    /// Invocations received so far, in order.
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for ScriptedCommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> io::Result<CommandOutcome> {
        self.invocations
            .lock()
            .map_err(|_| io::Error::other("scripted runner lock poisoned"))?
            .push(invocation.clone());

        Ok(self
            .outcomes
            .get(&invocation.step)
            .cloned()
            .unwrap_or_else(CommandOutcome::success))
    }
}
