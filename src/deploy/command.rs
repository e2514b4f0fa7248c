//! `docker stack deploy` invocations.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{DepswarmError, Result};
use crate::stack::StackDescriptor;

/// Program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "docker";

/// Subcommand words passed before the compose files.
pub const DEPLOY_VERB: [&str; 2] = ["stack", "deploy"];

/// Flag preceding each compose fragment.
pub const FRAGMENT_FLAG: &str = "-c";

/// A single deploy invocation for one stack and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCommand {
    program: String,
    fragments: Vec<PathBuf>,
    stack: String,
}

impl DeployCommand {
    /// Build a command for `stack` composed from `fragments`, in order.
    pub fn new(
        program: impl Into<String>,
        fragments: &[PathBuf],
        stack: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            fragments: fragments.to_vec(),
            stack: stack.into(),
        }
    }

    /// Build the command for a descriptor's target.
    ///
    /// Returns `None` if the descriptor has no such target.
    pub fn for_target(program: &str, stack: &StackDescriptor, target: &str) -> Option<Self> {
        let fragments = stack.fragments(target)?;
        Some(Self::new(program, fragments, stack.name()))
    }

    /// The program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Name of the stack being deployed.
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Compose fragments, in order.
    pub fn fragments(&self) -> &[PathBuf] {
        &self.fragments
    }

    /// Arguments after the program: verb, `-c <fragment>` pairs, stack name.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = DEPLOY_VERB.iter().map(|s| s.to_string()).collect();
        for fragment in &self.fragments {
            args.push(FRAGMENT_FLAG.to_string());
            args.push(fragment.display().to_string());
        }
        args.push(self.stack.clone());
        args
    }
}

impl fmt::Display for DeployCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args().join(" "))
    }
}

/// Runs deploy commands.
///
/// The orchestrator only sees the exit code, so a test double can stand in
/// for Docker.
pub trait CommandExecutor {
    /// Run the command to completion and return its exit code.
    fn execute(&mut self, command: &DeployCommand) -> Result<i32>;
}

/// Executes commands as child processes, inheriting stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Create an executor.
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute(&mut self, command: &DeployCommand) -> Result<i32> {
        let start = Instant::now();

        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| DepswarmError::CommandFailed {
            command: command.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            "'{}' finished in {:?} with {}",
            command.stack(),
            start.elapsed(),
            status
        );

        match status.code() {
            Some(code) => Ok(code),
            None => {
                tracing::warn!("Deploy of '{}' was terminated by a signal", command.stack());
                Ok(1)
            }
        }
    }
}
