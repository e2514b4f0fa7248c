//! The deploy run: resolve the stack, then deploy the target.

use std::path::{Path, PathBuf};

use crate::deploy::{CommandExecutor, DeployOptions, Orchestrator, DEFAULT_PROGRAM};
use crate::error::Result;
use crate::stack::{absolutize, resolve_root};
use crate::ui::UserInterface;

use super::args::Cli;

/// Result of a run.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code of the final deploy (0 for a dry run).
    pub exit_code: i32,
}

impl CommandResult {
    /// Result for the exit code of the final deploy.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self { exit_code }
    }

    /// Exit code clamped to what a process can report.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// A single `depswarm <stack> <target>` invocation.
pub struct RunCommand {
    stack: PathBuf,
    target: String,
    program: String,
    options: DeployOptions,
}

impl RunCommand {
    /// Create a run for `stack`, made absolute against `cwd`.
    pub fn new(stack: &Path, target: &str, cwd: &Path) -> Self {
        Self {
            stack: absolutize(stack, cwd),
            target: target.to_string(),
            program: DEFAULT_PROGRAM.to_string(),
            options: DeployOptions::default(),
        }
    }

    /// Create a run from parsed CLI arguments.
    pub fn from_cli(cli: &Cli, cwd: &Path) -> Self {
        Self::new(&cli.stack, &cli.target, cwd)
            .with_program(&cli.docker)
            .with_options(cli.deploy_options())
    }

    /// Use a different program in place of `docker`.
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Set the deploy options.
    pub fn with_options(mut self, options: DeployOptions) -> Self {
        self.options = options;
        self
    }

    /// Absolute path of the root stack.
    pub fn stack(&self) -> &Path {
        &self.stack
    }

    /// Resolve the whole stack graph, then deploy the target.
    ///
    /// Resolution and deploy-contract errors are returned as errors; the
    /// exit code of the final deploy is returned as the result.
    pub fn execute(
        &self,
        executor: &mut dyn CommandExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Resolving root stack {}", self.stack.display());
        let root = resolve_root(&self.stack)?;
        tracing::debug!(
            "Resolved '{}' ({} descriptors)",
            root.name(),
            root.descriptor_count()
        );

        let code = Orchestrator::new(executor, ui)
            .with_program(self.program.clone())
            .deploy(&root, &self.target, &self.options)?;

        Ok(CommandResult::from_exit_code(code))
    }
}
