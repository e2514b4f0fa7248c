//! Dependency-first deployment of a resolved stack.

use crate::error::{DepswarmError, Result};
use crate::stack::StackDescriptor;
use crate::ui::UserInterface;

use super::command::{CommandExecutor, DeployCommand, DEFAULT_PROGRAM};

/// Options for a deploy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Deploy only the requested stack, not its dependencies.
    pub skip_dependencies: bool,
    /// Print commands without running them.
    pub dry_run: bool,
}

/// Walks a resolved stack and deploys it, dependencies first.
pub struct Orchestrator<'a> {
    program: String,
    executor: &'a mut dyn CommandExecutor,
    ui: &'a mut dyn UserInterface,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator that runs `docker`.
    pub fn new(executor: &'a mut dyn CommandExecutor, ui: &'a mut dyn UserInterface) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            executor,
            ui,
        }
    }

    /// Use a different program in place of `docker`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Deploy `target` of `stack`.
    ///
    /// Dependencies listed under the same target are deployed first, in
    /// declared order, each for the same target name. A stack reachable
    /// along two edges is deployed twice. A dependency's non-zero exit code
    /// is logged and does not stop the walk; the returned code is the one
    /// from deploying `stack` itself.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTarget` if `stack`, or any dependency reached, has no
    /// such target, and `CommandFailed` if the program cannot be started.
    pub fn deploy(
        &mut self,
        stack: &StackDescriptor,
        target: &str,
        options: &DeployOptions,
    ) -> Result<i32> {
        let command = DeployCommand::for_target(&self.program, stack, target).ok_or_else(|| {
            DepswarmError::UnknownTarget {
                path: stack.path().to_path_buf(),
                target: target.to_string(),
            }
        })?;

        if !options.skip_dependencies {
            for dependency in stack.dependencies_of(target) {
                let code = self.deploy(dependency, target, options)?;
                if code != 0 {
                    tracing::warn!(
                        "Dependency '{}' of '{}' exited with code {}; continuing",
                        dependency.name(),
                        stack.name(),
                        code
                    );
                    self.ui.warning(&format!(
                        "Deploy of '{}' exited with code {}",
                        dependency.name(),
                        code
                    ));
                }
            }
        }

        self.ui.show_command(&command.to_string());

        if options.dry_run {
            return Ok(0);
        }

        tracing::debug!("Deploying '{}' target '{}'", stack.name(), target);
        self.executor.execute(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::collections::{BTreeMap, VecDeque};
    use std::path::PathBuf;

    /// Records commands and replies with scripted exit codes (0 when empty).
    #[derive(Default)]
    struct RecordingExecutor {
        executed: Vec<String>,
        codes: VecDeque<i32>,
    }

    impl RecordingExecutor {
        fn with_codes(codes: &[i32]) -> Self {
            Self {
                executed: Vec::new(),
                codes: codes.iter().copied().collect(),
            }
        }
    }

    impl CommandExecutor for RecordingExecutor {
        fn execute(&mut self, command: &DeployCommand) -> Result<i32> {
            self.executed.push(command.stack().to_string());
            Ok(self.codes.pop_front().unwrap_or(0))
        }
    }

    fn stack(name: &str, target: &str, deps: Vec<StackDescriptor>) -> StackDescriptor {
        let mut targets = BTreeMap::new();
        targets.insert(
            target.to_string(),
            vec![
                PathBuf::from(format!("/s/{}/stack.d/base.yml", name)),
                PathBuf::from(format!("/s/{}/stack.d/{}.yml", name, target)),
            ],
        );
        let mut dependencies = BTreeMap::new();
        if !deps.is_empty() {
            dependencies.insert(target.to_string(), deps);
        }
        StackDescriptor::new(
            PathBuf::from(format!("/s/{}", name)),
            name,
            targets,
            dependencies,
        )
    }

    fn dry_run() -> DeployOptions {
        DeployOptions {
            dry_run: true,
            ..Default::default()
        }
    }

    #[test]
    fn deploys_dependencies_before_dependent() {
        let root = stack(
            "web",
            "prod",
            vec![stack("d1", "prod", vec![]), stack("d2", "prod", vec![])],
        );
        let mut executor = RecordingExecutor::default();
        let mut ui = MockUI::new();

        let code = Orchestrator::new(&mut executor, &mut ui)
            .deploy(&root, "prod", &dry_run())
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            ui.commands(),
            [
                "docker stack deploy -c /s/d1/stack.d/base.yml -c /s/d1/stack.d/prod.yml d1",
                "docker stack deploy -c /s/d2/stack.d/base.yml -c /s/d2/stack.d/prod.yml d2",
                "docker stack deploy -c /s/web/stack.d/base.yml -c /s/web/stack.d/prod.yml web",
            ]
        );
        assert!(executor.executed.is_empty());
    }

    #[test]
    fn unknown_target_emits_nothing() {
        let root = stack("web", "prod", vec![stack("db", "prod", vec![])]);
        let mut executor = RecordingExecutor::default();
        let mut ui = MockUI::new();

        let result = Orchestrator::new(&mut executor, &mut ui).deploy(&root, "dev", &dry_run());

        assert!(matches!(
            result,
            Err(DepswarmError::UnknownTarget { ref target, .. }) if target == "dev"
        ));
        assert!(ui.commands().is_empty());
    }

    #[test]
    fn dependency_without_target_fails() {
        let root = stack("web", "prod", vec![stack("db", "dev", vec![])]);
        let mut executor = RecordingExecutor::default();
        let mut ui = MockUI::new();

        let result = Orchestrator::new(&mut executor, &mut ui).deploy(&root, "prod", &dry_run());

        assert!(matches!(result, Err(DepswarmError::UnknownTarget { .. })));
        assert!(ui.commands().is_empty());
    }

    #[test]
    fn skip_dependencies_emits_only_root() {
        let root = stack("web", "prod", vec![stack("db", "prod", vec![])]);
        let mut executor = RecordingExecutor::default();
        let mut ui = MockUI::new();
        let options = DeployOptions {
            skip_dependencies: true,
            dry_run: true,
        };

        Orchestrator::new(&mut executor, &mut ui)
            .deploy(&root, "prod", &options)
            .unwrap();

        assert_eq!(ui.commands().len(), 1);
        assert!(ui.commands()[0].ends_with(" web"));
    }

    #[test]
    fn diamond_deploys_shared_dependency_twice() {
        let b = stack("b", "t", vec![stack("d", "t", vec![])]);
        let c = stack("c", "t", vec![stack("d", "t", vec![])]);
        let a = stack("a", "t", vec![b, c]);
        let mut executor = RecordingExecutor::default();
        let mut ui = MockUI::new();

        Orchestrator::new(&mut executor, &mut ui)
            .deploy(&a, "t", &DeployOptions::default())
            .unwrap();

        assert_eq!(executor.executed, ["d", "b", "d", "c", "a"]);
        assert_eq!(ui.commands().len(), 5);
    }

    #[test]
    fn failing_dependency_does_not_halt() {
        let root = stack(
            "web",
            "prod",
            vec![stack("d1", "prod", vec![]), stack("d2", "prod", vec![])],
        );
        let mut executor = RecordingExecutor::with_codes(&[3, 0, 0]);
        let mut ui = MockUI::new();

        let code = Orchestrator::new(&mut executor, &mut ui)
            .deploy(&root, "prod", &DeployOptions::default())
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(executor.executed, ["d1", "d2", "web"]);
        assert_eq!(ui.warnings(), ["Deploy of 'd1' exited with code 3"]);
    }

    #[test]
    fn root_exit_code_is_returned() {
        let root = stack("web", "prod", vec![stack("db", "prod", vec![])]);
        let mut executor = RecordingExecutor::with_codes(&[0, 42]);
        let mut ui = MockUI::new();

        let code = Orchestrator::new(&mut executor, &mut ui)
            .deploy(&root, "prod", &DeployOptions::default())
            .unwrap();

        assert_eq!(code, 42);
    }

    #[test]
    fn custom_program_is_used() {
        let root = stack("web", "prod", vec![]);
        let mut executor = RecordingExecutor::default();
        let mut ui = MockUI::new();

        Orchestrator::new(&mut executor, &mut ui)
            .with_program("/usr/local/bin/docker")
            .deploy(&root, "prod", &dry_run())
            .unwrap();

        assert!(ui.commands()[0].starts_with("/usr/local/bin/docker stack deploy "));
    }
}
