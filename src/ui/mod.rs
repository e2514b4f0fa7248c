//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! Command lines go to stdout; warnings and errors go to
//! stderr, so a dry run can be piped into a shell.
//!
//! # Example
//!
//! ```
//! use depswarm::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_command("docker stack deploy -c /s/web/stack.d/base.yml web");
//! assert_eq!(ui.commands().len(), 1);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DeployTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a command line about to be executed.
    fn show_command(&mut self, command: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
