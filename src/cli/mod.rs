//! Command-line interface for depswarm.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Resolving and deploying the requested stack

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{CommandResult, RunCommand};
