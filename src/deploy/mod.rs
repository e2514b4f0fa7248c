//! Stack deployment.
//!
//! - [`command`] - Building and running `docker stack deploy`
//! - [`orchestrator`] - Dependency-first traversal of a resolved stack

pub mod command;
pub mod orchestrator;

pub use command::{
    CommandExecutor, DeployCommand, ProcessExecutor, DEFAULT_PROGRAM, DEPLOY_VERB, FRAGMENT_FLAG,
};
pub use orchestrator::{DeployOptions, Orchestrator};
