//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::deploy::{DeployOptions, DEFAULT_PROGRAM};

/// Easily deploy Docker Swarm stacks from multiple interdependent YAML files.
#[derive(Debug, Parser)]
#[command(name = "depswarm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Don't deploy dependencies
    #[arg(short, long)]
    pub no_deps: bool,

    /// Dry run; only print commands which would be executed
    #[arg(short, long)]
    pub dry_run: bool,

    /// Program to invoke for `stack deploy`
    #[arg(long, env = "DEPSWARM_DOCKER", default_value = DEFAULT_PROGRAM, value_name = "PROGRAM")]
    pub docker: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// The stack to deploy
    pub stack: PathBuf,

    /// The target to deploy
    pub target: String,
}

impl Cli {
    /// Deploy options selected by the flags.
    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions {
            skip_dependencies: self.no_deps,
            dry_run: self.dry_run,
        }
    }
}
