//! depswarm - Deploy Docker Swarm stacks from interdependent YAML files.
//!
//! A stack is a directory holding a `deploy.yml` and a `stack.d/` directory
//! of compose fragments. `deploy.yml` names deploy targets, each composed of
//! an ordered list of fragments, and the sibling stacks each target depends
//! on. depswarm resolves the whole dependency graph, rejecting cycles, then
//! runs `docker stack deploy` for every dependency before the requested
//! stack.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `deploy.yml` loading and parsing
//! - [`deploy`] - Command construction and dependency-first deployment
//! - [`error`] - Error types and result aliases
//! - [`stack`] - Recursive stack resolution and cycle detection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depswarm::deploy::{DeployOptions, Orchestrator, ProcessExecutor};
//! use depswarm::stack::resolve_root;
//! use depswarm::ui::MockUI;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! for (name, config) in [
//!     ("db", "deploy:\n  prod: [db.yml]\n"),
//!     ("web", "deploy:\n  prod: [web.yml]\ndepends:\n  prod: [db]\n"),
//! ] {
//!     let dir = temp.path().join(name);
//!     fs::create_dir_all(dir.join("stack.d")).unwrap();
//!     fs::write(dir.join("deploy.yml"), config).unwrap();
//!     fs::write(dir.join("stack.d").join(format!("{}.yml", name)), "").unwrap();
//! }
//!
//! let web = resolve_root(&temp.path().join("web")).unwrap();
//! let mut ui = MockUI::new();
//! let mut executor = ProcessExecutor::new();
//! let options = DeployOptions { dry_run: true, ..Default::default() };
//!
//! Orchestrator::new(&mut executor, &mut ui)
//!     .deploy(&web, "prod", &options)
//!     .unwrap();
//!
//! assert_eq!(ui.commands().len(), 2);
//! assert!(ui.commands()[0].ends_with(" db"));
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod stack;
pub mod ui;

pub use error::{DepswarmError, Result};
