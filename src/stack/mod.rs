//! Stack resolution.
//!
//! Turns a stack directory into a [`StackDescriptor`], recursively resolving
//! every stack it depends on and checking that no stack depends on itself
//! along any chain.
//!
//! - [`chain`] - Dependency chain for cycle detection
//! - [`descriptor`] - The resolved stack type
//! - [`fragment`] - Fragment reference parsing and lookup
//! - [`path`] - Lexical path normalisation and stack naming
//! - [`resolver`] - The recursive resolver
//!
//! # Example
//!
//! ```
//! use depswarm::stack::resolve_root;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let web = temp.path().join("web");
//! fs::create_dir_all(web.join("stack.d")).unwrap();
//! fs::write(web.join("deploy.yml"), "deploy:\n  prod: [base.yml]\n").unwrap();
//! fs::write(web.join("stack.d").join("base.yml"), "services: {}\n").unwrap();
//!
//! let stack = resolve_root(&web).unwrap();
//! assert_eq!(stack.name(), "web");
//! assert_eq!(stack.fragments("prod").unwrap().len(), 1);
//! ```

pub mod chain;
pub mod descriptor;
pub mod fragment;
pub mod path;
pub mod resolver;

pub use chain::DependencyChain;
pub use descriptor::StackDescriptor;
pub use fragment::FragmentRef;
pub use path::{absolutize, normalize, stack_name};
pub use resolver::{resolve, resolve_root};
