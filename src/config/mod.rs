//! Stack configuration loading and parsing.
//!
//! Every stack directory holds a `deploy.yml` and a `stack.d/` directory of
//! compose fragments:
//!
//! ```text
//! stacks/
//! ├── web/
//! │   ├── deploy.yml
//! │   └── stack.d/
//! │       ├── base.yml
//! │       └── prod.yml
//! └── db/
//!     ├── deploy.yml
//!     └── stack.d/
//!         └── base.yml
//! ```
//!
//! - Schema definitions in [`schema`]
//! - File loading and shape checks in [`loader`]
//!
//! # Example
//!
//! ```
//! use depswarm::config::load_stack_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("deploy.yml"), "deploy:\n  prod: [base.yml]\n").unwrap();
//!
//! let config = load_stack_config(temp.path()).unwrap();
//! assert_eq!(config.fragments("prod"), ["base.yml"]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    config_path, load_stack_config, parse_config, CONFIG_FILE_NAME, FRAGMENT_DIR, RESERVED_KEY,
};
pub use schema::StackConfig;
