//! Error types for depswarm operations.
//!
//! This module defines [`DepswarmError`], the error type shared by stack
//! resolution and deployment, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant aborts the resolution or deploy call that raised it
//! - A non-zero exit code from `docker stack deploy` is not an error; it is
//!   returned as data by the orchestrator
//! - Messages are single lines so the CLI can prefix them with `[ERROR]`

use std::path::PathBuf;
use thiserror::Error;

use crate::stack::DependencyChain;

/// Core error type for depswarm operations.
#[derive(Debug, Error)]
pub enum DepswarmError {
    /// A stack name reappeared in its own ancestor chain.
    ///
    /// `chain` already ends with the repeated name.
    #[error("Circular dependency on stack {stack}. Dependency chain: {chain}")]
    CircularDependency {
        stack: String,
        chain: DependencyChain,
    },

    /// The stack path is not absolute, not a directory, or has no name.
    #[error("Invalid stack {path}: {reason}")]
    InvalidStack { path: PathBuf, reason: String },

    /// The stack directory has no `deploy.yml`.
    #[error("No stack config at {path}")]
    StackNotFound { path: PathBuf },

    /// `deploy.yml` is not valid YAML.
    #[error("Failed to parse config at {path}: {message}")]
    MalformedConfig { path: PathBuf, message: String },

    /// `deploy.yml` parsed but does not have the expected shape.
    #[error("Invalid config file {path}: {message}")]
    SchemaViolation { path: PathBuf, message: String },

    /// A fragment reference has more than one `/`.
    #[error("Invalid fragment reference '{reference}' in stack {stack}")]
    InvalidFragmentReference { stack: String, reference: String },

    /// A fragment reference points at something that is not a regular file.
    #[error("No such fragment: {path}")]
    FragmentNotFound { path: PathBuf },

    /// `deploy.yml` defines the internally reserved key.
    #[error("Target {key} not allowed in {path}")]
    ReservedKeyUsed { path: PathBuf, key: String },

    /// The requested target is not in the stack's `deploy` mapping.
    #[error("No target '{target}' for stack: {path}")]
    UnknownTarget { path: PathBuf, target: String },

    /// The deploy command could not be started.
    #[error("Failed to run command '{command}': {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DepswarmError {
    /// Whether this error means the configuration content is invalid.
    ///
    /// Unresolvable fragment references count as schema violations, since
    /// fragments are checked as part of validating a stack's `deploy` entries.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Self::SchemaViolation { .. }
                | Self::InvalidFragmentReference { .. }
                | Self::FragmentNotFound { .. }
        )
    }
}

/// Result type alias for depswarm operations.
pub type Result<T> = std::result::Result<T, DepswarmError>;
