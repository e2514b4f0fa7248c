//! Recursive stack resolution.
//!
//! Resolution runs in two phases per stack. [`crate::config::parse_config`]
//! checks the shape of `deploy.yml`, then this module turns fragment
//! references into checked paths and `depends` entries into resolved
//! descriptors, recursing into sibling stack directories.
//!
//! Nothing is cached between edges: a stack reachable along two paths is
//! loaded and validated twice.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{load_stack_config, StackConfig};
use crate::error::{DepswarmError, Result};

use super::chain::DependencyChain;
use super::descriptor::StackDescriptor;
use super::fragment::FragmentRef;
use super::path::{normalize, stack_name};

/// Resolve a root stack and everything it depends on.
pub fn resolve_root(path: &Path) -> Result<StackDescriptor> {
    resolve(path, &DependencyChain::new())
}

/// Resolve the stack at `path`, given the chain of stacks already being
/// resolved above it.
///
/// # Errors
///
/// - `CircularDependency` if the stack's name is already on `chain`
/// - `InvalidStack` if `path` is relative, not a directory, or has no name
/// - `StackNotFound` if the directory has no `deploy.yml`
/// - `MalformedConfig`, `ReservedKeyUsed`, `SchemaViolation` from parsing
/// - `InvalidFragmentReference`, `FragmentNotFound` from fragment lookup
/// - any of the above from a dependency, unchanged
pub fn resolve(path: &Path, chain: &DependencyChain) -> Result<StackDescriptor> {
    let path = normalize(path);
    let name = stack_name(&path).ok_or_else(|| DepswarmError::InvalidStack {
        path: path.clone(),
        reason: "path has no stack name".to_string(),
    })?;

    if chain.contains(&name) {
        return Err(DepswarmError::CircularDependency {
            chain: chain.extended(&name),
            stack: name,
        });
    }
    let chain = chain.extended(&name);

    tracing::debug!("Resolving stack '{}' at {} ({})", name, path.display(), chain);

    validate_stack_dir(&path)?;
    let config = load_stack_config(&path)?;

    let targets = resolve_targets(&config, &path, &name)?;
    let dependencies = resolve_dependencies(&config, &path, &chain)?;

    Ok(StackDescriptor::new(path, name, targets, dependencies))
}

fn validate_stack_dir(path: &Path) -> Result<()> {
    if !path.is_absolute() {
        return Err(DepswarmError::InvalidStack {
            path: path.to_path_buf(),
            reason: "path must be absolute".to_string(),
        });
    }

    if !path.is_dir() {
        return Err(DepswarmError::InvalidStack {
            path: path.to_path_buf(),
            reason: "stack directory doesn't exist".to_string(),
        });
    }

    Ok(())
}

fn resolve_targets(
    config: &StackConfig,
    stack_dir: &Path,
    stack: &str,
) -> Result<BTreeMap<String, Vec<PathBuf>>> {
    config
        .deploy
        .iter()
        .map(|(target, references)| -> Result<(String, Vec<PathBuf>)> {
            let fragments = references
                .iter()
                .map(|r| FragmentRef::parse(r, stack)?.resolve(stack_dir))
                .collect::<Result<Vec<_>>>()?;
            Ok((target.clone(), fragments))
        })
        .collect()
}

fn resolve_dependencies(
    config: &StackConfig,
    stack_dir: &Path,
    chain: &DependencyChain,
) -> Result<BTreeMap<String, Vec<StackDescriptor>>> {
    let base = stack_dir.parent().unwrap_or(stack_dir);

    config
        .depends
        .iter()
        .map(|(target, stacks)| -> Result<(String, Vec<StackDescriptor>)> {
            let resolved = stacks
                .iter()
                .map(|dependency| resolve(&base.join(dependency), chain))
                .collect::<Result<Vec<_>>>()?;
            Ok((target.clone(), resolved))
        })
        .collect()
}
