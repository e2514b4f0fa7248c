//! Resolved stack descriptors.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A fully resolved stack.
///
/// Built once by [`crate::stack::resolve`] and never modified afterwards.
/// Every fragment path has been checked to be a regular file, and every
/// dependency is itself a resolved descriptor. The same stack directory
/// reached through two dependency edges yields two independent descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescriptor {
    path: PathBuf,
    name: String,
    targets: BTreeMap<String, Vec<PathBuf>>,
    dependencies: BTreeMap<String, Vec<StackDescriptor>>,
}

impl StackDescriptor {
    /// Assemble a descriptor from already resolved parts.
    pub fn new(
        path: PathBuf,
        name: impl Into<String>,
        targets: BTreeMap<String, Vec<PathBuf>>,
        dependencies: BTreeMap<String, Vec<StackDescriptor>>,
    ) -> Self {
        Self {
            path,
            name: name.into(),
            targets,
            dependencies,
        }
    }

    /// Absolute path of the stack directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stack name, passed to `docker stack deploy`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All targets with their fragment paths.
    pub fn targets(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.targets
    }

    /// All targets with their dependency descriptors.
    pub fn dependencies(&self) -> &BTreeMap<String, Vec<StackDescriptor>> {
        &self.dependencies
    }

    /// Whether the stack defines `target` under `deploy`.
    pub fn has_target(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    /// Fragment paths for a target, in compose order.
    pub fn fragments(&self, target: &str) -> Option<&[PathBuf]> {
        self.targets.get(target).map(Vec::as_slice)
    }

    /// Stacks a target depends on, in declared order.
    pub fn dependencies_of(&self, target: &str) -> &[StackDescriptor] {
        self.dependencies
            .get(target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of descriptors in this tree, this one included.
    pub fn descriptor_count(&self) -> usize {
        1 + self
            .dependencies
            .values()
            .flatten()
            .map(StackDescriptor::descriptor_count)
            .sum::<usize>()
    }
}
