//! Dependency chain used for cycle detection.

use std::fmt;

/// Ordered names of the stacks visited from the root to the stack being
/// resolved.
///
/// A chain is never mutated in place. [`DependencyChain::extended`] returns
/// a new chain, so sibling branches of the graph each carry their own
/// history and a diamond (`a -> b -> d`, `a -> c -> d`) is not mistaken for
/// a cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyChain {
    names: Vec<String>,
}

impl DependencyChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has already been visited on this chain.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// A copy of this chain with `name` appended.
    pub fn extended(&self, name: &str) -> Self {
        let mut names = Vec::with_capacity(self.names.len() + 1);
        names.extend(self.names.iter().cloned());
        names.push(name.to_string());
        Self { names }
    }

    /// Stack names in visiting order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of stacks on the chain.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for DependencyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" -> "))
    }
}
