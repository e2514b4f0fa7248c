//! Schema for a stack's `deploy.yml`.
//!
//! This struct maps to the YAML file format only. Fragment and stack names
//! are plain strings here; turning them into paths and descriptors happens
//! in [`crate::stack::resolver`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed contents of a stack's `deploy.yml`.
///
/// ```yaml
/// deploy:
///   prod: [base.yml, prod.yml, shared/logging.yml]
/// depends:
///   prod: [db, cache]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Target name to ordered fragment references.
    pub deploy: BTreeMap<String, Vec<String>>,

    /// Target name to ordered names of sibling stacks.
    pub depends: BTreeMap<String, Vec<String>>,
}

impl StackConfig {
    /// Fragment references listed for a target.
    pub fn fragments(&self, target: &str) -> &[String] {
        self.deploy.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stack names a target depends on.
    pub fn depends_on(&self, target: &str) -> &[String] {
        self.depends.get(target).map(Vec::as_slice).unwrap_or(&[])
    }
}
