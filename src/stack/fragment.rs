//! Fragment references.
//!
//! A fragment reference in `deploy.yml` is either a bare file name, looked
//! up in the stack's own `stack.d/`, or `sibling/name`, looked up in the
//! `stack.d/` of a sibling stack directory:
//!
//! | Reference            | Stack `/s/web`             |
//! |----------------------|----------------------------|
//! | `base.yml`           | `/s/web/stack.d/base.yml`  |
//! | `shared/logging.yml` | `/s/shared/stack.d/logging.yml` |

use std::path::{Path, PathBuf};

use crate::config::FRAGMENT_DIR;
use crate::error::{DepswarmError, Result};

/// A parsed fragment reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentRef {
    /// `name`: a fragment of the current stack.
    Local { name: String },
    /// `stack/name`: a fragment of a sibling stack.
    Sibling { stack: String, name: String },
}

impl FragmentRef {
    /// Parse a reference as written in `deploy.yml`.
    ///
    /// Only the number of `/`-separated parts matters. `stack` is only used
    /// for error reporting. The filesystem is not consulted, so `a/b/c.yml`
    /// is rejected whether or not it exists. Empty parts are kept: `/a.yml`
    /// names a fragment in the `stack.d/` next to the stack directory, and
    /// `other/` or `""` never name a file.
    pub fn parse(reference: &str, stack: &str) -> Result<Self> {
        let invalid = || DepswarmError::InvalidFragmentReference {
            stack: stack.to_string(),
            reference: reference.to_string(),
        };

        let parts: Vec<&str> = reference.split('/').collect();
        match parts.as_slice() {
            [name] => Ok(Self::Local {
                name: name.to_string(),
            }),
            [sibling, name] => Ok(Self::Sibling {
                stack: sibling.to_string(),
                name: name.to_string(),
            }),
            _ => Err(invalid()),
        }
    }

    /// Where this fragment should live for a stack at `stack_dir`.
    pub fn locate(&self, stack_dir: &Path) -> PathBuf {
        match self {
            Self::Local { name } => stack_dir.join(FRAGMENT_DIR).join(name),
            Self::Sibling { stack, name } => stack_dir
                .parent()
                .unwrap_or(stack_dir)
                .join(stack)
                .join(FRAGMENT_DIR)
                .join(name),
        }
    }

    /// Locate the fragment and check that it is a regular file.
    pub fn resolve(&self, stack_dir: &Path) -> Result<PathBuf> {
        let path = self.locate(stack_dir);
        if !path.is_file() {
            return Err(DepswarmError::FragmentNotFound { path });
        }
        Ok(path)
    }
}
