//! Loading and shape-checking a stack's `deploy.yml`.
//!
//! Parsing goes through a raw `serde_yaml::Value` first so the reserved key
//! can be rejected before any typed deserialization happens.

use crate::config::schema::StackConfig;
use crate::error::{DepswarmError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside every stack directory.
pub const CONFIG_FILE_NAME: &str = "deploy.yml";

/// Name of the fragment directory inside every stack directory.
pub const FRAGMENT_DIR: &str = "stack.d";

/// Top-level key a stack config may not define.
pub const RESERVED_KEY: &str = "_path";

const KNOWN_KEYS: [&str; 2] = ["deploy", "depends"];

/// Path of the configuration file for a stack directory.
pub fn config_path(stack_dir: &Path) -> PathBuf {
    stack_dir.join(CONFIG_FILE_NAME)
}

/// Load `deploy.yml` from a stack directory.
///
/// # Errors
///
/// Returns `StackNotFound` if the file doesn't exist.
/// Returns `MalformedConfig`, `ReservedKeyUsed` or `SchemaViolation` from
/// [`parse_config`].
pub fn load_stack_config(stack_dir: &Path) -> Result<StackConfig> {
    let path = config_path(stack_dir);
    if !path.is_file() {
        return Err(DepswarmError::StackNotFound {
            path: stack_dir.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepswarmError::StackNotFound {
                path: stack_dir.to_path_buf(),
            }
        } else {
            DepswarmError::Io(e)
        }
    })?;

    parse_config(&content, &path)
}

/// Parse YAML content into a [`StackConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<StackConfig> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| DepswarmError::MalformedConfig {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mapping = match value {
        Value::Null => return Ok(StackConfig::default()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(DepswarmError::SchemaViolation {
                path: source_path.to_path_buf(),
                message: format!("expected a mapping at top level, found {}", kind_of(&other)),
            })
        }
    };

    check_top_level_keys(&mapping, source_path)?;
    check_no_null_lists(&mapping, source_path)?;

    serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| DepswarmError::SchemaViolation {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn check_top_level_keys(mapping: &Mapping, source_path: &Path) -> Result<()> {
    if mapping.contains_key(RESERVED_KEY) {
        return Err(DepswarmError::ReservedKeyUsed {
            path: source_path.to_path_buf(),
            key: RESERVED_KEY.to_string(),
        });
    }

    for key in mapping.keys() {
        match key.as_str() {
            Some(k) if KNOWN_KEYS.contains(&k) => {}
            Some(k) => tracing::warn!("Ignoring unknown key '{}' in {}", k, source_path.display()),
            None => {
                return Err(DepswarmError::SchemaViolation {
                    path: source_path.to_path_buf(),
                    message: format!("top-level keys must be strings, found {}", kind_of(key)),
                })
            }
        }
    }

    Ok(())
}

/// An empty `deploy:` or `prod:` parses as null, which serde would quietly
/// accept as an empty mapping or list.
fn check_no_null_lists(mapping: &Mapping, source_path: &Path) -> Result<()> {
    let violation = |message: String| DepswarmError::SchemaViolation {
        path: source_path.to_path_buf(),
        message,
    };

    for key in KNOWN_KEYS {
        match mapping.get(key) {
            Some(Value::Null) => {
                return Err(violation(format!(
                    "'{}' must map target names to lists, found null",
                    key
                )))
            }
            Some(Value::Mapping(targets)) => {
                for (target, list) in targets {
                    if list.is_null() {
                        return Err(violation(format!(
                            "target '{}' under '{}' must be a list, found null",
                            target.as_str().unwrap_or("?"),
                            key
                        )));
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
