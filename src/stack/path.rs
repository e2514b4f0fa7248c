//! Lexical path helpers.
//!
//! Stack names come from the last path component, so paths are normalised
//! without touching the filesystem: `/s/web/./` and `/s/db/../web` both name
//! the stack `web`.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without resolving symlinks.
///
/// `..` at the root is dropped, matching POSIX path normalisation.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Make `path` absolute against `base` and normalise it.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Stack name for a stack directory: its last normal component.
pub fn stack_name(path: &Path) -> Option<String> {
    match normalize(path).components().next_back() {
        Some(Component::Normal(name)) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_cur_and_parent_dirs() {
        assert_eq!(
            normalize(Path::new("/stacks/./db/../web/")),
            PathBuf::from("/stacks/web")
        );
    }

    #[test]
    fn normalize_drops_parent_at_root() {
        assert_eq!(normalize(Path::new("/../stacks")), PathBuf::from("/stacks"));
    }

    #[test]
    fn normalize_keeps_leading_parent_on_relative_paths() {
        assert_eq!(normalize(Path::new("../web")), PathBuf::from("../web"));
    }

    #[test]
    fn absolutize_joins_relative_paths() {
        assert_eq!(
            absolutize(Path::new("../web"), Path::new("/stacks/db")),
            PathBuf::from("/stacks/web")
        );
    }

    #[test]
    fn absolutize_keeps_absolute_paths() {
        assert_eq!(
            absolutize(Path::new("/srv/web"), Path::new("/stacks")),
            PathBuf::from("/srv/web")
        );
    }

    #[test]
    fn stack_name_uses_last_component() {
        assert_eq!(stack_name(Path::new("/stacks/web/")), Some("web".into()));
        assert_eq!(stack_name(Path::new("/stacks/web/.")), Some("web".into()));
        assert_eq!(stack_name(Path::new("/stacks/web/..")), Some("stacks".into()));
    }

    #[test]
    fn root_has_no_stack_name() {
        assert_eq!(stack_name(Path::new("/")), None);
    }
}
