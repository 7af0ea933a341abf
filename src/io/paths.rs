//! User-supplied path resolution.

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the home directory.
///
/// Paths without a leading `~` component, or with no known home directory,
/// are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Resolve a path the way it is shown in reports.
///
/// The path is tilde-expanded and made absolute. Symlinks are resolved as
/// far as the path exists; the missing remainder is appended with `.` and
/// `..` applied lexically.
pub fn resolve(path: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if let Ok(canonical) = expanded.canonicalize() {
        return canonical;
    }

    let absolute = std::path::absolute(&expanded).unwrap_or(expanded);
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            // The prefix is canonical or lies under a missing directory,
            // so dropping the last component is exact either way
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(canonical) = resolved.canonicalize() {
                    resolved = canonical;
                }
            }
        }
    }
    resolved
}
