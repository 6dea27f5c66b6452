use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                // Go up one level unless we're at the root
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            },
            Component::CurDir => {},
            _ => result.push(component),
        }
    }

    result
}

/// Resolve `path` against `root` unless it is already absolute, then normalize
pub fn resolve_against<P: AsRef<Path>, R: AsRef<Path>>(root: R, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(root.as_ref().join(path))
    }
}

/// Path of `path` relative to `base`, if `path` lies under `base`
pub fn make_relative<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<PathBuf> {
    let path = normalize_path(path);
    let base = normalize_path(base);

    path.strip_prefix(&base).ok().map(Path::to_path_buf)
}

/// Render a relative path with forward slashes
pub fn to_posix<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a/./b/../c"), PathBuf::from("a/c"));
        assert_eq!(normalize_path("/root/blog/../blog/x.md"), PathBuf::from("/root/blog/x.md"));
    }

    #[test]
    fn test_resolve_and_relative() {
        let resolved = resolve_against("/repo", "src/content/blog/post.md");
        assert_eq!(resolved, PathBuf::from("/repo/src/content/blog/post.md"));
        assert_eq!(
            make_relative(&resolved, "/repo/src/content/blog"),
            Some(PathBuf::from("post.md"))
        );
        assert_eq!(make_relative("/repo/other/post.md", "/repo/src/content/blog"), None);
        assert_eq!(resolve_against("/repo", "/abs/x.md"), PathBuf::from("/abs/x.md"));
    }

    #[test]
    fn test_to_posix() {
        assert_eq!(to_posix(Path::new("en").join("index.html")), "en/index.html");
    }
}
