//! Lexical path helpers used for project-name derivation.
//!
//! Nothing here touches the filesystem. The working directory is always an
//! explicit argument, so `resolve_path` is a pure function of its inputs.

use std::path::{Component, Path, PathBuf};

/// Resolve `target` against `cwd` lexically.
///
/// Absolute targets replace `cwd`. `.` segments are dropped and `..`
/// segments pop the previous one (never above the root).
pub fn resolve_path(cwd: &Path, target: &str) -> PathBuf {
    let joined = cwd.join(target);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Final named segment of a path, or an empty string for a bare root.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Last segment of a user-typed path string, separator-agnostic.
///
/// Trailing separators are ignored: `"apps/web/"` yields `"web"`. A string
/// of separators only has no segment and yields `""`.
pub fn last_segment(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return "";
    }
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_against_cwd() {
        let cwd = Path::new("/work/space");
        assert_eq!(
            resolve_path(cwd, "my-app"),
            PathBuf::from("/work/space/my-app")
        );
        assert_eq!(
            resolve_path(cwd, "./a/../b"),
            PathBuf::from("/work/space/b")
        );
        assert_eq!(resolve_path(cwd, "."), PathBuf::from("/work/space"));
    }

    #[test]
    fn absolute_target_replaces_cwd() {
        assert_eq!(
            resolve_path(Path::new("/work"), "/tmp/app"),
            PathBuf::from("/tmp/app")
        );
    }

    #[test]
    fn parent_never_climbs_above_root() {
        assert_eq!(resolve_path(Path::new("/"), "../../x"), PathBuf::from("/x"));
    }

    #[test]
    fn base_name_of_root_is_empty() {
        assert_eq!(base_name(Path::new("/")), "");
        assert_eq!(base_name(Path::new("/a/b")), "b");
    }

    #[test]
    fn last_segment_handles_separators() {
        assert_eq!(last_segment("apps/web/"), "web");
        assert_eq!(last_segment("single"), "single");
        assert_eq!(last_segment("."), ".");
        assert_eq!(last_segment(r"dir\child"), "child");
    }

    #[test]
    fn separators_only_have_no_segment() {
        assert_eq!(last_segment("/"), "");
        assert_eq!(last_segment(r"\\"), "");
        assert_eq!(last_segment("//"), "");
    }
}
