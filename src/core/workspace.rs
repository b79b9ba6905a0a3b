//! Workspace root resolution and working-directory classification.
//!
//! The workspace root is resolved once at process start and never changes
//! for the session. Classification turns an absolute working directory into
//! the short display form shown in the prompt: workspace-relative,
//! home-relative, or raw absolute.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable the shell hook exports at session start
pub const WORKSPACE_ROOT_VAR: &str = "WORKSPACE_PROMPT_ROOT";

/// Session-lifetime workspace root, held in normalized form.
///
/// Resolution order: explicit override, then [`WORKSPACE_ROOT_VAR`], then
/// `~/workspace` as the fallback constant. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    path: String,
}

impl WorkspaceRoot {
    pub fn resolve(override_path: Option<&Path>) -> Self {
        let raw = override_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(WORKSPACE_ROOT_VAR).map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("/"))
                    .join("workspace")
            });
        Self::from_path(&raw)
    }

    pub fn from_path(path: &Path) -> Self {
        Self {
            path: normalize(path),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }
}

/// Where the working directory sits relative to the recognized prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationClass {
    InsideWorkspace,
    InsideHome,
    Other,
}

/// Display form of the working directory plus its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPath {
    pub text: String,
    pub location: LocationClass,
}

/// Classify the working directory against the workspace root and home.
///
/// Longest-prefix match, workspace root first. This cannot fail: anything
/// that matches neither prefix falls back to the normalized absolute path.
pub fn classify(current_dir: &Path, root: &WorkspaceRoot, home: Option<&Path>) -> DisplayPath {
    let current = normalize(current_dir);

    if let Some(remainder) = prefix_remainder(&current, root.as_str()) {
        let text = if remainder.is_empty() {
            "/".to_string()
        } else {
            ensure_leading_slash(remainder)
        };
        return DisplayPath {
            text,
            location: LocationClass::InsideWorkspace,
        };
    }

    if let Some(home) = home {
        let home = normalize(home);
        if let Some(remainder) = prefix_remainder(&current, &home) {
            return DisplayPath {
                text: format!("~{remainder}"),
                location: LocationClass::InsideHome,
            };
        }
    }

    DisplayPath {
        text: current,
        location: LocationClass::Other,
    }
}

/// Canonical separator form: forward slashes, no trailing slash
/// (except for the filesystem root itself).
fn normalize(path: &Path) -> String {
    let mut text = path.to_string_lossy().replace('\\', "/");
    while text.len() > 1 && text.ends_with('/') {
        text.pop();
    }
    text
}

/// Component-aware prefix match: the remainder must be empty or start at
/// a separator, so `/worker` is not inside `/work`.
fn prefix_remainder<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let remainder = path.strip_prefix(prefix)?;
    if remainder.is_empty() || remainder.starts_with('/') {
        Some(remainder)
    } else {
        None
    }
}

fn ensure_leading_slash(remainder: &str) -> String {
    if remainder.starts_with('/') {
        remainder.to_string()
    } else {
        format!("/{remainder}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(path: &str) -> WorkspaceRoot {
        WorkspaceRoot::from_path(Path::new(path))
    }

    #[test]
    fn test_inside_workspace_subdirectory() {
        let display = classify(Path::new("/work/sub/dir"), &root("/work"), None);
        assert_eq!(display.text, "/sub/dir");
        assert_eq!(display.location, LocationClass::InsideWorkspace);
    }

    #[test]
    fn test_exactly_at_workspace_root() {
        let display = classify(Path::new("/work"), &root("/work"), None);
        assert_eq!(display.text, "/");
        assert_eq!(display.location, LocationClass::InsideWorkspace);
    }

    #[test]
    fn test_sibling_with_shared_name_prefix_is_outside() {
        let display = classify(Path::new("/worker/dir"), &root("/work"), None);
        assert_eq!(display.location, LocationClass::Other);
        assert_eq!(display.text, "/worker/dir");
    }

    #[test]
    fn test_home_relative() {
        let display = classify(
            Path::new("/home/alice/proj"),
            &root("/work"),
            Some(Path::new("/home/alice")),
        );
        assert_eq!(display.text, "~/proj");
        assert_eq!(display.location, LocationClass::InsideHome);
    }

    #[test]
    fn test_exactly_at_home() {
        let display = classify(
            Path::new("/home/alice"),
            &root("/work"),
            Some(Path::new("/home/alice")),
        );
        assert_eq!(display.text, "~");
        assert_eq!(display.location, LocationClass::InsideHome);
    }

    #[test]
    fn test_workspace_wins_over_home() {
        let display = classify(
            Path::new("/home/alice/work/x"),
            &root("/home/alice/work"),
            Some(Path::new("/home/alice")),
        );
        assert_eq!(display.text, "/x");
        assert_eq!(display.location, LocationClass::InsideWorkspace);
    }

    #[test]
    fn test_filesystem_root_is_other() {
        let display = classify(Path::new("/"), &root("/work"), Some(Path::new("/home/a")));
        assert_eq!(display.text, "/");
        assert_eq!(display.location, LocationClass::Other);
    }

    #[test]
    fn test_backslash_separators_are_normalized() {
        let display = classify(
            Path::new("C:\\work\\sub"),
            &root("C:\\work"),
            None,
        );
        assert_eq!(display.text, "/sub");
        assert_eq!(display.location, LocationClass::InsideWorkspace);
    }

    #[test]
    fn test_trailing_slash_on_root_is_ignored() {
        let display = classify(Path::new("/work/sub"), &root("/work/"), None);
        assert_eq!(display.text, "/sub");
    }
}
