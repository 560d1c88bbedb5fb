//! Shared helpers for tree walking

use std::path::Path;

use glob::Pattern;

/// Check if a path should be skipped based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
