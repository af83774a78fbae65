//! Shared utility functions for tree walking

use glob::Pattern;

/// Directory names excluded regardless of the user's ignore list.
const RESERVED_DIRS: &[&str] = &["__pycache__"];

/// Check if a directory name should be skipped based on the reserved set
/// and the ignore names.
pub fn should_skip_dir(name: &str, ignore_names: &[String]) -> bool {
    if RESERVED_DIRS.contains(&name) {
        return true;
    }

    ignore_names
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Split a comma-separated ignore list into names, trimming whitespace
/// and dropping empty segments.
pub fn parse_ignore_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
