//! Configuration for tree rendering

/// Levels of descent allowed beneath the root when no limit is given.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Depth budget: a directory reached at this depth renders a
    /// truncation marker instead of its contents.
    pub max_depth: usize,
    /// Glob patterns for entry names to skip entirely.
    pub ignore_patterns: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_patterns: Vec::new(),
        }
    }
}
