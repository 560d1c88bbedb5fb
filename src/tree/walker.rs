//! Streaming directory tree walker

use std::io;
use std::path::Path;

use super::config::TreeConfig;
use super::output::{EntryKind, PlainFormatter, TreeOutput};
use super::utils::should_ignore_path;

/// Recursive tree walker bounded by a depth budget.
///
/// Lines are streamed to a `TreeOutput` sink as they are produced, so a
/// walk holds one call-stack frame per level and nothing else. Listing
/// failures are reported inline and never abort sibling or ancestor
/// traversal.
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Render `directory` to `output`.
    ///
    /// Depth counting starts at 0 for `directory` itself, so a budget of 3
    /// permits three levels of descent beneath it before truncating.
    pub fn walk<O: TreeOutput>(&self, directory: &Path, output: &mut O) -> io::Result<()> {
        self.walk_dir(directory, "", 0, output)
    }

    /// Render to a plain string. Convenience for tests and callers that
    /// want the tree buffered rather than streamed.
    pub fn render(&self, directory: &Path) -> String {
        let mut formatter = PlainFormatter::new(Vec::new());
        // Writes to a Vec cannot fail.
        let _ = self.walk(directory, &mut formatter);
        String::from_utf8_lossy(&formatter.into_inner()).into_owned()
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        directory: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
    ) -> io::Result<()> {
        if !directory.is_dir() {
            return output.error(&format!(
                "Error: '{}' is not a valid directory.",
                directory.display()
            ));
        }

        if depth >= self.config.max_depth {
            return output.marker(prefix, "... (max depth reached)");
        }

        let entries = match std::fs::read_dir(directory) {
            Ok(e) => e,
            Err(e) => {
                // Report under the current prefix and keep going elsewhere.
                return output.marker(prefix, &format!("Error accessing directory: {}", e));
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());
        entries.retain(|e| !should_ignore_path(&e.path(), &self.config.ignore_patterns));

        if entries.is_empty() {
            return output.marker(prefix, "(empty directory)");
        }

        let total = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let is_last = i == total - 1;

            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };

            if entry_path.is_file() {
                // The file may have vanished since the listing; render
                // "(size unknown)" rather than failing.
                let size = entry_path.metadata().ok().map(|m| m.len());
                output.entry(prefix, is_last, &name, EntryKind::File { size })?;
            } else if entry_path.is_dir() {
                output.entry(prefix, is_last, &name, EntryKind::Dir)?;
                self.walk_dir(&entry_path, &child_prefix, depth + 1, output)?;
            }
        }

        Ok(())
    }
}
