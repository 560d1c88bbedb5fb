//! Directory tree rendering
//!
//! The walker streams lines to an output sink as it descends, so rendering
//! uses O(depth) memory regardless of tree size:
//!
//! - `TreeWalker` - recursive traversal with a depth budget
//! - `TreeOutput` - sink trait receiving entries and marker lines
//! - `PlainFormatter` / `ColorFormatter` - plain-writer and terminal sinks

mod config;
mod output;
mod utils;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, TreeConfig};
pub use output::{ColorFormatter, EntryKind, PlainFormatter, TreeOutput};
pub use utils::{glob_match, should_ignore_path};
pub use walker::TreeWalker;
