//! Twig - directory trees, extension search, and human-readable file sizes

pub mod find;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use find::find_by_extension;
pub use size::{SizeError, format_size, format_size_with, parse_byte_count};
pub use tree::{ColorFormatter, EntryKind, PlainFormatter, TreeConfig, TreeOutput, TreeWalker};
