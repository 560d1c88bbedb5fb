//! Recursive extension-based file search

use std::path::{Path, PathBuf};

/// Recursively collect files under `directory` whose names end with
/// `extension`, compared case-insensitively.
///
/// Returned paths are relative to `directory`. Entries are visited in
/// whatever order the OS reports them (unlike the tree renderer, no sort
/// is applied), so the result order is not guaranteed to be stable across
/// platforms. An invalid root yields an empty list; unreadable subtrees
/// simply contribute no matches.
pub fn find_by_extension(directory: &Path, extension: &str) -> Vec<PathBuf> {
    find_in_dir(directory, extension, Path::new(""))
}

fn find_in_dir(directory: &Path, extension: &str, relative: &Path) -> Vec<PathBuf> {
    if !directory.is_dir() {
        return Vec::new();
    }

    let mut found = Vec::new();

    let entries = match std::fs::read_dir(directory) {
        Ok(e) => e,
        Err(_) => return found,
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if entry_path.is_file() {
            if matches_extension(&name, extension) {
                found.push(relative.join(&name));
            }
        } else if entry_path.is_dir() {
            found.extend(find_in_dir(&entry_path, extension, &relative.join(&name)));
        }
        // Entries that are neither (vanished or special) are skipped.
    }

    found
}

/// Case-insensitive suffix match; the extension includes its leading dot.
pub fn matches_extension(name: &str, extension: &str) -> bool {
    name.to_lowercase().ends_with(&extension.to_lowercase())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::test_utils::TempTree;

    use super::*;

    #[test]
    fn test_matches_extension() {
        assert!(matches_extension("a.py", ".py"));
        assert!(matches_extension("REPORT.TXT", ".txt"));
        assert!(matches_extension("archive.TAR.GZ", ".gz"));
        assert!(!matches_extension("a.pyc", ".py"));
        assert!(!matches_extension("noext", ".txt"));
    }

    #[test]
    fn test_nonexistent_directory_yields_empty_vec() {
        let found = find_by_extension(Path::new("/no/such/directory"), ".txt");
        assert!(found.is_empty());
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let tree = TempTree::new();
        let file = tree.add_file("plain.txt", "content");
        assert!(find_by_extension(&file, ".txt").is_empty());
    }

    #[test]
    fn test_finds_matches_at_all_levels() {
        let tree = TempTree::new();
        tree.add_file("a.py", "print()");
        tree.add_file("sub/b.py", "print()");
        tree.add_file("sub/skip.txt", "text");

        let found = find_by_extension(tree.path(), ".py");
        assert_eq!(found.len(), 2, "expected two matches: {:?}", found);
        assert!(found.contains(&Path::new("a.py").to_path_buf()));
        assert!(found.contains(&Path::new("sub").join("b.py")));
    }

    #[test]
    fn test_relative_paths_nest_with_depth() {
        let tree = TempTree::new();
        tree.add_file("one/two/three/deep.rs", "fn deep() {}");

        let found = find_by_extension(tree.path(), ".rs");
        assert_eq!(
            found,
            vec![Path::new("one").join("two").join("three").join("deep.rs")]
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let tree = TempTree::new();
        tree.add_file("REPORT.TXT", "quarterly numbers");
        tree.add_file("notes.txt", "notes");

        let found = find_by_extension(tree.path(), ".txt");
        assert_eq!(found.len(), 2, "both casings should match: {:?}", found);

        let found_upper = find_by_extension(tree.path(), ".TXT");
        assert_eq!(found_upper.len(), 2);
    }

    #[test]
    fn test_no_depth_cap() {
        let tree = TempTree::new();
        let deep = (0..10).map(|i| format!("d{}", i)).collect::<Vec<_>>();
        tree.add_file(&format!("{}/leaf.txt", deep.join("/")), "leaf");

        let found = find_by_extension(tree.path(), ".txt");
        assert_eq!(found.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_is_skipped_silently() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let tree = TempTree::new();
        tree.add_file("visible.txt", "ok");
        tree.add_file("locked/hidden.txt", "secret");

        let locked = tree.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
            .expect("Failed to lock dir");

        // Permission bits are not enforced for root; nothing to verify then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let found = find_by_extension(tree.path(), ".txt");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(found, vec![Path::new("visible.txt").to_path_buf()]);
    }
}
