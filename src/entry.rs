//! Directory entries as seen by a single directory scan

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use log::*;

use crate::error::{Error, Result};
use crate::size::compute_size;

/// A file, directory or symlink found while scanning a directory.
///
/// The kind is taken from the entry itself and never follows symlinks, so a
/// link to a directory reports `is_dir() == false`.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    is_symlink: bool,
    size: Option<u64>,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: &fs::DirEntry) -> Result<Self> {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::access(&path, e))?;
        Ok(Self {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: file_type.is_dir(),
            is_symlink: file_type.is_symlink(),
            size: None,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// Dotfiles are hidden.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Size in bytes, computed on first use.
    ///
    /// Directories report the recursive size of their contents and symlinks
    /// always report zero.
    pub fn size(&mut self) -> Result<u64> {
        if let Some(size) = self.size {
            return Ok(size);
        }
        let size = if self.is_symlink {
            0
        } else if self.is_dir {
            compute_size(&self.path)?
        } else {
            fs::symlink_metadata(&self.path)
                .map_err(|e| Error::access(&self.path, e))?
                .len()
        };
        self.size = Some(size);
        Ok(size)
    }

    /// Size if it has already been computed.
    pub fn cached_size(&self) -> Option<u64> {
        self.size
    }

    /// Target of a symlink entry, if it can be read.
    pub fn link_target(&self) -> Option<PathBuf> {
        if self.is_symlink {
            fs::read_link(&self.path).ok()
        } else {
            None
        }
    }
}

/// Read all direct children of `path` in enumeration order.
///
/// The directory handle is closed before this returns.
pub fn read_entries(path: &Path) -> Result<Vec<DirectoryEntry>> {
    debug!("scanning {}", path.display());
    let iter = fs::read_dir(path).map_err(|e| Error::access(path, e))?;
    let mut entries = Vec::new();
    for entry in iter {
        let entry = entry.map_err(|e| Error::access(path, e))?;
        entries.push(DirectoryEntry::from_dir_entry(&entry)?);
    }
    Ok(entries)
}

/// Case-insensitive name comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Directories first, then case-insensitive by name.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Sort entries for display. The sort is stable, so names that compare
/// equal keep their enumeration order.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(compare_entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn test_read_entries_kinds() {
        let tree = TestTree::new();
        tree.add_file("file.txt", 10);
        tree.add_dir("dir");
        tree.add_symlink("dir", "link");

        let mut entries = read_entries(tree.path()).unwrap();
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["dir", "file.txt", "link"]);
        assert!(entries[0].is_dir());
        assert!(!entries[1].is_dir());
        assert!(entries[2].is_symlink());
        // A link to a directory is not itself a directory
        assert!(!entries[2].is_dir());
        assert_eq!(entries[2].link_target(), Some(PathBuf::from("dir")));
    }

    #[test]
    fn test_sort_dirs_first_case_insensitive() {
        let tree = TestTree::new();
        tree.add_file("b.txt", 1);
        tree.add_file("A.txt", 1);
        tree.add_dir("zeta");
        tree.add_dir("Alpha");

        let mut entries = read_entries(tree.path()).unwrap();
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["Alpha", "zeta", "A.txt", "b.txt"]);
    }

    fn entry(name: &str, is_dir: bool) -> DirectoryEntry {
        DirectoryEntry {
            path: PathBuf::from(name),
            name: name.to_string(),
            is_dir,
            is_symlink: false,
            size: None,
        }
    }

    #[test]
    fn test_sort_keeps_order_of_equal_names() {
        let mut entries = vec![
            entry("Readme", false),
            entry("README", false),
            entry("docs", true),
            entry("readme", false),
            entry("Docs", true),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["docs", "Docs", "Readme", "README", "readme"]);
        assert!(entries[0].is_dir() && entries[1].is_dir());
    }

    #[test]
    fn test_lazy_size() {
        let tree = TestTree::new();
        tree.add_file("sub/a.bin", 300);
        tree.add_file("sub/deeper/b.bin", 200);
        tree.add_file("c.bin", 7);

        let mut entries = read_entries(tree.path()).unwrap();
        sort_entries(&mut entries);
        assert_eq!(entries[0].cached_size(), None);
        assert_eq!(entries[0].size().unwrap(), 500);
        assert_eq!(entries[0].cached_size(), Some(500));
        assert_eq!(entries[1].size().unwrap(), 7);
    }

    #[test]
    fn test_hidden() {
        let tree = TestTree::new();
        tree.add_file(".hidden", 1);
        let entries = read_entries(tree.path()).unwrap();
        assert!(entries[0].is_hidden());
    }

    #[test]
    fn test_missing_directory_is_access_error() {
        let tree = TestTree::new();
        let err = read_entries(&tree.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Access { .. }));
    }
}
