//! Recursive size aggregation and the `du`-style report built on it

use std::fs;
use std::path::{Path, PathBuf};

use log::*;
use serde::Serialize;

use crate::entry::{compare_names, read_entries};
use crate::error::{Error, Result};

/// Total size in bytes of everything below `path`.
///
/// Directories are recursed into, symlinks count for nothing and are never
/// followed, and every other entry contributes its own length. Children are
/// summed in enumeration order. Any entry that cannot be read aborts the whole
/// computation.
///
/// Recursion depth equals the depth of the tree, so a pathologically deep
/// hierarchy can exhaust the stack.
pub fn compute_size(path: &Path) -> Result<u64> {
    let mut total: u64 = 0;
    for mut entry in read_entries(path)? {
        if entry.is_symlink() {
            trace!("not following symlink {}", entry.path().display());
            continue;
        }
        total = total.saturating_add(entry.size()?);
    }
    Ok(total)
}

/// How report entries are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Case-insensitive by name.
    #[default]
    Name,
    /// Largest first.
    Size,
}

#[derive(Debug, Clone, Default)]
pub struct SizeReportOptions {
    pub sort: SortMode,
}

/// Size of one directory in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// Sizes of the immediate subdirectories of a root plus the root's total.
///
/// The total also includes files that sit directly in the root.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub root: PathBuf,
    pub total: u64,
    pub entries: Vec<SizeEntry>,
}

impl SizeReport {
    /// A root that is not a directory reports its own length and no entries.
    ///
    /// The root operand itself is followed when it is a symlink; links found
    /// below it are still skipped.
    pub fn build(root: &Path, options: &SizeReportOptions) -> Result<Self> {
        let meta = fs::metadata(root).map_err(|e| Error::access(root, e))?;
        if !meta.is_dir() {
            return Ok(Self {
                root: root.to_path_buf(),
                total: meta.len(),
                entries: Vec::new(),
            });
        }

        let mut entries = Vec::new();
        let mut total: u64 = 0;

        for mut entry in read_entries(root)? {
            if entry.is_symlink() {
                continue;
            }
            let size = entry.size()?;
            total = total.saturating_add(size);
            if entry.is_dir() {
                entries.push(SizeEntry {
                    path: entry.path().to_path_buf(),
                    size,
                });
            }
        }

        sort_size_entries(&mut entries, options.sort);
        info!(
            "{}: {} bytes in {} directories",
            root.display(),
            total,
            entries.len()
        );

        Ok(Self {
            root: root.to_path_buf(),
            total,
            entries,
        })
    }

    /// The line for the root itself, always printed after the entries.
    pub fn total_entry(&self) -> SizeEntry {
        SizeEntry {
            path: self.root.clone(),
            size: self.total,
        }
    }
}

fn sort_size_entries(entries: &mut [SizeEntry], mode: SortMode) {
    match mode {
        SortMode::Name => entries.sort_by(|a, b| {
            let a = a.path.file_name().unwrap_or_default().to_string_lossy();
            let b = b.path.file_name().unwrap_or_default().to_string_lossy();
            compare_names(&a, &b)
        }),
        SortMode::Size => entries.sort_by(|a, b| b.size.cmp(&a.size)),
    }
}
