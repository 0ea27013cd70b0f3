//! Single-directory listing with per-entry attributes (`ls`-style)

mod owner;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::*;
use serde::Serialize;

use crate::entry::{DirectoryEntry, compare_names, read_entries};
use crate::error::{Error, Result};

pub use owner::UserDb;

/// Options for [`list_directory`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub show_hidden: bool,
    /// Names only: no attributes, no symlink targets.
    pub simple: bool,
}

/// One row of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub path: PathBuf,
    /// True for directories and for symlinks that resolve to one.
    pub is_dir: bool,
    pub is_symlink: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_target: Option<PathBuf>,
    /// `drwxr-xr-x` style mode string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Byte length; not reported for directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Local>>,
}

/// List the direct children of `path`, directories first and then by
/// case-insensitive name.
pub fn list_directory(path: &Path, options: &ListOptions) -> Result<Vec<ListEntry>> {
    let users = if options.simple {
        UserDb::default()
    } else {
        UserDb::load()
    };

    let mut listed = Vec::new();
    for entry in read_entries(path)? {
        if !options.show_hidden && entry.is_hidden() {
            continue;
        }
        listed.push(describe(&entry, options, &users)?);
    }
    listed.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| compare_names(&a.name, &b.name))
    });
    debug!("{}: listed {} entries", path.display(), listed.len());
    Ok(listed)
}

fn describe(entry: &DirectoryEntry, options: &ListOptions, users: &UserDb) -> Result<ListEntry> {
    let path = entry.path();
    // Links to directories sort and color as directories
    let is_dir = entry.is_dir()
        || (entry.is_symlink() && fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false));

    let mut listed = ListEntry {
        name: entry.name().to_string(),
        path: path.to_path_buf(),
        is_dir,
        is_symlink: entry.is_symlink(),
        link_target: None,
        permissions: None,
        owner: None,
        size: None,
        modified: None,
    };
    if options.simple {
        return Ok(listed);
    }

    // Describe what the link points at; fall back to the link for dangling ones
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(_) if entry.is_symlink() => {
            fs::symlink_metadata(path).map_err(|e| Error::access(path, e))?
        }
        Err(e) => return Err(Error::access(path, e)),
    };

    listed.link_target = entry.link_target();
    listed.permissions = Some(permission_string(entry, &meta));
    listed.owner = Some(owner_of(&meta, users));
    if !is_dir {
        listed.size = Some(meta.len());
    }
    listed.modified = meta.modified().ok().map(DateTime::<Local>::from);
    Ok(listed)
}

/// File type character followed by the nine owner/group/other bits.
pub fn permission_string(entry: &DirectoryEntry, meta: &fs::Metadata) -> String {
    let kind = if entry.is_symlink() {
        'l'
    } else if entry.is_dir() {
        'd'
    } else {
        '-'
    };
    format!("{}{}", kind, mode_bits(meta))
}

#[cfg(unix)]
fn mode_bits(meta: &fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    rwx_string(meta.permissions().mode())
}

#[cfg(not(unix))]
fn mode_bits(meta: &fs::Metadata) -> String {
    if meta.permissions().readonly() {
        rwx_string(0o444)
    } else {
        rwx_string(0o666)
    }
}

/// Render the low nine bits of a mode as `rwxr-x---`.
pub fn rwx_string(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    FLAGS
        .iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}

#[cfg(unix)]
fn owner_of(meta: &fs::Metadata, users: &UserDb) -> String {
    use std::os::unix::fs::MetadataExt;
    users.owner_string(meta.uid(), meta.gid())
}

#[cfg(not(unix))]
fn owner_of(_meta: &fs::Metadata, _users: &UserDb) -> String {
    String::new()
}
