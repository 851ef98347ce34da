//! Flat directory listings
//!
//! Listings keep the order the filesystem reports entries in; nothing is
//! sorted. A directory that cannot be opened lists as empty, exactly like an
//! empty directory. Callers that need to tell the two apart must check for
//! existence themselves, or use [`try_list_entries`].

use std::path::Path;

use snafu::ResultExt;

use crate::error::{OpenDirectorySnafu, Result};

use super::entry::{DirectoryEntry, EntryKind};

/// Enumerate and classify the entries of `path`, skipping `.` and `..`.
///
/// Entries that fail to read mid-iteration are skipped.
pub fn try_list_entries(path: impl AsRef<Path>) -> Result<Vec<DirectoryEntry>> {
    let path = path.as_ref();
    let entries = std::fs::read_dir(path).context(OpenDirectorySnafu { path })?;

    Ok(entries
        .filter_map(|e| e.ok())
        .filter_map(|e| DirectoryEntry::from_dir_entry(&e))
        .collect())
}

/// Like [`try_list_entries`], but an unopenable directory yields no entries.
pub fn list_entries(path: impl AsRef<Path>) -> Vec<DirectoryEntry> {
    try_list_entries(path).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "listing as empty");
        Vec::new()
    })
}

fn names_where(path: &Path, keep: impl Fn(EntryKind) -> bool) -> Vec<String> {
    list_entries(path)
        .into_iter()
        .filter(|e| keep(e.kind))
        .map(|e| e.name)
        .collect()
}

/// Every entry name under `path`, of any kind.
pub fn list_all(path: impl AsRef<Path>) -> Vec<String> {
    names_where(path.as_ref(), |_| true)
}

/// Names of regular files under `path`.
pub fn list_files(path: impl AsRef<Path>) -> Vec<String> {
    names_where(path.as_ref(), EntryKind::is_file)
}

/// Names of directories and symlinks under `path`.
///
/// Symlinks are listed whatever they point at, so a link to a regular file
/// shows up here too.
pub fn list_folders(path: impl AsRef<Path>) -> Vec<String> {
    names_where(path.as_ref(), EntryKind::is_folder_candidate)
}
