//! Directory entries and their classification

use std::ffi::OsString;
use std::fs::{DirEntry, FileType};

/// Kind of a directory entry as reported by the directory iterator.
///
/// Classification never follows symlinks: a link is always `Symlink`,
/// whatever it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Sockets, FIFOs, devices and anything else.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }

    pub fn is_file(self) -> bool {
        self == EntryKind::File
    }

    /// Directories and symlinks are both treated as folders, even a symlink
    /// that points at a regular file.
    pub fn is_folder_candidate(self) -> bool {
        matches!(self, EntryKind::Directory | EntryKind::Symlink)
    }
}

/// A single name from directory enumeration, tagged with its kind.
///
/// `name` is the display form and may be lossy; `file_name` is the name as
/// the OS reported it and is what paths must be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub file_name: OsString,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            kind,
        }
    }

    /// Build from an OS directory entry. Returns `None` for the `.` and `..`
    /// pseudo-entries or when the entry type cannot be determined.
    pub(crate) fn from_dir_entry(entry: &DirEntry) -> Option<Self> {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().to_string();
        if is_pseudo_entry(&name) {
            return None;
        }
        let kind = match entry.file_type() {
            Ok(ft) => EntryKind::from_file_type(ft),
            Err(e) => {
                tracing::trace!(name = %name, error = %e, "cannot determine entry type");
                EntryKind::Other
            }
        };
        Some(Self {
            name,
            file_name,
            kind,
        })
    }
}

/// The self and parent pseudo-entries.
pub fn is_pseudo_entry(name: &str) -> bool {
    name == "." || name == ".."
}
