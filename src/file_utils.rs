//! Whole-file read/write and removal helpers
//!
//! The plain functions report success as a `bool` (or `Option` for reads) and
//! log the failure at debug level. The `try_*` variants return the error.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use snafu::ResultExt;

use crate::error::{OpenFileSnafu, ReadFileSnafu, RemoveSnafu, Result, WriteFileSnafu};
use crate::shell;
use crate::tree::list_all;

/// How file content is translated on the way in and out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Line endings follow the host convention. On Windows `\r\n` on disk is
    /// `\n` in memory; everywhere else this is identical to `Binary`.
    #[default]
    Text,
    /// Bytes are copied exactly.
    Binary,
}

impl FileMode {
    pub fn from_binary_flag(binary: bool) -> Self {
        if binary { FileMode::Binary } else { FileMode::Text }
    }
}

/// How `remove_*` functions delete things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoveStrategy {
    /// Direct filesystem calls. Failures other than "already gone" are reported.
    #[default]
    Native,
    /// Launch the host's delete command. Success only means the command
    /// could be started, not that anything was deleted.
    Shell,
}

pub fn try_read_file(path: impl AsRef<Path>, mode: FileMode) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = fs::File::open(path).context(OpenFileSnafu { path })?;

    let mut data = Vec::new();
    file.read_to_end(&mut data).context(ReadFileSnafu { path })?;

    Ok(match mode {
        FileMode::Binary => data,
        FileMode::Text => text_from_disk(data),
    })
}

/// Read a whole file. Returns `None` if it cannot be opened or read.
pub fn read_file(path: impl AsRef<Path>, mode: FileMode) -> Option<Vec<u8>> {
    try_read_file(path, mode)
        .map_err(|e| tracing::debug!(error = %e, "read failed"))
        .ok()
}

pub fn try_write_file(content: impl AsRef<[u8]>, path: impl AsRef<Path>, mode: FileMode) -> Result<()> {
    let path = path.as_ref();
    let mut file = fs::File::create(path).context(OpenFileSnafu { path })?;

    let written = match mode {
        FileMode::Binary => file.write_all(content.as_ref()),
        FileMode::Text => file.write_all(&text_to_disk(content.as_ref())),
    };
    written.and_then(|_| file.flush()).context(WriteFileSnafu { path })
}

/// Create or truncate `path` and write `content` to it.
pub fn write_file(content: impl AsRef<[u8]>, path: impl AsRef<Path>, mode: FileMode) -> bool {
    match try_write_file(content, path, mode) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "write failed");
            false
        }
    }
}

#[cfg(windows)]
fn text_from_disk(data: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut bytes = data.into_iter().peekable();
    while let Some(b) = bytes.next() {
        if b == b'\r' && bytes.peek() == Some(&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

#[cfg(not(windows))]
fn text_from_disk(data: Vec<u8>) -> Vec<u8> {
    data
}

#[cfg(windows)]
fn text_to_disk(content: &[u8]) -> std::borrow::Cow<'_, [u8]> {
    let mut out = Vec::with_capacity(content.len());
    for &b in content {
        if b == b'\n' {
            out.push(b'\r');
        }
        out.push(b);
    }
    std::borrow::Cow::Owned(out)
}

#[cfg(not(windows))]
fn text_to_disk(content: &[u8]) -> std::borrow::Cow<'_, [u8]> {
    std::borrow::Cow::Borrowed(content)
}

/// Treat "already gone" as done, like `rm -f`.
fn ignore_not_found(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

pub fn try_remove_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ignore_not_found(fs::remove_file(path)).context(RemoveSnafu { path })
}

/// Remove a directory and everything below it.
///
/// Symlinks inside the tree are unlinked, never followed. A path that is not
/// a directory is removed as a single entry.
pub fn try_remove_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let is_dir = match fs::symlink_metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e).context(RemoveSnafu { path }),
    };

    if is_dir {
        remove_tree(path).context(RemoveSnafu { path })
    } else {
        remove_link_or_file(path).context(RemoveSnafu { path })
    }
}

fn remove_tree(path: &Path) -> io::Result<()> {
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        if entry.file_type()?.is_dir() {
            remove_tree(&child)?;
        } else {
            remove_link_or_file(&child)?;
        }
    }
    tracing::trace!(path = %path.display(), "removing directory");
    ignore_not_found(fs::remove_dir(path))
}

fn remove_link_or_file(path: &Path) -> io::Result<()> {
    // Directory symlinks on Windows need remove_dir
    ignore_not_found(fs::remove_file(path).or_else(|e| {
        if cfg!(windows) {
            fs::remove_dir(path)
        } else {
            Err(e)
        }
    }))
}

pub fn remove_file_with(path: impl AsRef<Path>, strategy: RemoveStrategy) -> bool {
    let result = match strategy {
        RemoveStrategy::Native => try_remove_file(path),
        RemoveStrategy::Shell => shell::remove_file(path),
    };
    report_removal(result)
}

pub fn remove_directory_with(path: impl AsRef<Path>, strategy: RemoveStrategy) -> bool {
    let result = match strategy {
        RemoveStrategy::Native => try_remove_directory(path),
        RemoveStrategy::Shell => shell::remove_directory(path),
    };
    report_removal(result)
}

fn report_removal(result: Result<()>) -> bool {
    result
        .map_err(|e| tracing::debug!(error = %e, "removal failed"))
        .is_ok()
}

/// Remove a single file. A file that does not exist counts as removed.
pub fn remove_file(path: impl AsRef<Path>) -> bool {
    remove_file_with(path, RemoveStrategy::default())
}

/// Recursively remove a directory. A directory that does not exist counts as removed.
pub fn remove_directory(path: impl AsRef<Path>) -> bool {
    remove_directory_with(path, RemoveStrategy::default())
}

/// Check whether `path` has an entry named exactly `name`, of any kind.
///
/// Matching is byte-exact: no normalization and no case folding.
pub fn file_exists(name: &str, path: impl AsRef<Path>) -> bool {
    list_all(path).iter().any(|entry| entry == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_binary_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        let content: Vec<u8> = vec![0, 1, b' ', b' ', b'\t', 0, 0xFF, b'\n', b'\r', b'\n', 0];

        assert!(write_file(&content, &path, FileMode::Binary));
        assert_eq!(read_file(&path, FileMode::Binary), Some(content));
    }

    #[test]
    fn test_text_preserves_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("text.txt");
        let content = "  leading\n\n\ttabs  and   runs  \n";

        assert!(write_file(content, &path, FileMode::Text));
        assert_eq!(
            read_file(&path, FileMode::Text),
            Some(content.as_bytes().to_vec())
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_text_mode_is_byte_exact_off_windows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crlf.txt");
        fs::write(&path, b"a\r\nb").unwrap();

        assert_eq!(read_file(&path, FileMode::Text), Some(b"a\r\nb".to_vec()));
    }

    #[test]
    fn test_write_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, "a much longer original body").unwrap();

        assert!(write_file("short", &path, FileMode::Binary));
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty");

        assert!(write_file(b"", &path, FileMode::Binary));
        assert_eq!(read_file(&path, FileMode::Binary), Some(Vec::new()));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_file(dir.path().join("missing"), FileMode::Text), None);

        let err = try_read_file(dir.path().join("missing"), FileMode::Text).unwrap_err();
        assert!(matches!(err, crate::Error::OpenFile { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("f.txt");

        assert!(!write_file("x", &path, FileMode::Text));
    }

    #[test]
    fn test_write_to_directory_path_fails() {
        let dir = TempDir::new().unwrap();
        assert!(!write_file("x", dir.path(), FileMode::Binary));
    }

    #[test]
    fn test_mode_from_binary_flag() {
        assert_eq!(FileMode::from_binary_flag(true), FileMode::Binary);
        assert_eq!(FileMode::from_binary_flag(false), FileMode::Text);
    }

    #[test]
    fn test_remove_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doomed.txt");
        fs::write(&path, "bye").unwrap();

        assert!(remove_file(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_missing_targets_succeeds() {
        let dir = TempDir::new().unwrap();
        assert!(remove_file(dir.path().join("missing.txt")));
        assert!(remove_directory(dir.path().join("missing_dir")));
    }

    #[test]
    fn test_remove_file_on_directory_fails() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(!remove_file(&sub));
        assert!(sub.exists());
    }

    #[test]
    fn test_remove_directory_recursive() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("top.txt"), "").unwrap();
        fs::write(root.join("a/b/c/deep.txt"), "").unwrap();

        assert!(remove_directory(&root));
        assert!(!root.exists());
        assert!(dir.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_directory_does_not_follow_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let outside = dir.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("keep.txt"), "keep").unwrap();

        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        symlink(&outside, root.join("link")).unwrap();

        assert!(remove_directory(&root));
        assert!(!root.exists());
        assert!(outside.join("keep.txt").exists());
    }

    #[test]
    fn test_file_exists_any_kind() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("present.txt"), "").unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();

        assert!(file_exists("present.txt", dir.path()));
        assert!(file_exists("folder", dir.path()));
        assert!(!file_exists("missing.txt", dir.path()));
    }

    #[test]
    fn test_file_exists_is_exact() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Readme.md"), "").unwrap();

        assert!(file_exists("Readme.md", dir.path()));
        assert!(!file_exists("README.md", dir.path()));
        assert!(!file_exists("./Readme.md", dir.path()));
        assert!(!file_exists("Readme", dir.path()));
    }

    #[test]
    fn test_file_exists_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(!file_exists("anything", dir.path().join("missing")));
    }
}
