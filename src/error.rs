//! Error types for filesystem operations
//!
//! The public listing and file helpers report plain booleans or empty results.
//! The `try_*` variants surface these errors instead.

use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to open directory '{}'", path.display()))]
    OpenDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to open file '{}'", path.display()))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read file '{}'", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write file '{}'", path.display()))]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to remove '{}'", path.display()))]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to launch '{}'", command))]
    ShellInvocation {
        command: String,
        source: std::io::Error,
    },
}

impl Error {
    /// The underlying I/O error kind, whichever operation failed.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Error::OpenDirectory { source, .. }
            | Error::OpenFile { source, .. }
            | Error::ReadFile { source, .. }
            | Error::WriteFile { source, .. }
            | Error::Remove { source, .. }
            | Error::ShellInvocation { source, .. } => source.kind(),
        }
    }
}
