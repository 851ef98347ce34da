//! Removal by launching the host's delete commands
//!
//! Success here only means the command was started. Its exit status is
//! logged but never turned into a failure, so a missing target or a
//! permission problem still reports success.

use std::path::Path;
use std::process::Command;

use snafu::ResultExt;

use crate::error::{Result, ShellInvocationSnafu};

#[cfg(windows)]
const REMOVE_FILE: (&str, &[&str]) = ("cmd", &["/C", "del", "/q"]);
#[cfg(windows)]
const REMOVE_DIRECTORY: (&str, &[&str]) = ("cmd", &["/C", "rd", "/s", "/q"]);

#[cfg(not(windows))]
const REMOVE_FILE: (&str, &[&str]) = ("rm", &["-f"]);
#[cfg(not(windows))]
const REMOVE_DIRECTORY: (&str, &[&str]) = ("rm", &["-rf"]);

/// Run `program args... path` and wait for it.
///
/// The path is passed as its own argument, never spliced into a command line.
fn run(command: (&str, &[&str]), path: &Path) -> Result<()> {
    let (program, args) = command;
    let rendered = format!("{} {} {}", program, args.join(" "), path.display());

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .context(ShellInvocationSnafu { command: rendered.as_str() })?;

    if !status.success() {
        tracing::debug!(command = %rendered, %status, "delete command reported failure");
    }
    Ok(())
}

pub fn remove_file(path: impl AsRef<Path>) -> Result<()> {
    run(REMOVE_FILE, path.as_ref())
}

pub fn remove_directory(path: impl AsRef<Path>) -> Result<()> {
    run(REMOVE_DIRECTORY, path.as_ref())
}
