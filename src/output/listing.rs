//! Console output for flat directory listings

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::DirectoryEntry;

use super::config::OutputConfig;

/// Prints one entry per line, folders highlighted, with a count summary.
pub struct ListingFormatter {
    config: OutputConfig,
}

impl ListingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format entries to a plain string (no colors).
    pub fn format(&self, entries: &[DirectoryEntry]) -> String {
        let mut buffer = termcolor::Buffer::no_color();
        // Writing to an in-memory buffer does not fail
        let _ = self.write_entries(&mut buffer, entries);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }

    pub fn print(&self, entries: &[DirectoryEntry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_entries(&mut stdout, entries)
    }

    fn write_entries<W: WriteColor>(&self, out: &mut W, entries: &[DirectoryEntry]) -> io::Result<()> {
        let mut folder_count = 0;
        let mut file_count = 0;

        for entry in entries {
            let mut spec = ColorSpec::new();
            if entry.kind.is_folder_candidate() {
                folder_count += 1;
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            } else if entry.kind.is_file() {
                file_count += 1;
            } else {
                spec.set_fg(Some(Color::Yellow));
            }

            if spec.is_none() {
                writeln!(out, "{}", entry.name)?;
            } else {
                out.set_color(&spec)?;
                write!(out, "{}", entry.name)?;
                out.reset()?;
                writeln!(out)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{} folders, {} files", folder_count, file_count)?;
        Ok(())
    }
}
