//! Dirtree - directory listings, JSON directory trees and whole-file helpers

pub mod error;
pub mod file_utils;
pub mod logging;
pub mod output;
pub mod shell;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use file_utils::{
    FileMode, RemoveStrategy, file_exists, read_file, remove_directory, remove_directory_with,
    remove_file, remove_file_with, try_read_file, try_remove_directory, try_remove_file,
    try_write_file, write_file,
};
pub use output::{ListingFormatter, OutputConfig, print_json, to_json_string, to_json_value};
pub use tree::{
    DirectoryEntry, DirectoryTree, EntryKind, TreeWalker, WalkerConfig, list_all, list_entries,
    list_files, list_folders, list_tree, try_list_entries,
};
