//! Directory listing and tree walking
//!
//! This module provides two ways of looking at a directory:
//!
//! - Flat listings (`list_all`, `list_files`, `list_folders`) of a single directory
//! - `TreeWalker` / `list_tree`: a recursive snapshot as a nested `DirectoryTree`
//!
//! Both classify entries the same way. Symlinks count as folders whatever
//! they point at, and nothing guards against symlink cycles unless a
//! `WalkerConfig` sets a depth limit or turns off symlink following.

mod config;
mod entry;
mod json_types;
mod listing;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{DirectoryEntry, EntryKind, is_pseudo_entry};
pub use json_types::DirectoryTree;
pub use listing::{list_all, list_entries, list_files, list_folders, try_list_entries};
pub use walker::{TreeWalker, list_tree};
