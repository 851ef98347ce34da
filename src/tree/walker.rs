//! TreeWalker - builds the nested directory tree in memory

use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::entry::EntryKind;
use super::json_types::DirectoryTree;
use super::listing::list_entries;

/// Recursive walker producing a [`DirectoryTree`].
///
/// Recorded sub-folder paths are built as `parent + "/" + name` from the path
/// string the walk started with; nothing is canonicalized. Descent itself uses
/// the raw OS names, so folders whose names are not valid UTF-8 are still
/// walked even though their recorded path is lossy.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, root: impl AsRef<Path>) -> DirectoryTree {
        let root = root.as_ref();
        self.walk_dir(root.to_string_lossy().to_string(), root.to_path_buf(), 0)
    }

    fn walk_dir(&self, path: String, fs_path: PathBuf, depth: usize) -> DirectoryTree {
        let mut tree = DirectoryTree::new(path);

        // At max depth, record the folder but don't descend
        if self.config.at_max_depth(depth) {
            return tree;
        }

        for entry in list_entries(&fs_path) {
            let descend = match entry.kind {
                EntryKind::File => {
                    tree.files.push(entry.name);
                    continue;
                }
                EntryKind::Directory => true,
                EntryKind::Symlink => self.config.follow_symlinks,
                EntryKind::Other => false,
            };
            if !descend {
                tracing::trace!(path = %tree.path, name = %entry.name, "skipping entry");
                continue;
            }

            let child = format!("{}/{}", tree.path, entry.name);
            tracing::trace!(path = %child, depth = depth + 1, "descending");
            let child_fs_path = fs_path.join(&entry.file_name);
            tree.folders.push(self.walk_dir(child, child_fs_path, depth + 1));
        }

        tree
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Build the tree of `path` with no depth limit, following symlinks.
pub fn list_tree(path: impl AsRef<Path>) -> DirectoryTree {
    TreeWalker::default().walk(path)
}
