//! The directory tree snapshot and its JSON shape
//!
//! Internally files and folders are plain vectors. When serialized they become
//! objects keyed by their index ("0", "1", ...) followed by a "size" entry:
//!
//! ```json
//! {
//!   "path": "src",
//!   "files": { "0": "lib.rs", "size": 1 },
//!   "folders": { "0": { "path": "src/tree", "files": { "size": 0 }, "folders": { "size": 0 } }, "size": 1 }
//! }
//! ```

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Snapshot of a directory's files and sub-folders from a single walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryTree {
    pub path: String,
    #[serde(serialize_with = "serialize_indexed")]
    pub files: Vec<String>,
    #[serde(serialize_with = "serialize_indexed")]
    pub folders: Vec<DirectoryTree>,
}

impl DirectoryTree {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            files: Vec::new(),
            folders: Vec::new(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Number of files in this tree and every sub-tree.
    pub fn total_files(&self) -> usize {
        self.files.len() + self.folders.iter().map(|f| f.total_files()).sum::<usize>()
    }
}

/// Serialize a sequence as `{"0": a, "1": b, ..., "size": n}`.
fn serialize_indexed<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(items.len() + 1))?;
    for (i, item) in items.iter().enumerate() {
        map.serialize_entry(&i.to_string(), item)?;
    }
    map.serialize_entry("size", &items.len())?;
    map.end()
}
