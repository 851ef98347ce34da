//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Folders at this depth are recorded but not descended into.
    /// `None` walks without limit, including around symlink cycles.
    pub max_depth: Option<usize>,
    /// Treat symlinks as folders and recurse into them.
    /// When false, symlinks are left out of the tree entirely.
    pub follow_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: true,
        }
    }
}

impl WalkerConfig {
    pub(crate) fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
