//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links instead of listing them as `l` entries.
    /// Link loops are reported by walkdir and skipped. A root given as a
    /// link is always followed, as `tree` does.
    pub follow_links: bool,
    /// Yield a directory's contents before the directory itself (post-order).
    pub contents_first: bool,
}
