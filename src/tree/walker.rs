//! StreamingWalker - prints each entry as soon as walkdir yields it

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, StreeError};

use super::config::WalkerConfig;
use super::entry::{TreeEntry, WalkSummary};
use super::utils::is_hidden_name;

/// Callback for streaming output - receives entries in walk order.
pub trait StreamingOutput {
    /// The walk root, depth 0. Not counted in the summary.
    fn output_root(&mut self, root: &TreeEntry) -> Result<()>;

    fn output_entry(&mut self, entry: &TreeEntry) -> Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> Result<()>;
}

/// Depth-first walker over a directory tree.
/// Holds no per-entry state: memory use is bounded by walkdir's open
/// directory handles, one per level.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, streaming every visible entry to `output`.
    ///
    /// Entries that cannot be read are logged and skipped. Only an
    /// inaccessible root or a failing writer ends the walk early.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary> {
        check_root(root)?;
        debug!(
            "walking {} (follow_links={}, contents_first={})",
            root.display(),
            self.config.follow_links,
            self.config.contents_first
        );

        let walkdir = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .follow_root_links(true)
            .contents_first(self.config.contents_first)
            .into_iter();

        // filter_entry prunes by skipping the current directory once the
        // predicate rejects one. In post-order a directory is yielded after
        // its contents, when the current directory is already its parent,
        // so pruning there would drop the parent's remaining entries.
        let walker: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>> =
            if self.config.contents_first {
                Box::new(walkdir)
            } else {
                let walk_root = root.to_path_buf();
                Box::new(
                    walkdir.filter_entry(move |dent| !is_hidden_below_root(dent.path(), &walk_root)),
                )
            };

        let mut summary = WalkSummary::default();

        for result in walker {
            let dent = match result {
                Ok(dent) => dent,
                Err(err) => {
                    warn!("skipping {}", describe_walk_error(&err));
                    continue;
                }
            };

            if is_hidden_below_root(dent.path(), root) {
                continue;
            }

            let metadata = match dent.metadata() {
                Ok(m) => m,
                Err(err) => {
                    warn!("skipping {}: {}", dent.path().display(), err);
                    continue;
                }
            };

            let entry = TreeEntry::from_metadata(dent.path(), dent.depth(), &metadata);
            summary.record(&entry);

            if entry.is_root() {
                output.output_root(&entry)?;
            } else {
                output.output_entry(&entry)?;
            }
        }

        debug!(
            "walk finished: {} directories, {} files",
            summary.directories, summary.files
        );
        output.finish(&summary)?;
        Ok(summary)
    }
}

/// The root is always followed if it is a link, so it must stat through
/// the link. A directory root must also be listable.
fn check_root(root: &Path) -> Result<()> {
    let inaccessible = |source| StreeError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(root).map_err(inaccessible)?;
    if metadata.is_dir() {
        fs::read_dir(root).map_err(inaccessible)?;
    }
    Ok(())
}

/// True when any component between `root` and `path` starts with a dot.
///
/// Checking every component (not just the last) keeps hidden subtrees out
/// of post-order walks, where nothing is pruned.
pub fn is_hidden_below_root(path: &Path, root: &Path) -> bool {
    match path.strip_prefix(root) {
        Ok(rel) => rel.components().any(|c| is_hidden_name(c.as_os_str())),
        Err(_) => false,
    }
}

fn describe_walk_error(err: &walkdir::Error) -> String {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string());
    if let Some(ancestor) = err.loop_ancestor() {
        return format!("{}: symlink loop back to {}", path, ancestor.display());
    }
    let reason = err
        .io_error()
        .map(io::Error::to_string)
        .unwrap_or_else(|| err.to_string());
    format!("{}: {}", path, reason)
}
