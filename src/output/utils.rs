//! Line rendering shared by the formatters

use crate::tree::TreeEntry;

const BRANCH: &str = "│   ";
const CONNECTOR: &str = "├── ";

/// Indentation drawn before an entry at `depth`: one vertical bar per
/// ancestor level below the root, then the connector. The root gets none.
pub fn tree_prefix(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    let mut prefix = BRANCH.repeat(depth - 1);
    prefix.push_str(CONNECTOR);
    prefix
}

/// The bracketed `ls -l` block, e.g. `[-rw-r--r-- alice\t staff\t\t42]`.
pub fn format_metadata(entry: &TreeEntry, owner: &str, group: &str) -> String {
    format!(
        "[{} {}\t {}\t\t{}]",
        entry.permissions(),
        owner,
        group,
        entry.size
    )
}

/// A complete listing line for a non-root entry, without the newline.
pub fn format_entry_line(entry: &TreeEntry, owner: &str, group: &str) -> String {
    format!(
        "{}{}  {}",
        tree_prefix(entry.depth),
        format_metadata(entry, owner, group),
        entry.name
    )
}

/// The closing totals line.
pub fn format_summary(directories: usize, files: usize) -> String {
    format!("{} directories, {} files", directories, files)
}
