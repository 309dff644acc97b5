//! Per-entry data handed from the walker to output formatters

use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use crate::permissions::{EntryKind, format_permissions};

use super::utils::display_name;

/// One visited filesystem entry with the stat fields stree prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub name: String,
    /// Distance from the root; the root itself is 0.
    pub depth: usize,
    pub kind: EntryKind,
    /// Raw `st_mode`; only the permission bits are rendered.
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
}

impl TreeEntry {
    /// Build an entry from a path and the metadata the walker produced for it.
    pub fn from_metadata(path: &Path, depth: usize, metadata: &Metadata) -> Self {
        Self {
            path: path.to_path_buf(),
            name: display_name(path, depth),
            depth,
            kind: EntryKind::from_file_type(&metadata.file_type()),
            mode: metadata.mode(),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.size(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// `ls -l` style mode string, e.g. `-rw-r--r--`.
    pub fn permissions(&self) -> String {
        format_permissions(self.kind, self.mode)
    }
}

/// Totals reported after the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories below the root.
    pub directories: usize,
    /// Every non-directory entry: regular files, links, devices, fifos, sockets.
    pub files: usize,
}

impl WalkSummary {
    pub fn record(&mut self, entry: &TreeEntry) {
        if entry.is_root() {
            return;
        }
        if entry.is_dir() {
            self.directories += 1;
        } else {
            self.files += 1;
        }
    }
}
