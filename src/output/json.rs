//! JSON Lines output
//!
//! One compact object per line keeps output streaming: a `root` record, an
//! `entry` record per visited entry, then a `summary` record.

use std::borrow::Cow;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::identity::IdentityResolver;
use crate::permissions::EntryKind;
use crate::tree::{StreamingOutput, TreeEntry, WalkSummary};

use super::config::OutputConfig;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonRecord<'a> {
    Root {
        path: Cow<'a, str>,
    },
    Entry {
        /// Lossily decoded so non-UTF-8 names don't abort the walk.
        path: Cow<'a, str>,
        name: &'a str,
        depth: usize,
        kind: EntryKind,
        permissions: String,
        /// Permission bits only, e.g. 420 for 0o644.
        mode: u32,
        uid: u32,
        gid: u32,
        owner: String,
        group: String,
        size: u64,
    },
    Summary {
        directories: usize,
        files: usize,
    },
}

pub struct JsonFormatter<W: Write> {
    out: W,
    identities: Box<dyn IdentityResolver>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self::with_resolver(out, config.identity_resolver())
    }

    pub fn with_resolver(out: W, identities: Box<dyn IdentityResolver>) -> Self {
        Self { out, identities }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &JsonRecord<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> StreamingOutput for JsonFormatter<W> {
    fn output_root(&mut self, root: &TreeEntry) -> Result<()> {
        self.write_record(&JsonRecord::Root {
            path: root.path.to_string_lossy(),
        })
    }

    fn output_entry(&mut self, entry: &TreeEntry) -> Result<()> {
        let record = JsonRecord::Entry {
            path: entry.path.to_string_lossy(),
            name: &entry.name,
            depth: entry.depth,
            kind: entry.kind,
            permissions: entry.permissions(),
            mode: entry.mode & 0o777,
            uid: entry.uid,
            gid: entry.gid,
            owner: self.identities.user_name(entry.uid),
            group: self.identities.group_name(entry.gid),
            size: entry.size,
        };
        self.write_record(&record)
    }

    fn finish(&mut self, summary: &WalkSummary) -> Result<()> {
        self.write_record(&JsonRecord::Summary {
            directories: summary.directories,
            files: summary.files,
        })?;
        self.out.flush()?;
        Ok(())
    }
}
