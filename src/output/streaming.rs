//! Streaming tree formatter
//!
//! `StreamingFormatter` writes one line per entry as the walker yields it.

use std::io::Write;

use crate::error::Result;
use crate::identity::IdentityResolver;
use crate::tree::{StreamingOutput, TreeEntry, WalkSummary};

use super::config::OutputConfig;
use super::utils::{format_entry_line, format_summary};

/// Tree-style listing formatter writing to any `Write` sink.
pub struct StreamingFormatter<W: Write> {
    out: W,
    identities: Box<dyn IdentityResolver>,
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self::with_resolver(out, config.identity_resolver())
    }

    pub fn with_resolver(out: W, identities: Box<dyn IdentityResolver>) -> Self {
        Self { out, identities }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_root(&mut self, root: &TreeEntry) -> Result<()> {
        writeln!(self.out, "{}", root.name)?;
        Ok(())
    }

    fn output_entry(&mut self, entry: &TreeEntry) -> Result<()> {
        let owner = self.identities.user_name(entry.uid);
        let group = self.identities.group_name(entry.gid);
        writeln!(self.out, "{}", format_entry_line(entry, &owner, &group))?;
        Ok(())
    }

    fn finish(&mut self, summary: &WalkSummary) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format_summary(summary.directories, summary.files)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::identity::NumericIdentities;
    use crate::permissions::EntryKind;

    fn entry(name: &str, depth: usize, kind: EntryKind, mode: u32, size: u64) -> TreeEntry {
        TreeEntry {
            path: PathBuf::from(name),
            name: name.to_string(),
            depth,
            kind,
            mode,
            uid: 501,
            gid: 20,
            size,
        }
    }

    fn formatter() -> StreamingFormatter<Vec<u8>> {
        StreamingFormatter::with_resolver(Vec::new(), Box::new(NumericIdentities))
    }

    #[test]
    fn test_streaming_output_layout() {
        let mut f = formatter();
        f.output_root(&entry(".", 0, EntryKind::Directory, 0o755, 4096))
            .unwrap();
        f.output_entry(&entry("src", 1, EntryKind::Directory, 0o755, 4096))
            .unwrap();
        f.output_entry(&entry("main.rs", 2, EntryKind::File, 0o644, 120))
            .unwrap();
        f.finish(&WalkSummary {
            directories: 1,
            files: 1,
        })
        .unwrap();

        let out = String::from_utf8(f.into_inner()).unwrap();
        let expected = "\
.
├── [drwxr-xr-x 501\t 20\t\t4096]  src
│   ├── [-rw-r--r-- 501\t 20\t\t120]  main.rs

1 directories, 1 files
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_config_picks_resolver() {
        let config = OutputConfig { numeric_ids: true };
        let mut f = StreamingFormatter::new(Vec::new(), &config);
        f.output_entry(&entry("a", 1, EntryKind::File, 0o600, 0))
            .unwrap();
        let out = String::from_utf8(f.into_inner()).unwrap();
        assert_eq!(out, "├── [-rw------- 501\t 20\t\t0]  a\n");
    }

    #[test]
    fn test_empty_tree_summary() {
        let mut f = formatter();
        f.finish(&WalkSummary::default()).unwrap();
        let out = String::from_utf8(f.into_inner()).unwrap();
        assert_eq!(out, "\n0 directories, 0 files\n");
    }
}
