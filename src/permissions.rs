//! File type classification and `ls -l` style permission strings

use std::fs::FileType;
use std::os::unix::fs::FileTypeExt;

use serde::Serialize;

/// Kind of a filesystem entry, as reported by stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    pub fn from_file_type(ft: &FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_block_device() {
            EntryKind::BlockDevice
        } else if ft.is_char_device() {
            EntryKind::CharDevice
        } else if ft.is_fifo() {
            EntryKind::Fifo
        } else if ft.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Unknown
        }
    }

    /// The leading character of an `ls -l` mode string.
    pub fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::File => '-',
            EntryKind::Symlink => 'l',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Unknown => '?',
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// (bit, char) pairs for user, group and other, in display order.
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Render a 10-character mode string such as `drwxr-xr-x`.
///
/// Only the nine rwx bits are shown; setuid, setgid and sticky bits are not.
pub fn format_permissions(kind: EntryKind, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(kind.type_char());
    for (bit, c) in PERMISSION_BITS {
        out.push(if mode & bit != 0 { c } else { '-' });
    }
    out
}
