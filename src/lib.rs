//! stree - a tree command that prints ls -l metadata for every entry

pub mod error;
pub mod identity;
pub mod output;
pub mod permissions;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, StreeError};
pub use identity::{IdentityResolver, NumericIdentities, SystemIdentities};
pub use output::{JsonFormatter, OutputConfig, StreamingFormatter};
pub use permissions::{EntryKind, format_permissions};
pub use tree::{StreamingOutput, StreamingWalker, TreeEntry, WalkSummary, WalkerConfig};
