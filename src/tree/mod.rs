//! Directory tree walking
//!
//! `StreamingWalker` drives a depth-first walkdir traversal and hands each
//! visible entry to a `StreamingOutput` as soon as it is stat'ed.

mod config;
mod entry;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use entry::{TreeEntry, WalkSummary};
pub use utils::{display_name, is_hidden_name};
pub use walker::{StreamingOutput, StreamingWalker, is_hidden_below_root};
