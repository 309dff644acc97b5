//! Tree formatting and display
//!
//! - `streaming` - tree listing, one line per entry
//! - `json` - JSON Lines records
//! - `utils` - line rendering shared by both
//! - `config` - output configuration

mod config;
mod json;
mod streaming;
mod utils;

pub use config::OutputConfig;
pub use json::{JsonFormatter, JsonRecord};
pub use streaming::StreamingFormatter;
pub use utils::{format_entry_line, format_metadata, format_summary, tree_prefix};
