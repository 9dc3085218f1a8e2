//! Netskope URL List Compiler
//!
//! This crate turns raw URL list lines into a deduplicated, sorted,
//! canonical list and reads such lists back.

pub mod aggregator;
pub mod builder;
pub mod parser;

pub use aggregator::{aggregate, aggregate_with_existing, summarize, SanitizationResult, Summary, TldCount};
pub use builder::{build_list, parse_list, validate_list, ListError, ListInfo};
pub use parser::{sanitize, sanitize_line, sanitize_text, split_lines};
