//! Netskope URL Sanitizer Core Library
//!
//! This crate decides whether a single list entry is acceptable and, if so,
//! what its canonical form is. It performs no I/O and holds no state.
//!
//! # Modules
//!
//! - `hostname`: label and hostname validation
//! - `wildcard`: `*.domain` entry validation
//! - `url`: scheme stripping and canonicalization of URL entries
//! - `types`: shared type definitions

pub mod hostname;
pub mod types;
pub mod url;
pub mod wildcard;

// Re-export commonly used types
pub use hostname::{is_valid_hostname, is_valid_label};
pub use types::{EntryKind, NormalizedEntry, Outcome, RawEntry, RejectReason, Rejection, SkipKind};
pub use url::{normalize, Normalized};
pub use wildcard::is_valid_wildcard;
