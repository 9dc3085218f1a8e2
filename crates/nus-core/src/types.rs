//! Core type definitions for the URL sanitizer
//!
//! These types describe a single input line and what the pipeline decided
//! about it. They are plain values: nothing here outlives one sanitization run
//! except what the caller keeps.

use serde::Serialize;

// =============================================================================
// Input
// =============================================================================

/// One raw line of input together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub line_number: usize,
    pub text: String,
}

impl RawEntry {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

// =============================================================================
// Rejection Reasons
// =============================================================================

/// Why a line was refused. The display strings are the fixed reason codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("invalid hostname")]
    InvalidHostname,
    #[error("invalid wildcard format")]
    InvalidWildcard,
    #[error("userinfo not supported")]
    UserinfoNotSupported,
    #[error("unencoded space in hostname")]
    UnencodedSpaceInHostname,
}

// =============================================================================
// Normalized Entries
// =============================================================================

/// Shape of an accepted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// `*.<hostname>`, kept verbatim
    Wildcard,
    /// `hostname[path][?query][#fragment]`
    Url,
}

/// Canonical form of an accepted entry.
///
/// Two entries are the same list entry iff their canonical strings are
/// byte-equal; `kind` is derived from the text and never breaks a tie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedEntry {
    pub canonical: String,
    pub kind: EntryKind,
}

impl NormalizedEntry {
    pub fn wildcard(text: impl Into<String>) -> Self {
        Self {
            canonical: text.into(),
            kind: EntryKind::Wildcard,
        }
    }

    pub fn url(text: impl Into<String>) -> Self {
        Self {
            canonical: text.into(),
            kind: EntryKind::Url,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// Why a line produced no entry without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    Blank,
    /// Line starting with `#` or `;`
    Comment,
}

/// A refused line, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub line_number: usize,
    pub text: String,
    pub reason: RejectReason,
}

/// Result of sanitizing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped {
        line_number: usize,
        kind: SkipKind,
    },
    Accepted {
        line_number: usize,
        entry: NormalizedEntry,
        /// Spaces in the path were percent-encoded
        repaired: bool,
    },
    Rejected(Rejection),
}

impl Outcome {
    pub fn line_number(&self) -> usize {
        match self {
            Self::Skipped { line_number, .. } | Self::Accepted { line_number, .. } => *line_number,
            Self::Rejected(rejection) => rejection.line_number,
        }
    }

    /// The accepted entry, if any.
    pub fn entry(&self) -> Option<&NormalizedEntry> {
        match self {
            Self::Accepted { entry, .. } => Some(entry),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_codes() {
        assert_eq!(RejectReason::InvalidHostname.to_string(), "invalid hostname");
        assert_eq!(RejectReason::InvalidWildcard.to_string(), "invalid wildcard format");
        assert_eq!(RejectReason::UserinfoNotSupported.to_string(), "userinfo not supported");
        assert_eq!(
            RejectReason::UnencodedSpaceInHostname.to_string(),
            "unencoded space in hostname"
        );
    }

    #[test]
    fn test_outcome_line_number() {
        let skipped = Outcome::Skipped { line_number: 3, kind: SkipKind::Blank };
        let rejected = Outcome::Rejected(Rejection {
            line_number: 7,
            text: "bad..host".to_string(),
            reason: RejectReason::InvalidHostname,
        });
        assert_eq!(skipped.line_number(), 3);
        assert_eq!(rejected.line_number(), 7);
        assert!(skipped.entry().is_none());
    }

    #[test]
    fn test_outcome_entry() {
        let accepted = Outcome::Accepted {
            line_number: 1,
            entry: NormalizedEntry::url("example.com"),
            repaired: false,
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.entry().map(NormalizedEntry::as_str), Some("example.com"));
    }
}
