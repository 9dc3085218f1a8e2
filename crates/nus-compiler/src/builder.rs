//! Sanitized list text format
//!
//! ```text
//! # Sanitized URLs for Netskope
//! # Total URLs: <count>
//!
//! entry
//! entry
//! ```
//!
//! One canonical entry per line, each terminated by `\n`.

use std::fmt::Write;

use nus_core::types::{Outcome, RawEntry, RejectReason};

use crate::aggregator::{summarize, SanitizationResult, Summary};
use crate::parser::{sanitize_line, split_lines};

pub const HEADER_TITLE: &str = "# Sanitized URLs for Netskope";
pub const HEADER_COUNT_PREFIX: &str = "# Total URLs: ";

/// Error type for reading a sanitized list back.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Missing header line '# Sanitized URLs for Netskope'")]
    MissingHeader,
    #[error("Invalid count line: {0:?}")]
    InvalidCount(String),
    #[error("Line 3: expected a blank line after the header, found {0:?}")]
    MissingBlankLine(String),
    #[error("Line {line}: {reason}: {text}")]
    Rejected {
        line: usize,
        text: String,
        reason: RejectReason,
    },
    #[error("Line {line}: entry is not canonical: {text} (expected {canonical})")]
    NotCanonical {
        line: usize,
        text: String,
        canonical: String,
    },
    #[error("Line {line}: entries out of order or duplicated: {text}")]
    NotSorted { line: usize, text: String },
    #[error("Count mismatch: header declares {declared}, list has {actual}")]
    CountMismatch { declared: usize, actual: usize },
}

/// Result of a successful [`validate_list`].
#[derive(Debug, Clone)]
pub struct ListInfo {
    pub entries: Vec<String>,
    pub summary: Summary,
}

/// Render the sanitized list file.
pub fn build_list(result: &SanitizationResult) -> String {
    let body_len: usize = result.entries.iter().map(|e| e.len() + 1).sum();
    let mut out = String::with_capacity(HEADER_TITLE.len() + 32 + body_len);

    out.push_str(HEADER_TITLE);
    out.push('\n');
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}{}", HEADER_COUNT_PREFIX, result.entries.len());
    out.push('\n');

    for entry in &result.entries {
        out.push_str(entry);
        out.push('\n');
    }

    out
}

/// Read the entries of a list. Comments and blank lines are ignored; every
/// other line must already be in canonical form.
pub fn parse_list(text: &str) -> Result<Vec<String>, ListError> {
    Ok(parse_numbered(text)?.into_iter().map(|(_, entry)| entry).collect())
}

/// Check a list written by [`build_list`]: header present and followed by a
/// blank line, count correct, entries canonical, sorted and unique.
pub fn validate_list(text: &str) -> Result<ListInfo, ListError> {
    let mut lines = split_lines(text);

    if lines.next().map(str::trim_end) != Some(HEADER_TITLE) {
        return Err(ListError::MissingHeader);
    }

    let count_line = lines.next().unwrap_or_default().trim_end();
    let declared = count_line
        .strip_prefix(HEADER_COUNT_PREFIX)
        .and_then(|n| n.trim().parse::<usize>().ok())
        .ok_or_else(|| ListError::InvalidCount(count_line.to_string()))?;

    // An empty list may end right after the count line
    if let Some(separator) = lines.next() {
        if !separator.trim().is_empty() {
            return Err(ListError::MissingBlankLine(separator.to_string()));
        }
    }

    let numbered = parse_numbered(text)?;
    for pair in numbered.windows(2) {
        let (_, prev) = &pair[0];
        let (line, entry) = &pair[1];
        if prev.as_str() >= entry.as_str() {
            return Err(ListError::NotSorted {
                line: *line,
                text: entry.clone(),
            });
        }
    }

    if declared != numbered.len() {
        return Err(ListError::CountMismatch {
            declared,
            actual: numbered.len(),
        });
    }

    let entries: Vec<String> = numbered.into_iter().map(|(_, entry)| entry).collect();
    let summary = summarize(&entries);
    Ok(ListInfo { entries, summary })
}

fn parse_numbered(text: &str) -> Result<Vec<(usize, String)>, ListError> {
    let mut entries = Vec::new();

    for (idx, line) in split_lines(text).enumerate() {
        let raw = RawEntry::new(idx + 1, line);
        match sanitize_line(&raw) {
            Outcome::Skipped { .. } => {}
            Outcome::Rejected(rejection) => {
                return Err(ListError::Rejected {
                    line: rejection.line_number,
                    text: rejection.text,
                    reason: rejection.reason,
                });
            }
            Outcome::Accepted { entry, .. } => {
                let trimmed = line.trim();
                if entry.canonical != trimmed {
                    return Err(ListError::NotCanonical {
                        line: raw.line_number,
                        text: trimmed.to_string(),
                        canonical: entry.canonical,
                    });
                }
                entries.push((raw.line_number, entry.canonical));
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::sanitize_text;

    fn sample() -> SanitizationResult {
        aggregate(&sanitize_text("b.com\n*.a.com\nhttp://c.org/x y\n"))
    }

    #[test]
    fn test_build_list_layout() {
        let text = build_list(&sample());
        assert_eq!(
            text,
            "# Sanitized URLs for Netskope\n# Total URLs: 3\n\n*.a.com\nb.com\nc.org/x%20y\n"
        );
    }

    #[test]
    fn test_build_empty_list() {
        let text = build_list(&SanitizationResult::default());
        assert_eq!(text, "# Sanitized URLs for Netskope\n# Total URLs: 0\n\n");
    }

    #[test]
    fn test_parse_list_reads_back_entries() {
        let result = sample();
        let entries = parse_list(&build_list(&result)).unwrap();
        assert_eq!(entries, result.entries);
    }

    #[test]
    fn test_parse_list_rejects_non_canonical() {
        let err = parse_list("https://example.com/\n").unwrap_err();
        assert!(matches!(err, ListError::NotCanonical { line: 1, .. }));

        let err = parse_list("ok.com\nbad..host\n").unwrap_err();
        assert!(matches!(
            err,
            ListError::Rejected { line: 2, reason: RejectReason::InvalidHostname, .. }
        ));
    }

    #[test]
    fn test_validate_list_ok() {
        let info = validate_list(&build_list(&sample())).unwrap();
        assert_eq!(info.entries.len(), 3);
        assert_eq!(info.summary.wildcards, 1);
    }

    #[test]
    fn test_validate_list_header() {
        assert!(matches!(validate_list("a.com\n"), Err(ListError::MissingHeader)));
        assert!(matches!(
            validate_list("# Sanitized URLs for Netskope\n# Total: 1\n\na.com\n"),
            Err(ListError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_validate_list_requires_blank_separator() {
        let text = "# Sanitized URLs for Netskope\n# Total URLs: 1\na.com\n";
        assert!(matches!(
            validate_list(text),
            Err(ListError::MissingBlankLine(line)) if line == "a.com"
        ));

        let text = "# Sanitized URLs for Netskope\n# Total URLs: 0\n";
        assert!(validate_list(text).unwrap().entries.is_empty());
    }

    #[test]
    fn test_validate_list_count_mismatch() {
        let text = "# Sanitized URLs for Netskope\n# Total URLs: 2\n\na.com\n";
        assert!(matches!(
            validate_list(text),
            Err(ListError::CountMismatch { declared: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_validate_list_order() {
        let text = "# Sanitized URLs for Netskope\n# Total URLs: 2\n\nb.com\na.com\n";
        assert!(matches!(validate_list(text), Err(ListError::NotSorted { line: 5, .. })));

        let text = "# Sanitized URLs for Netskope\n# Total URLs: 2\n\na.com\na.com\n";
        assert!(matches!(validate_list(text), Err(ListError::NotSorted { line: 5, .. })));
    }
}
