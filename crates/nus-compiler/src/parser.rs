use nus_core::types::{NormalizedEntry, Outcome, RawEntry, RejectReason, Rejection, SkipKind};
use nus_core::url::normalize;
use nus_core::wildcard::is_valid_wildcard;

/// Split text on `\n`, `\r\n` and lone `\r`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}

/// Number the lines of a text blob (1-based) and sanitize each of them.
pub fn sanitize_text(text: &str) -> Vec<Outcome> {
    split_lines(text)
        .enumerate()
        .map(|(idx, line)| sanitize_line(&RawEntry::new(idx + 1, line)))
        .collect()
}

/// Sanitize a batch of lines. Every line yields exactly one outcome.
pub fn sanitize(lines: &[RawEntry]) -> Vec<Outcome> {
    lines.iter().map(sanitize_line).collect()
}

/// Sanitize one line.
///
/// # Panics
///
/// If `raw.text` contains a line break: an entry spanning lines would break
/// the one-entry-per-line list format.
pub fn sanitize_line(raw: &RawEntry) -> Outcome {
    let line_number = raw.line_number;
    assert!(
        !raw.text.contains(['\n', '\r']),
        "line {}: raw entry contains a line break",
        line_number
    );
    let line = raw.text.trim();

    if line.is_empty() {
        return Outcome::Skipped {
            line_number,
            kind: SkipKind::Blank,
        };
    }

    if is_comment_line(line) {
        log::debug!("line {}: comment skipped", line_number);
        return Outcome::Skipped {
            line_number,
            kind: SkipKind::Comment,
        };
    }

    if line.starts_with('*') {
        if is_valid_wildcard(line) {
            return Outcome::Accepted {
                line_number,
                entry: NormalizedEntry::wildcard(line),
                repaired: false,
            };
        }
        return reject(line_number, line, RejectReason::InvalidWildcard);
    }

    match normalize(line) {
        Ok(normalized) => {
            if normalized.repaired {
                log::info!(
                    "line {}: encoded spaces in '{}' as '{}'",
                    line_number,
                    line,
                    normalized.canonical
                );
            }
            Outcome::Accepted {
                line_number,
                entry: NormalizedEntry::url(normalized.canonical),
                repaired: normalized.repaired,
            }
        }
        Err(reason) => reject(line_number, line, reason),
    }
}

fn reject(line_number: usize, line: &str, reason: RejectReason) -> Outcome {
    log::warn!("line {}: {}: {}", line_number, reason, line);
    Outcome::Rejected(Rejection {
        line_number,
        text: line.to_string(),
        reason,
    })
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}
