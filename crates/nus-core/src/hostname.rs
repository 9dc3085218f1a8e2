//! Hostname validation
//!
//! A hostname is a dot-separated list of labels made of ASCII letters, digits
//! and hyphens. Checks run in a fixed order so each one can be tested alone.

/// Check a single label: non-empty, `[a-zA-Z0-9-]` only, no leading or
/// trailing hyphen.
#[inline]
pub fn is_valid_label(label: &str) -> bool {
    if label.is_empty() {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Check a full hostname.
///
/// Userinfo (`@`) and percent-encoding (`%`) are refused before any label is
/// looked at.
pub fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    if host.contains('@') || host.contains('%') {
        return false;
    }
    host.split('.').all(is_valid_label)
}

/// Top-level label of a domain (text after the last dot).
/// Returns None for single-label names.
#[inline]
pub fn top_level_label(domain: &str) -> Option<&str> {
    let dot = domain.rfind('.')?;
    Some(&domain[dot + 1..])
}
