//! Single-level wildcard domains (`*.example.com`)

use crate::hostname::is_valid_hostname;

pub const WILDCARD_PREFIX: &str = "*.";

/// Check a wildcard entry.
///
/// The entry must start with `*.`, contain no other `*`, and the rest must be
/// a valid hostname.
pub fn is_valid_wildcard(entry: &str) -> bool {
    let Some(domain) = entry.strip_prefix(WILDCARD_PREFIX) else {
        return false;
    };
    if entry.bytes().filter(|&b| b == b'*').count() != 1 {
        return false;
    }
    is_valid_hostname(domain)
}

/// Domain covered by a wildcard entry, without the `*.` marker.
#[inline]
pub fn wildcard_domain(entry: &str) -> Option<&str> {
    entry.strip_prefix(WILDCARD_PREFIX)
}
