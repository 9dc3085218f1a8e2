//! URL entry normalization
//!
//! Turns a plain (non-wildcard) entry into its canonical list form:
//! scheme dropped, userinfo refused, hostname validated, spaces in the path
//! percent-encoded and a bare root slash trimmed. Works on string slices and
//! only allocates for the returned canonical string.

use crate::hostname::is_valid_hostname;
use crate::types::RejectReason;

// =============================================================================
// Scheme Handling
// =============================================================================

/// Schemes dropped from entries. Matching is case-sensitive.
pub const STRIPPED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Length of a recognized scheme prefix (including `://`), if any.
#[inline]
pub fn scheme_len(entry: &str) -> Option<usize> {
    STRIPPED_SCHEMES
        .iter()
        .find(|scheme| entry.starts_with(*scheme))
        .map(|scheme| scheme.len())
}

/// Components of an absolute URL after its scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Split the text following `scheme://` into authority, path, query and
/// fragment. The authority ends at the first `/`, `?` or `#`.
pub fn split_url(rest: &str) -> UrlParts<'_> {
    let authority_end = rest
        .find(|c: char| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);

    let (before_fragment, fragment) = match tail.find('#') {
        Some(pos) => (&tail[..pos], &tail[pos + 1..]),
        None => (tail, ""),
    };
    let (path, query) = match before_fragment.find('?') {
        Some(pos) => (&before_fragment[..pos], &before_fragment[pos + 1..]),
        None => (before_fragment, ""),
    };

    UrlParts {
        authority,
        path,
        query,
        fragment,
    }
}

/// Drop a leading `http://` or `https://` and reassemble the URL as
/// `authority[path][?query][#fragment]`. Empty query and fragment components
/// are omitted. Tabs and line breaks are removed first, the way URL parsers
/// treat them.
///
/// Entries without a recognized scheme are returned unchanged.
pub fn strip_scheme(entry: &str) -> String {
    let Some(len) = scheme_len(entry) else {
        return entry.to_string();
    };

    let cleaned: String = entry[len..]
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let parts = split_url(&cleaned);

    let mut out = String::with_capacity(cleaned.len());
    out.push_str(parts.authority);
    out.push_str(parts.path);
    if !parts.query.is_empty() {
        out.push('?');
        out.push_str(parts.query);
    }
    if !parts.fragment.is_empty() {
        out.push('#');
        out.push_str(parts.fragment);
    }
    out
}

// =============================================================================
// Host / Path Split
// =============================================================================

/// Split on the first `/`. The path keeps its leading slash and is empty when
/// there is no slash.
#[inline]
pub fn split_host_path(entry: &str) -> (&str, &str) {
    match entry.find('/') {
        Some(pos) => entry.split_at(pos),
        None => (entry, ""),
    }
}

/// Host part of a canonical entry (everything before the first `/`).
#[inline]
pub fn host_of(entry: &str) -> &str {
    split_host_path(entry).0
}

// =============================================================================
// Normalization
// =============================================================================

/// Canonical form produced by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub canonical: String,
    /// Spaces in the path were rewritten as `%20`
    pub repaired: bool,
}

/// Normalize a non-wildcard entry.
///
/// The caller has already trimmed the line and ruled out blanks, comments and
/// entries starting with `*`.
pub fn normalize(raw: &str) -> Result<Normalized, RejectReason> {
    let url = strip_scheme(raw);

    if url.contains('@') {
        return Err(RejectReason::UserinfoNotSupported);
    }

    let (host, path) = split_host_path(&url);
    if !is_valid_hostname(host) {
        return Err(RejectReason::InvalidHostname);
    }

    let mut repaired = false;
    let mut canonical = if url.contains(' ') {
        if !path.contains(' ') {
            return Err(RejectReason::UnencodedSpaceInHostname);
        }
        repaired = true;
        let mut fixed = String::with_capacity(url.len() + 8);
        fixed.push_str(host);
        fixed.push_str(&path.replace(' ', "%20"));
        fixed
    } else {
        url
    };

    if is_root_only(&canonical) {
        canonical.pop();
    }

    Ok(Normalized {
        canonical,
        repaired,
    })
}

/// `host/` with no other slash anywhere.
#[inline]
fn is_root_only(entry: &str) -> bool {
    entry.ends_with('/') && entry.bytes().filter(|&b| b == b'/').count() == 1
}
