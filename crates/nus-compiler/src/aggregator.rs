use std::collections::HashSet;

use serde::Serialize;

use nus_core::hostname::top_level_label;
use nus_core::types::{Outcome, Rejection};
use nus_core::url::host_of;
use nus_core::wildcard::wildcard_domain;

/// Number of TLDs reported in a summary.
pub const TOP_TLD_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TldCount {
    pub tld: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub wildcards: usize,
    pub top_tlds: Vec<TldCount>,
}

/// Deduplicated, sorted entries of one run plus per-line statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizationResult {
    pub entries: Vec<String>,
    pub skipped: usize,
    pub rejected: Vec<Rejection>,
    pub duplicates: usize,
    /// Accepted lines whose path spaces were encoded
    pub repaired: usize,
    pub summary: Summary,
}

pub fn aggregate(outcomes: &[Outcome]) -> SanitizationResult {
    aggregate_with_existing(&[], outcomes)
}

/// Aggregate outcomes on top of entries accepted by an earlier run.
///
/// Existing entries come first in the dedup order, so a new line equal to one
/// of them counts as a duplicate.
pub fn aggregate_with_existing(existing: &[String], outcomes: &[Outcome]) -> SanitizationResult {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + outcomes.len());
    let mut entries: Vec<String> = Vec::with_capacity(existing.len() + outcomes.len());
    let mut result = SanitizationResult::default();

    for entry in existing {
        if seen.insert(entry.as_str()) {
            entries.push(entry.clone());
        }
    }

    for outcome in outcomes {
        match outcome {
            Outcome::Skipped { .. } => result.skipped += 1,
            Outcome::Rejected(rejection) => result.rejected.push(rejection.clone()),
            Outcome::Accepted {
                line_number,
                entry,
                repaired,
            } => {
                let canonical = entry.as_str();
                assert!(
                    !canonical.is_empty() && canonical.trim() == canonical,
                    "line {}: accepted entry {:?} is not canonical",
                    line_number,
                    canonical
                );

                if *repaired {
                    result.repaired += 1;
                }
                if seen.insert(canonical) {
                    entries.push(canonical.to_string());
                } else {
                    log::debug!("line {}: duplicate entry removed: {}", line_number, canonical);
                    result.duplicates += 1;
                }
            }
        }
    }

    entries.sort_unstable();
    result.summary = summarize(&entries);
    result.entries = entries;
    result
}

/// Wildcard count and TLD histogram over a sorted entry list.
///
/// Ties in the TLD ranking keep the order in which each TLD first appears.
pub fn summarize(entries: &[String]) -> Summary {
    let mut tld_counts: Vec<TldCount> = Vec::new();
    let mut wildcards = 0usize;

    for entry in entries {
        let domain = match wildcard_domain(entry) {
            Some(domain) => {
                wildcards += 1;
                domain
            }
            None => host_of(entry),
        };

        let Some(tld) = top_level_label(domain) else {
            continue;
        };
        match tld_counts.iter_mut().find(|c| c.tld == tld) {
            Some(existing) => existing.count += 1,
            None => tld_counts.push(TldCount {
                tld: tld.to_string(),
                count: 1,
            }),
        }
    }

    // stable: equal counts stay in first-seen order
    tld_counts.sort_by(|a, b| b.count.cmp(&a.count));
    tld_counts.truncate(TOP_TLD_LIMIT);

    Summary {
        total: entries.len(),
        wildcards,
        top_tlds: tld_counts,
    }
}
