use std::fmt::Write;

use nus_compiler::{sanitize_line, split_lines, SanitizationResult, Summary};
use nus_core::{Outcome, RawEntry};

pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "Total valid URLs: {}", summary.total);
    let _ = writeln!(out, "Wildcard entries: {}", summary.wildcards);
    let _ = writeln!(out, "\nTop TLDs:");
    for tld in &summary.top_tlds {
        let _ = writeln!(out, "  .{}: {}", tld.tld, tld.count);
    }
    out
}

pub fn format_line_stats(result: &SanitizationResult) -> String {
    format!(
        "  Skipped:    {}\n  Rejected:   {}\n  Duplicates: {}\n  Repaired:   {}\n",
        result.skipped,
        result.rejected.len(),
        result.duplicates,
        result.repaired
    )
}

pub fn format_outcome(input: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Skipped { kind, .. } => format!("skip     {input:?} ({kind:?})"),
        Outcome::Accepted { entry, .. } => format!("accept   {}", entry.canonical),
        Outcome::Rejected(rejection) => format!("reject   {} ({})", rejection.text, rejection.reason),
    }
}

/// One formatted outcome per command-line entry. An argument holding line
/// breaks is checked line by line.
pub fn check_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| split_lines(entry))
        .enumerate()
        .map(|(idx, entry)| {
            let outcome = sanitize_line(&RawEntry::new(idx + 1, entry));
            format_outcome(entry, &outcome)
        })
        .collect()
}
