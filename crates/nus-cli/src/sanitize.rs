use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use nus_compiler::{
    aggregate_with_existing, build_list, parse_list, sanitize_text, split_lines, summarize, SanitizationResult,
    Summary,
};

pub struct SanitizeOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub existing: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

/// `<dir>/<stem>_sanitized.txt` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_sanitized.txt"))
}

pub fn run_sanitize(opts: &SanitizeOptions) -> Result<(PathBuf, SanitizationResult)> {
    let content = fs::read_to_string(&opts.input)
        .with_context(|| format!("Failed to read '{}'", opts.input.display()))?;

    println!(
        "Processing {} lines from {}...",
        split_lines(&content).count(),
        opts.input.display()
    );

    let existing = match &opts.existing {
        Some(path) => read_list(path)?,
        None => Vec::new(),
    };
    if !existing.is_empty() {
        log::info!("seeded {} existing entries", existing.len());
    }

    let outcomes = sanitize_text(&content);
    let result = aggregate_with_existing(&existing, &outcomes);

    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&opts.input));
    write_text(&output, &build_list(&result))?;
    println!("Sanitized URLs written to {}", output.display());

    if let Some(report) = &opts.report {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize report")?;
        write_text(report, &json)?;
        println!("Report written to {}", report.display());
    }

    Ok((output, result))
}

/// Entries of a previously written list.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    parse_list(&content).with_context(|| format!("Invalid list '{}'", path.display()))
}

/// Summary of a list file that may be unsorted or contain duplicates.
pub fn list_summary(path: &Path) -> Result<Summary> {
    let mut entries = read_list(path)?;
    entries.sort_unstable();
    entries.dedup();
    Ok(summarize(&entries))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("lists/urls.txt")),
            PathBuf::from("lists/urls_sanitized.txt")
        );
        assert_eq!(
            default_output_path(Path::new("urls")),
            PathBuf::from("urls_sanitized.txt")
        );
        assert_eq!(
            default_output_path(Path::new("my.urls.txt")),
            PathBuf::from("my.urls_sanitized.txt")
        );
    }

    #[test]
    fn test_run_sanitize_writes_list_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("urls.txt");
        let existing = dir.path().join("previous.txt");
        let report = dir.path().join("out/report.json");
        fs::write(&input, "# list\nhttps://b.com/\na.com\nbad..host\nold.com\n").unwrap();
        fs::write(&existing, "# Sanitized URLs for Netskope\n# Total URLs: 1\n\nold.com\n").unwrap();

        let opts = SanitizeOptions {
            input: input.clone(),
            output: None,
            existing: Some(existing),
            report: Some(report.clone()),
        };
        let (output, result) = run_sanitize(&opts).unwrap();

        assert_eq!(output, dir.path().join("urls_sanitized.txt"));
        assert_eq!(result.entries, vec!["a.com", "b.com", "old.com"]);
        assert_eq!(result.duplicates, 1);
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("# Sanitized URLs for Netskope\n# Total URLs: 3\n\n"));

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(json["rejected"][0]["reason"], "invalid_hostname");
        assert_eq!(json["summary"]["total"], 3);
    }

    #[test]
    fn test_list_summary_sorts_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hand-edited.txt");
        fs::write(&path, "# notes\nz.net\n*.a.org\nb.com\nz.net\nb.com\nc.org\n").unwrap();

        let summary = list_summary(&path).unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.wildcards, 1);
        let tlds: Vec<(&str, usize)> = summary.top_tlds.iter().map(|t| (t.tld.as_str(), t.count)).collect();
        assert_eq!(tlds, vec![("org", 2), ("com", 1), ("net", 1)]);
    }

    #[test]
    fn test_list_summary_rejects_invalid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, "a.com\nuser@b.com\n").unwrap();

        let err = list_summary(&path).unwrap_err();
        assert!(format!("{err:#}").contains("userinfo not supported"));
    }
}
