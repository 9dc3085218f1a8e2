//! Netskope URL Sanitizer CLI
//!
//! CLI tool for sanitizing URL lists and inspecting sanitized lists.

mod logging;
mod report;
mod sanitize;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nus_compiler::validate_list;

use crate::sanitize::{list_summary, run_sanitize, SanitizeOptions};

#[derive(Parser)]
#[command(name = "nus-cli")]
#[command(about = "Sanitize URLs according to Netskope validation rules")]
struct Cli {
    /// Log accepted repairs and other details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize a text file of URLs into a Netskope URL list
    Sanitize {
        /// Input text file containing URLs
        input: PathBuf,

        /// Output file (default: <input stem>_sanitized.txt)
        output: Option<PathBuf>,

        /// Skip summary output
        #[arg(long)]
        no_summary: bool,

        /// Previously sanitized list whose entries are kept and deduplicated against
        #[arg(short, long)]
        existing: Option<PathBuf>,

        /// Write a JSON report of the run
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Sanitize entries given on the command line
    Check {
        /// Entries to check
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Validate a sanitized list file
    Validate {
        /// List file to validate
        input: PathBuf,
    },

    /// Print the summary of a sanitized list file
    Info {
        /// List file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sanitize {
            input,
            output,
            no_summary,
            existing,
            report,
        } => cmd_sanitize(
            SanitizeOptions {
                input,
                output,
                existing,
                report,
            },
            no_summary,
        ),
        Commands::Check { entries } => cmd_check(&entries),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn cmd_sanitize(opts: SanitizeOptions, no_summary: bool) -> Result<()> {
    let start = Instant::now();
    let (_, result) = run_sanitize(&opts)?;

    println!("{}", report::format_line_stats(&result).trim_end());
    println!("  Time:       {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

    if !no_summary {
        print!("{}", report::format_summary(&result.summary));
    }

    Ok(())
}

fn cmd_check(entries: &[String]) -> Result<()> {
    for line in report::check_entries(entries) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let info = validate_list(&content)
        .with_context(|| format!("Invalid list '{}'", input.display()))?;

    println!("List '{}' is valid", input.display());
    println!("  Entries:     {}", info.entries.len());
    println!("  Wildcards:   {}", info.summary.wildcards);
    println!("  Size:        {} bytes", content.len());

    Ok(())
}

fn cmd_info(input: &Path) -> Result<()> {
    let summary = list_summary(input)?;
    println!("List: {}", input.display());
    print!("{}", report::format_summary(&summary));
    Ok(())
}
