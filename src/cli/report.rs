//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the core so that
//! keyscan can be used as a library without anything being printed.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Widest message shown on an issue's headline, in terminal columns.
const MAX_MESSAGE_WIDTH: usize = 72;

/// Print issues in cargo-style format.
///
/// Issues are expected in display order (see `issues::compare_issues`).
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Extract(summary) => {
            report_to(&result.issues, stdout);
            print_extract_to(summary, result.source_files_checked, verbose, stdout);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        headline(&issue.message()),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let loc = issue.location();
    match loc.line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), loc.file_path, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), loc.file_path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between issues
}

/// First line of a message, cut to `MAX_MESSAGE_WIDTH` columns.
///
/// Error keys can be multi-line source snippets.
fn headline(message: &str) -> String {
    let mut lines = message.lines();
    let first = lines.next().unwrap_or("").trim_end();
    let truncated = lines.next().is_some();

    if !truncated && UnicodeWidthStr::width(first) <= MAX_MESSAGE_WIDTH {
        return first.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in first.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > MAX_MESSAGE_WIDTH - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('\u{2026}'); // …
    out
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn print_extract_to<W: Write>(
    summary: &ExtractSummary,
    source_files: usize,
    verbose: bool,
    writer: &mut W,
) {
    let files = format!(
        "{} source {}",
        source_files,
        if source_files == 1 { "file" } else { "files" }
    );
    let keys = format!(
        "{} {}",
        summary.key_count,
        if summary.key_count == 1 {
            "key"
        } else {
            "keys"
        }
    );
    let msg = match summary.existing_key_count {
        Some(_) => format!(
            "Extracted {} from {} ({} new)",
            keys, files, summary.new_key_count
        ),
        None => format!("Extracted {} from {}", keys, files),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());

    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "{} no files written (would write to {})",
            "Dry run:".yellow().bold(),
            summary.output_dir.display()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} report files to {}",
            "Wrote".green().bold(),
            summary.written.len(),
            summary.output_dir.display()
        );
        if verbose {
            for path in &summary.written {
                let _ = writeln!(writer, "  - {}", path.display());
            }
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
