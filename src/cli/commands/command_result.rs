use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Extract,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Distinct keys accepted across all files.
    pub key_count: usize,
    /// Accepted keys missing from the existing key list.
    pub new_key_count: usize,
    /// Size of the existing key list, when one was given.
    pub existing_key_count: Option<usize>,
    pub output_dir: PathBuf,
    /// Report files written; empty on a dry run.
    pub written: Vec<PathBuf>,
    pub is_dry_run: bool,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running keyscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during extraction, sorted by location.
    /// Empty for `init`.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files that were processed.
    pub source_files_checked: usize,
}
