//! Multi-file extraction: runs the engine over many files and merges the results.
//!
//! Files are read and extracted in parallel. Merging happens afterwards in sorted
//! path order, so diagnostics come out in the same order on every run.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
};

use rayon::prelude::*;

use crate::core::data::{DiagnosticRecord, ExtractionResult};
use crate::core::engine::{log_parse_failure, try_extract};
use crate::core::parsers::jsx::ParseError;
use crate::issues::{Issue, ParseErrorIssue};

/// Merged results of an extraction run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// Union of every unit's accepted keys.
    pub keys: BTreeSet<String>,
    pub warnings: Vec<DiagnosticRecord>,
    pub errors: Vec<DiagnosticRecord>,
    /// Files that could not be read or parsed; they contribute nothing else.
    pub parse_errors: Vec<ParseErrorIssue>,
    /// Number of files processed, including failed ones.
    pub files_checked: usize,
}

impl Aggregate {
    /// Fold one unit's result in.
    pub fn merge(&mut self, result: ExtractionResult) {
        self.files_checked += 1;
        self.keys.extend(result.success);
        self.warnings.extend(result.warnings);
        self.errors.extend(result.errors);
    }

    fn merge_failure(&mut self, failure: ParseErrorIssue) {
        self.files_checked += 1;
        self.parse_errors.push(failure);
    }

    /// Accepted keys that are not in `existing`, sorted.
    pub fn new_keys(&self, existing: &HashSet<String>) -> Vec<String> {
        self.keys
            .iter()
            .filter(|key| !existing.contains(*key))
            .cloned()
            .collect()
    }

    /// Every diagnostic as an `Issue`, parse failures first.
    pub fn issues(&self) -> Vec<Issue> {
        self.parse_errors
            .iter()
            .cloned()
            .map(Issue::ParseError)
            .chain(self.warnings.iter().cloned().map(Issue::warning))
            .chain(self.errors.iter().cloned().map(Issue::error))
            .collect()
    }
}

/// Read and extract every file in `files`.
pub fn extract_files<'a>(files: impl IntoIterator<Item = &'a String>) -> Aggregate {
    let mut paths: Vec<&String> = files.into_iter().collect();
    paths.sort();

    let results: Vec<Result<ExtractionResult, ParseErrorIssue>> =
        paths.par_iter().map(|path| extract_file(path)).collect();

    let mut aggregate = Aggregate::default();
    for result in results {
        match result {
            Ok(result) => aggregate.merge(result),
            Err(failure) => aggregate.merge_failure(failure),
        }
    }
    aggregate
}

fn extract_file(path: &str) -> Result<ExtractionResult, ParseErrorIssue> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(file = path, "cannot read source file: {}", e);
            return Err(ParseErrorIssue {
                file_path: path.to_string(),
                line: None,
                error: format!("Failed to read file: {}", e),
            });
        }
    };

    try_extract(&source, path).map_err(|err: ParseError| {
        log_parse_failure(&err);
        err.into()
    })
}
