//! Source file discovery for an extraction run.
//!
//! `includes` and `ignores` entries are either glob patterns (they contain `*`
//! or `?`) or literal paths relative to the base directory.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of files the parser is run on.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: HashSet<String>,
    /// Paths that could not be read while walking.
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
) -> ScanResult {
    let mut result = ScanResult::default();
    let ignores = IgnoreSet::new(base_dir, ignore_patterns, ignore_test_files);

    for dir in include_roots(base_dir, includes) {
        for entry in WalkDir::new(&dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    tracing::warn!("cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if ignores.is_ignored(path) {
                continue;
            }
            if entry.file_type().is_file() && is_scannable_file(path) {
                result.files.insert(path.to_string_lossy().into());
            }
        }
    }

    tracing::debug!(files = result.files.len(), "scanned source files");
    result
}

/// Directories to walk: the base directory when `includes` is empty.
fn include_roots(base_dir: &str, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![Path::new(base_dir).to_path_buf()];
    }

    let mut paths = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            let full_pattern = Path::new(base_dir).join(inc);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => paths.extend(entries.flatten().filter(|p| p.is_dir())),
                Err(e) => tracing::warn!(pattern = %inc, "invalid include pattern: {}", e),
            }
        } else {
            let path = Path::new(base_dir).join(inc);
            if path.exists() {
                paths.push(path);
            } else {
                tracing::warn!(path = %path.display(), "include path does not exist");
            }
        }
    }
    paths
}

/// Compiled ignore rules.
struct IgnoreSet {
    /// Literal paths, matched by prefix.
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &str, ignore_patterns: &[String], ignore_test_files: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => tracing::warn!(pattern = %p, "invalid ignore pattern: {}", e),
                }
            } else {
                literal_paths.push(Path::new(base_dir).join(p));
            }
        }

        if ignore_test_files {
            for p in TEST_FILE_PATTERNS {
                patterns.extend(Pattern::new(p).ok());
            }
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
