//! Report files written at the end of an extraction run.
//!
//! - `keys.json`: sorted array of new keys
//! - `warnings.json`: array of diagnostic records
//! - `errors.json`: array of diagnostic records
//!
//! Every file is pretty-printed with 2-space indentation and a trailing newline.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::data::DiagnosticRecord;

pub const KEYS_FILE: &str = "keys.json";
pub const WARNINGS_FILE: &str = "warnings.json";
pub const ERRORS_FILE: &str = "errors.json";

/// Content of one run's report directory.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub keys: &'a [String],
    pub warnings: &'a [DiagnosticRecord],
    pub errors: &'a [DiagnosticRecord],
}

/// Write the three report files into `dir`, creating it if needed.
///
/// Returns the paths written, in `keys`, `warnings`, `errors` order.
pub fn write_report(dir: &Path, report: &Report<'_>) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let written = vec![
        write_json(&dir.join(KEYS_FILE), report.keys)?,
        write_json(&dir.join(WARNINGS_FILE), report.warnings)?,
        write_json(&dir.join(ERRORS_FILE), report.errors)?,
    ];
    tracing::debug!(dir = %dir.display(), "wrote report files");
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path.to_path_buf())
}
