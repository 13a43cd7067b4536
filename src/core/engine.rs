//! Entry point of the extraction engine: source text in, `ExtractionResult` out.
//!
//! The engine touches no filesystem, network, or environment. Each call builds
//! its own `SourceMap`, so calls are independent and can run in parallel.

use std::sync::Arc;

use swc_common::SourceMap;

use crate::core::data::ExtractionResult;
use crate::core::extract::FileAnalyzer;
use crate::core::parsers::jsx::{ParseError, parse_jsx_source};

/// Extract keys from one source unit.
///
/// `label` only stamps diagnostics. A unit that fails to parse is logged and
/// yields an empty result so that one bad file never stops a larger run.
pub fn extract(source: &str, label: &str) -> ExtractionResult {
    match try_extract(source, label) {
        Ok(result) => result,
        Err(err) => {
            log_parse_failure(&err);
            ExtractionResult::default()
        }
    }
}

/// Like [`extract`], but hands the parse failure back instead of logging it.
pub fn try_extract(source: &str, label: &str) -> Result<ExtractionResult, ParseError> {
    let parsed = parse_jsx_source(source.to_owned(), label, Arc::new(SourceMap::default()))?;
    let result = FileAnalyzer::new(label, &parsed.source_map).analyze(&parsed.module);

    tracing::debug!(
        file = label,
        keys = result.success.len(),
        warnings = result.warnings.len(),
        errors = result.errors.len(),
        "extracted"
    );
    Ok(result)
}

pub fn log_parse_failure(err: &ParseError) {
    tracing::warn!(
        file = %err.file_path,
        line = ?err.line,
        "skipping unparsable source: {}",
        err.message
    );
}
