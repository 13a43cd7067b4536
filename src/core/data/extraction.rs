use std::collections::BTreeSet;

use crate::core::data::DiagnosticRecord;

/// Keys and diagnostics extracted from one source unit.
///
/// Built fresh for every unit during a single traversal and handed back by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Accepted keys, deduplicated.
    pub success: BTreeSet<String>,
    /// Keys that were accepted but need a human to look at them, in visit order.
    pub warnings: Vec<DiagnosticRecord>,
    /// Occurrences that could not be turned into a key, in visit order.
    pub errors: Vec<DiagnosticRecord>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.success.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
    }
}
