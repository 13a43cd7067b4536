//! Single-pass key extraction over a parsed module.
//!
//! `FileAnalyzer` walks the AST once, hands every call expression to the
//! translation-call classifier and every JSX element to the `<Trans>` classifier,
//! and folds their outcomes into one `ExtractionResult`.

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{CallExpr, JSXElement, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::data::{DiagnosticRecord, ExtractionResult, Reason};
use crate::core::extract::{Outcome, classify_call, classify_trans};
use crate::core::parsers::jsx::line_of;

/// Collects keys and diagnostics from one module.
///
/// # Usage
///
/// ```ignore
/// let parsed = parse_jsx_source(code, "src/app.tsx", source_map)?;
/// let result = FileAnalyzer::new("src/app.tsx", &parsed.source_map).analyze(&parsed.module);
/// ```
pub struct FileAnalyzer<'a> {
    /// Label stamped on every diagnostic (usually the file path).
    file_path: &'a str,

    /// SWC source map for line lookups and snippets.
    source_map: &'a SourceMap,

    result: ExtractionResult,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            source_map,
            result: ExtractionResult::default(),
        }
    }

    /// Main entry point: analyze a module and return results.
    pub fn analyze(mut self, module: &Module) -> ExtractionResult {
        self.visit_module(module);
        self.result
    }

    fn record(&mut self, outcome: Outcome, span: Span) {
        if let Some(key) = outcome.accepted_key() {
            self.result.success.insert(key.to_owned());
        }
        match outcome {
            Outcome::Accepted(_) => {}
            Outcome::AcceptedWithWarning { key, reason } => {
                let record = self.diagnostic(key, reason, span);
                self.result.warnings.push(record);
            }
            Outcome::Rejected { key, reason } => {
                let record = self.diagnostic(key, reason, span);
                self.result.errors.push(record);
            }
        }
    }

    fn diagnostic(&self, key: String, reason: Reason, span: Span) -> DiagnosticRecord {
        DiagnosticRecord::new(key, reason, self.file_path, line_of(self.source_map, span))
    }
}

impl<'a> Visit for FileAnalyzer<'a> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(outcome) = classify_call(node, self.source_map) {
            self.record(outcome, node.span);
        }
        // Arguments can hold further calls: t(cond ? t("a") : t("b"))
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if let Some(outcome) = classify_trans(node, self.source_map) {
            self.record(outcome, node.span);
        }
        node.visit_children_with(self);
    }
}
