//! Issue types for extraction results.
//!
//! Every warning and error an extraction run produces is wrapped in an `Issue`
//! so the reporter can print them uniformly, next to files that failed to parse.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::data::{DiagnosticRecord, Reason};
use crate::core::parsers::jsx::ParseError;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    TemplateLiteral,
    UnsupportedArgument,
    TransChildren,
    MissingTransKey,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::TemplateLiteral => write!(f, "template-literal"),
            Rule::UnsupportedArgument => write!(f, "unsupported-argument"),
            Rule::TransChildren => write!(f, "trans-children"),
            Rule::MissingTransKey => write!(f, "missing-trans-key"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

impl From<Reason> for Rule {
    fn from(reason: Reason) -> Self {
        match reason {
            Reason::TemplateWithoutExpressions | Reason::TemplateWithExpressions => {
                Rule::TemplateLiteral
            }
            Reason::UnsupportedArgument => Rule::UnsupportedArgument,
            Reason::ComplexTransChildren => Rule::TransChildren,
            Reason::MissingKeyOrComplexChildren => Rule::MissingTransKey,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A key that was accepted but should be reviewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionWarningIssue {
    pub record: DiagnosticRecord,
}

/// An occurrence no key could be extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionErrorIssue {
    pub record: DiagnosticRecord,
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl From<ParseError> for ParseErrorIssue {
    fn from(err: ParseError) -> Self {
        Self {
            file_path: err.file_path,
            line: err.line,
            error: err.message,
        }
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during extraction.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ExtractionWarning(ExtractionWarningIssue),
    ExtractionError(ExtractionErrorIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn warning(record: DiagnosticRecord) -> Self {
        Issue::ExtractionWarning(ExtractionWarningIssue { record })
    }

    pub fn error(record: DiagnosticRecord) -> Self {
        Issue::ExtractionError(ExtractionErrorIssue { record })
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLocation<'a> {
    pub file_path: &'a str,
    /// `None` when the position is unknown.
    pub line: Option<usize>,
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, snippet, or parse error).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ExtractionWarningIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.record.file_path,
            line: self.record.line,
        }
    }

    fn message(&self) -> String {
        self.record.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        self.record.reason.into()
    }

    fn details(&self) -> Option<String> {
        Some(self.record.reason.to_string())
    }
}

impl Report for ExtractionErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.record.file_path,
            line: self.record.line,
        }
    }

    fn message(&self) -> String {
        self.record.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        self.record.reason.into()
    }

    fn details(&self) -> Option<String> {
        Some(self.record.reason.to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Ordering (for sorting in reports)
// ============================================================

/// Order issues by file, then line (unknown lines first).
///
/// Issues on the same line compare equal, so a stable sort keeps them in the
/// order the extractor visited them.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    let (a, b) = (a.location(), b.location());
    a.file_path
        .cmp(b.file_path)
        .then_with(|| a.line.cmp(&b.line))
}

// ============================================================
// Tests
// ============================================================
