use serde::{Serialize, Serializer};

/// Placeholder written instead of a line number when a node carries no position.
pub const UNKNOWN_LINE: &str = "unknown";

/// Why an occurrence was flagged.
///
/// `Display` yields the exact reason strings written to reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reason {
    /// `t(\`key\`)`: the key is knowable but the template syntax is unusual.
    TemplateWithoutExpressions,
    /// `t(\`key.${suffix}\`)`
    TemplateWithExpressions,
    /// `t(key)`, `t(42)`, `t(...args)` and every other non-literal argument.
    UnsupportedArgument,
    /// `<Trans i18nKey="k"><b>rich</b></Trans>`
    ComplexTransChildren,
    /// `<Trans>{value}</Trans>` or `<Trans />`
    MissingKeyOrComplexChildren,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::TemplateWithoutExpressions => write!(f, "TemplateLiteral with no expressions"),
            Reason::TemplateWithExpressions => write!(f, "TemplateLiteral with expressions"),
            Reason::UnsupportedArgument => write!(f, "Unsupported argument type"),
            Reason::ComplexTransChildren => write!(f, "Complex children in <Trans>"),
            Reason::MissingKeyOrComplexChildren => write!(f, "Missing i18nKey or complex children"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One warning or error produced while extracting keys from a source unit.
///
/// `key` is the extracted text for warnings and a raw source snippet for errors
/// on constructs that have no static key. Snippets are for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub key: String,
    pub reason: Reason,
    pub file_path: String,
    /// 1-based line, `None` when the node has no position.
    #[serde(serialize_with = "serialize_line")]
    pub line: Option<usize>,
}

impl DiagnosticRecord {
    pub fn new(
        key: impl Into<String>,
        reason: Reason,
        file_path: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self {
            key: key.into(),
            reason,
            file_path: file_path.into(),
            line,
        }
    }
}

fn serialize_line<S: Serializer>(line: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    match line {
        Some(line) => serializer.serialize_u64(*line as u64),
        None => serializer.serialize_str(UNKNOWN_LINE),
    }
}
