use crate::core::data::Reason;

/// How a single recognized occurrence resolved.
///
/// An occurrence is either accepted (possibly flagged for review) or rejected;
/// a rejected occurrence never contributes a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `t("home.title")`
    Accepted(String),
    /// `t(\`home.title\`)`: the key is accepted and a warning is raised with it.
    AcceptedWithWarning { key: String, reason: Reason },
    /// `t(\`home.${section}\`)`: `key` is whatever best identifies the occurrence,
    /// usually the raw source snippet.
    Rejected { key: String, reason: Reason },
}

impl Outcome {
    /// The key this occurrence contributes to the accepted set, if any.
    pub fn accepted_key(&self) -> Option<&str> {
        match self {
            Outcome::Accepted(key) | Outcome::AcceptedWithWarning { key, .. } => Some(key),
            Outcome::Rejected { .. } => None,
        }
    }
}
