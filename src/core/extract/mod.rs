//! Key extraction from a parsed module.
//!
//! Two classifiers decide what a node means, `FileAnalyzer` drives them over the
//! tree in a single pass:
//!
//! - `translation_call`: `t("key")`, `i18next.t("key")`
//! - `trans_element`: `<Trans i18nKey="key">Text</Trans>`, `<Trans>Text</Trans>`
//! - `outcome`: per-occurrence result (accepted, accepted with warning, rejected)

pub mod file_analyzer;
pub mod outcome;
pub mod trans_element;
pub mod translation_call;

pub use file_analyzer::FileAnalyzer;
pub use outcome::Outcome;
pub use trans_element::classify_trans;
pub use translation_call::classify_call;
