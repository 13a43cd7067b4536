//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `data`: result and diagnostic types
//! - `parsers`: source parsing (swc) and existing key files
//! - `extract`: per-node classification and the AST visitor
//! - `engine`: single-unit entry points (`extract`, `try_extract`)
//! - `file_scanner`: source file discovery
//! - `aggregate`: parallel multi-file extraction and merging
//! - `output`: report files

pub mod aggregate;
pub mod data;
pub mod engine;
pub mod extract;
pub mod file_scanner;
pub mod output;
pub mod parsers;

pub use aggregate::{Aggregate, extract_files};
pub use data::{DiagnosticRecord, ExtractionResult, Reason};
pub use engine::{extract, try_extract};
pub use parsers::jsx::ParseError;
