//! Core data types shared by the engine and its callers.
//!
//! ## Module Structure
//!
//! - `diagnostic`: DiagnosticRecord and the Reason it was raised
//! - `extraction`: ExtractionResult (accepted keys, warnings, errors of one unit)

pub mod diagnostic;
pub mod extraction;

pub use diagnostic::{DiagnosticRecord, Reason};
pub use extraction::ExtractionResult;
