//! Keyscan - translation key extractor for i18next / react-i18next sources
//!
//! Keyscan scans JavaScript and TypeScript sources (JSX/TSX included) for
//! `t("key")` / `i18next.t("key")` calls and `<Trans>` elements, and collects
//! every statically known key. Occurrences whose key cannot be determined are
//! reported with file and line instead of being guessed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine, file scanning, aggregation and report files
//! - `issues`: Issue type definitions and reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
