//! Parsers for source code and key files.
//!
//! - `jsx`: JS/JSX/TS/TSX source parser (uses swc for AST generation)
//! - `existing_keys`: previously extracted key list (JSON)

pub mod existing_keys;
pub mod jsx;
