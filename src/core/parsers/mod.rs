//! Parsers for embedded page content.
//!
//! - `script`: inline JavaScript parser (uses swc for AST generation)

pub mod script;
