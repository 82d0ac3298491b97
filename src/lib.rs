//! dictcc - dict.cc lookups from the terminal
//!
//! dictcc fetches a dict.cc result page, finds the inline script that holds
//! the result arrays, parses it with swc and prints the aligned
//! source/target pairs as a table.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (locate script, parse arrays, align pairs)
//! - `fetch`: HTTP retrieval of result pages
//! - `reporter`: Table and JSON output

pub mod cli;
pub mod config;
pub mod core;
pub mod fetch;
pub mod reporter;
