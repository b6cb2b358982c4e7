//! Parsing module for Terraform/OpenTofu variable files.
//!
//! This module discovers `.tfvars` files in a directory and turns each one
//! into a [`VariableMap`](crate::types::VariableMap).
//!
//! # Supported Constructs
//!
//! - `key = "value"` and `key = value` assignments, split on the first `=`
//! - `#` and `//` line comments
//! - `/* ... */` block comments, recognised only at the start and end of a line
//!
//! Anything else (expressions, nested blocks, interpolation) is outside the
//! format and lines that cannot be read as an assignment are skipped.
//!
//! # Example
//!
//! ```rust,no_run
//! use sillycow::parser::TfvarsParser;
//! use sillycow::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let parser = TfvarsParser::new(&Config::default());
//!     let files = parser.parse_directory("./envs".as_ref())?;
//!     println!("Parsed {} files", files.len());
//!     Ok(())
//! }
//! ```

mod tfvars;

pub use tfvars::{parse_tfvars, TfvarsParser};

use crate::types::VariableMap;

/// Marker opening a block comment when found at the start of a line.
pub const BLOCK_COMMENT_OPEN: &str = "/*";

/// Marker closing a block comment when found at the end of a line.
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Prefixes of single-line comments.
pub const LINE_COMMENT_PREFIXES: &[&str] = &["#", "//"];

/// Trait for parsing variable file content.
///
/// Parsing never fails: lines that cannot be interpreted are skipped.
/// This allows alternative implementations (e.g. for testing).
pub trait Parser: Send + Sync {
    /// Parse a single file's contents.
    fn parse_content(&self, content: &str) -> VariableMap;
}
