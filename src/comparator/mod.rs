//! Variable comparison module.
//!
//! This module classifies every variable seen across a set of parsed
//! `.tfvars` files into exactly one of three groups:
//!
//! 1. **Common, identical**: assigned in every file, always to the same value.
//!
//! 2. **Common, differing**: assigned in every file, with two or more
//!    distinct values.
//!
//! 3. **Partial**: missing from at least one file, whatever the values in
//!    the files that do assign it.
//!
//! # Example
//!
//! ```rust
//! use sillycow::comparator::Comparator;
//! use sillycow::parser::parse_tfvars;
//! use sillycow::types::SourceFile;
//!
//! let files = vec![
//!     SourceFile::new("dev.tfvars", parse_tfvars(r#"env = "dev""#)),
//!     SourceFile::new("prod.tfvars", parse_tfvars(r#"env = "prod""#)),
//! ];
//!
//! let result = Comparator::new().compare(&files).unwrap();
//! assert!(result.common_differing.contains_key("env"));
//! ```

mod classify;

pub use classify::Comparator;

/// Minimum number of files a comparison needs.
pub const MIN_FILES: usize = 2;
