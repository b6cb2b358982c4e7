//! # Sillycow
//!
//! Compare Terraform/OpenTofu `.tfvars` files.
//!
//! Sillycow reads every `.tfvars` file directly inside a directory and
//! classifies each variable it finds:
//!
//! - **Common, identical**: assigned in every file to the same value
//! - **Common, differing**: assigned in every file, values differ
//! - **Partial**: missing from at least one file
//!
//! The result can be rendered as plain text (default), JSON or HTML, or
//! handed to a custom [`reporter::ReportGenerator`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use sillycow::{Config, ReportFormat, Scanner};
//!
//! fn main() -> anyhow::Result<()> {
//!     let scanner = Scanner::new(Config::default());
//!     let comparison = scanner.scan_directory("./envs")?;
//!
//!     print!("{}", comparison.generate_report(ReportFormat::Text)?);
//!     Ok(())
//! }
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod cli;
pub mod comparator;
pub mod config;
pub mod error;
pub mod parser;
pub mod reporter;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{Result, SillycowError};
pub use types::{
    ClassificationResult, Comparison, FileValue, PartialPresence, ReportFormat, SourceFile,
    VariableMap,
};

use std::path::Path;

/// Orchestrates discovery, parsing and comparison.
///
/// # Example
///
/// ```rust,no_run
/// use sillycow::{Config, Scanner};
///
/// fn main() -> anyhow::Result<()> {
///     let scanner = Scanner::new(Config::default());
///     let comparison = scanner.compare_files(&["dev.tfvars", "prod.tfvars"])?;
///
///     println!("{} differing variables", comparison.result.common_differing.len());
///     Ok(())
/// }
/// ```
pub struct Scanner {
    config: Config,
}

impl Scanner {
    /// Create a new scanner with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Compare every matching file directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory doesn't exist
    /// - Fewer than two files match (no file is read in that case)
    /// - A file cannot be read
    pub fn scan_directory<P: AsRef<Path>>(&self, dir: P) -> Result<Comparison> {
        let dir = dir.as_ref();
        tracing::info!(path = %dir.display(), pattern = %self.config.scan.pattern, "Scanning directory");

        let parser = parser::TfvarsParser::new(&self.config);
        let paths = parser.discover(dir)?;

        if paths.len() < comparator::MIN_FILES {
            tracing::debug!(path = %dir.display(), found = paths.len(), "Not enough files to compare");
            return Err(err!(InsufficientInput { found: paths.len() }));
        }

        self.compare_files(&paths)
    }

    /// Compare an explicit list of files, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two files are given or a file
    /// cannot be read.
    pub fn compare_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Comparison> {
        if paths.len() < comparator::MIN_FILES {
            return Err(err!(InsufficientInput { found: paths.len() }));
        }

        let files = parser::TfvarsParser::new(&self.config).parse_files(paths)?;
        let result = comparator::Comparator::new().compare(&files)?;

        Ok(Comparison::new(&files, result))
    }
}
