//! Error types for Sillycow.
//!
//! This module defines the error hierarchy using `thiserror`. Every error
//! that can originate inside the library carries the source location where
//! it was raised, so a failing run can be traced back without a debugger.
//!
//! # Error Categories
//!
//! - **Input errors**: not enough `.tfvars` files to compare
//! - **IO errors**: missing directories, unreadable files
//! - **Config errors**: invalid configuration files or glob patterns
//! - **Report errors**: serialization and template rendering failures
//!
//! Malformed lines inside a `.tfvars` file are never errors; the parser
//! skips them.
//!
//! # Example
//!
//! ```rust
//! use sillycow::error::{SillycowError, Result};
//!
//! fn read(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| SillycowError::io(path, e, file!(), line!()))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(DirectoryNotFound { path: dir.to_path_buf() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::SillycowError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for Sillycow operations.
pub type Result<T> = std::result::Result<T, SillycowError>;

/// The main error type for Sillycow.
#[derive(Error, Debug)]
pub enum SillycowError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Fewer than two files were available for comparison.
    #[error("At least two .tfvars files are required for comparison.")]
    InsufficientInput {
        /// Number of files that were found
        found: usize,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // I/O and File System Errors
    // =========================================================================
    /// I/O error with path context.
    #[error("I/O error at '{path}' ({src_path}:{src_line}): {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Directory not found.
    #[error("Directory not found: {path} ({src_path}:{src_line})")]
    DirectoryNotFound {
        /// The missing directory path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Invalid glob pattern used for file discovery.
    #[error("Invalid file pattern '{pattern}' ({src_path}:{src_line}): {message}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration parsing error.
    #[error("Failed to parse configuration ({src_path}:{src_line}): {message}")]
    ConfigParse {
        /// Error message
        message: String,
        /// The underlying error (if any)
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Report Errors
    // =========================================================================
    /// Report generation error.
    #[error("Failed to generate report ({src_path}:{src_line}): {message}")]
    ReportGeneration {
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Template rendering error.
    #[error("Template rendering error ({src_path}:{src_line}): {message}")]
    TemplateRender {
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },
}

impl SillycowError {
    /// Creates an `Io` error.
    #[must_use]
    pub fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        Self::Io {
            path: path.into(),
            source,
            src_path,
            src_line,
        }
    }

    /// Creates a `ConfigParse` error.
    #[must_use]
    pub fn config_parse(
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        Self::ConfigParse {
            message,
            source,
            src_path,
            src_line,
        }
    }

    /// Whether this is the "not enough files" condition, which the CLI
    /// reports as a plain message rather than a failure trace.
    #[must_use]
    pub fn is_insufficient_input(&self) -> bool {
        matches!(self, Self::InsufficientInput { .. })
    }

    /// Returns the appropriate exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InsufficientInput { .. } => 1,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => 13,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => 14,
            Self::DirectoryNotFound { .. } => 15,
            Self::ConfigParse { .. } => 18,
            Self::Pattern { .. } => 19,
            _ => 2,
        }
    }
}

/// Extension trait for `Result` to add context to errors.
pub trait ResultExt<T, E> {
    /// Adds a file path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| SillycowError::Io {
            path: path.into(),
            source: *e.into().downcast::<std::io::Error>().unwrap_or_else(|e| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, e))
            }),
            src_path: file!(),
            src_line: line!(),
        })
    }
}

impl From<std::io::Error> for SillycowError {
    fn from(source: std::io::Error) -> Self {
        // Prefer SillycowError::io(path, ..) wherever the path is known
        Self::Io {
            path: PathBuf::new(),
            source,
            src_path: file!(),
            src_line: line!(),
        }
    }
}
