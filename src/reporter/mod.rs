//! Report generation module.
//!
//! This module provides report generation in multiple formats:
//! - Text: the built-in human-readable report (default)
//! - JSON: machine-readable structured output
//! - HTML: self-contained visual report rendered from a template
//!
//! Callers that need another layout can plug in their own
//! [`ReportGenerator`] with [`Reporter::with_generator`]; it receives the
//! comparison as plain data.
//!
//! # Example
//!
//! ```rust,no_run
//! use sillycow::reporter::Reporter;
//! use sillycow::{Config, ReportFormat, Scanner};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let comparison = Scanner::new(config.clone()).scan_directory("./envs")?;
//!
//!     let reporter = Reporter::new(&config);
//!     print!("{}", reporter.generate(&comparison, ReportFormat::Text)?);
//!     Ok(())
//! }
//! ```

mod html;
mod json;
mod text;

use crate::config::Config;
use crate::error::Result;
use crate::types::{Comparison, ReportFormat};

pub use html::HtmlReporter;
pub use json::{JsonReport, JsonReporter};
pub use text::TextReporter;

/// Report generator that supports multiple output formats.
pub struct Reporter {
    config: Config,
    custom: Option<Box<dyn ReportGenerator>>,
}

impl Reporter {
    /// Create a new reporter with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            custom: None,
        }
    }

    /// Use `generator` for every report instead of the built-in formats.
    #[must_use]
    pub fn with_generator(mut self, generator: Box<dyn ReportGenerator>) -> Self {
        self.custom = Some(generator);
        self
    }

    /// Generate a report in the specified format.
    ///
    /// The format is ignored when a custom generator was supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if report generation fails.
    pub fn generate(&self, comparison: &Comparison, format: ReportFormat) -> Result<String> {
        if let Some(generator) = &self.custom {
            return generator.generate(comparison);
        }

        match format {
            ReportFormat::Text => TextReporter::new(&self.config).generate(comparison),
            ReportFormat::Json => JsonReporter::new(&self.config).generate(comparison),
            ReportFormat::Html => HtmlReporter::new().generate(comparison),
        }
    }
}

/// Trait for report generators.
pub trait ReportGenerator {
    /// Generate a report from a comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails.
    fn generate(&self, comparison: &Comparison) -> Result<String>;
}
