//! JSON report generator.

use crate::config::Config;
use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::{ClassificationResult, ClassificationSummary, Comparison};
use serde::Serialize;

/// JSON report generator.
pub struct JsonReporter {
    /// Whether to pretty-print the output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            pretty: config.output.pretty,
        }
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, comparison: &Comparison) -> Result<String> {
        let report = JsonReport::from(comparison);

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };

        json.map_err(|e| crate::err!(ReportGeneration {
            message: format!("Failed to serialize JSON report: {e}"),
        }))
    }
}

/// JSON report structure.
///
/// The three partitions are emitted at the top level next to the
/// metadata and summary.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Summary statistics
    pub summary: ClassificationSummary,
    /// The classification itself
    #[serde(flatten)]
    pub classification: &'a ClassificationResult,
}

impl<'a> From<&'a Comparison> for JsonReport<'a> {
    fn from(comparison: &'a Comparison) -> Self {
        Self {
            metadata: ReportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                files_compared: comparison.file_identifiers(),
            },
            summary: comparison.result.summary(),
            classification: &comparison.result,
        }
    }
}

/// Report metadata.
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    /// Sillycow version
    pub version: String,
    /// Report generation timestamp
    pub timestamp: String,
    /// Files that were compared, in discovery order
    pub files_compared: Vec<String>,
}
