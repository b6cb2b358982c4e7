//! Self-contained HTML report generator.
//!
//! The page layout lives in `templates/report.html` and is compiled in by
//! `askama`; this module only flattens the comparison into the plain view
//! structs the template iterates over. Values are HTML-escaped by the
//! template engine.

use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::{Comparison, FileValue};
use askama::Template;

/// HTML report generator.
///
/// The page is self-contained and takes no settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, comparison: &Comparison) -> Result<String> {
        ReportPage::from(comparison)
            .render()
            .map_err(|e| crate::err!(TemplateRender {
                message: e.to_string(),
            }))
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    status_class: &'static str,
    status_icon: &'static str,
    status_text: &'static str,
    version: &'static str,
    timestamp: String,
    files: Vec<String>,
    identical: Vec<IdenticalRow<'a>>,
    differing: Vec<DifferingBlock<'a>>,
    partial: Vec<PartialBlock<'a>>,
}

struct IdenticalRow<'a> {
    key: &'a str,
    value: &'a str,
}

struct DifferingBlock<'a> {
    key: &'a str,
    values: Vec<&'a FileValue>,
}

struct PartialBlock<'a> {
    key: &'a str,
    missing: &'a [String],
    present: &'a [FileValue],
}

impl<'a> From<&'a Comparison> for ReportPage<'a> {
    fn from(comparison: &'a Comparison) -> Self {
        let result = &comparison.result;

        let (status_class, status_icon, status_text) = if result.is_consistent() {
            ("status-success", "✔", "All Files Agree")
        } else {
            ("status-warning", "⚠", "Differences Found")
        };

        let differing = result
            .common_differing
            .iter()
            .map(|(key, values)| {
                let mut values: Vec<&FileValue> = values.iter().collect();
                values.sort_by(|a, b| a.value.cmp(&b.value));
                DifferingBlock { key, values }
            })
            .collect();

        Self {
            status_class,
            status_icon,
            status_text,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            files: comparison.file_identifiers(),
            identical: result
                .common_identical
                .iter()
                .map(|(key, value)| IdenticalRow { key, value })
                .collect(),
            differing,
            partial: result
                .partial
                .iter()
                .map(|(key, presence)| PartialBlock {
                    key,
                    missing: &presence.missing,
                    present: &presence.present,
                })
                .collect(),
        }
    }
}
