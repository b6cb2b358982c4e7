//! Plain text report generator.
//!
//! Layout:
//!
//! ```text
//! Common variables with identical values:
//! name   = x
//! region = us-east-1
//!
//! Differences:
//! Variable: env
//!   dev.tfvars: env = dev
//!   prod.tfvars: env = prod
//!
//! Variable status:
//! Variable: extra
//!   Missing in prod.tfvars
//!   Present in dev.tfvars with value 1
//!
//! ```
//!
//! The first section is always printed; the other two only when non-empty.

use crate::config::Config;
use crate::error::Result;
use crate::reporter::ReportGenerator;
use crate::types::{ClassificationResult, Comparison, FileValue, PartialPresence};
use colored::Colorize;
use std::fmt::Write;

const IDENTICAL_HEADER: &str = "Common variables with identical values:";
const DIFFERING_HEADER: &str = "Differences:";
const PARTIAL_HEADER: &str = "Variable status:";

/// Text report generator for CLI output.
pub struct TextReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl TextReporter {
    /// Create a new text reporter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            use_colors: config.output.colored,
        }
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, comparison: &Comparison) -> Result<String> {
        let result = &comparison.result;
        let mut output = String::new();

        output.push_str(&self.format_identical(result));

        if !result.common_differing.is_empty() {
            output.push_str(&self.format_differing(result));
        }

        if !result.partial.is_empty() {
            output.push_str(&self.format_partial(result));
        }

        Ok(output)
    }
}

impl TextReporter {
    fn header(&self, title: &str) -> String {
        if self.use_colors {
            format!("{}\n", title.bright_cyan().bold())
        } else {
            format!("{title}\n")
        }
    }

    /// Identical variables, `=` signs aligned on the longest key.
    fn format_identical(&self, result: &ClassificationResult) -> String {
        let mut output = self.header(IDENTICAL_HEADER);

        let width = result
            .common_identical
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        for (key, value) in &result.common_identical {
            let _ = writeln!(output, "{key:<width$} = {value}");
        }

        output.push('\n');
        output
    }

    fn format_differing(&self, result: &ClassificationResult) -> String {
        let mut output = self.header(DIFFERING_HEADER);

        for (key, values) in &result.common_differing {
            let _ = writeln!(output, "Variable: {key}");
            for FileValue { file, value } in sorted_by_value(values) {
                let _ = writeln!(output, "  {file}: {key} = {value}");
            }
            output.push('\n');
        }

        output
    }

    fn format_partial(&self, result: &ClassificationResult) -> String {
        let mut output = self.header(PARTIAL_HEADER);

        for (key, PartialPresence { missing, present }) in &result.partial {
            let _ = writeln!(output, "Variable: {key}");
            for file in missing {
                let _ = writeln!(output, "  Missing in {file}");
            }
            for FileValue { file, value } in present {
                let _ = writeln!(output, "  Present in {file} with value {value}");
            }
            output.push('\n');
        }

        output
    }
}

/// Per-file values ordered by value; ties keep file order.
fn sorted_by_value(values: &[FileValue]) -> Vec<&FileValue> {
    let mut sorted: Vec<&FileValue> = values.iter().collect();
    sorted.sort_by(|a, b| a.value.cmp(&b.value));
    sorted
}
