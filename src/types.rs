//! Core data types used throughout Sillycow.
//!
//! This module defines the fundamental data structures for representing:
//! - Parsed `.tfvars` files and their variables
//! - The three-way classification produced by the comparator
//! - Report formats

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Variables parsed from a single `.tfvars` file.
///
/// Keys are non-empty and trimmed; values are trimmed with one layer of
/// surrounding double quotes removed. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableMap {
    entries: BTreeMap<String, String>,
}

impl VariableMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment.
    ///
    /// Last write wins: assigning a key that is already present replaces the
    /// earlier value, and the replaced value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Value assigned to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` was assigned in this file.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All variable names, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All `(name, value)` pairs, in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no variables were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// A parsed `.tfvars` file: where it came from and what it assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file as discovered
    pub path: PathBuf,

    /// Variables assigned in the file
    pub variables: VariableMap,
}

impl SourceFile {
    /// Create a source file from a path and its parsed variables.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, variables: VariableMap) -> Self {
        Self {
            path: path.into(),
            variables,
        }
    }

    /// Identifier used for this file in reports.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.path.display().to_string()
    }

    /// Value of `key` in this file, or `None` when the file does not assign it.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.variables.get(key)
    }
}

/// A value as seen in one particular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileValue {
    /// File identifier
    pub file: String,
    /// Value assigned in that file
    pub value: String,
}

impl FileValue {
    /// Create a new file/value pair.
    #[must_use]
    pub fn new(file: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            value: value.into(),
        }
    }
}

/// Where a partially-present variable is missing and where it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPresence {
    /// Files that do not assign the variable, in file order
    pub missing: Vec<String>,
    /// Files that assign it, with their values, in file order
    pub present: Vec<FileValue>,
}

/// Which partition a variable ended up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    /// Present everywhere with a single value
    CommonIdentical,
    /// Present everywhere with two or more distinct values
    CommonDiffering,
    /// Missing from at least one file
    Partial,
}

impl std::fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommonIdentical => write!(f, "common_identical"),
            Self::CommonDiffering => write!(f, "common_differing"),
            Self::Partial => write!(f, "partial"),
        }
    }
}

/// Classification of every variable seen across the compared files.
///
/// Each variable of the union belongs to exactly one of the three maps.
/// All maps are keyed by variable name and iterate in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Variables present in every file with the same value
    pub common_identical: BTreeMap<String, String>,

    /// Variables present in every file with differing values,
    /// listed per file in file order
    pub common_differing: BTreeMap<String, Vec<FileValue>>,

    /// Variables missing from at least one file
    pub partial: BTreeMap<String, PartialPresence>,
}

impl ClassificationResult {
    /// Partition that `key` was placed in, if it was seen at all.
    #[must_use]
    pub fn category_of(&self, key: &str) -> Option<KeyCategory> {
        if self.common_identical.contains_key(key) {
            Some(KeyCategory::CommonIdentical)
        } else if self.common_differing.contains_key(key) {
            Some(KeyCategory::CommonDiffering)
        } else if self.partial.contains_key(key) {
            Some(KeyCategory::Partial)
        } else {
            None
        }
    }

    /// Total number of distinct variables across all partitions.
    #[must_use]
    pub fn total_keys(&self) -> usize {
        self.common_identical.len() + self.common_differing.len() + self.partial.len()
    }

    /// Whether no variable was found in any file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_keys() == 0
    }

    /// Whether every file agrees on every variable.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.common_differing.is_empty() && self.partial.is_empty()
    }

    /// Count summary.
    #[must_use]
    pub fn summary(&self) -> ClassificationSummary {
        ClassificationSummary {
            total_keys: self.total_keys(),
            common_identical: self.common_identical.len(),
            common_differing: self.common_differing.len(),
            partial: self.partial.len(),
        }
    }
}

/// Per-partition counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    /// Distinct variables seen
    pub total_keys: usize,
    /// Variables common with identical values
    pub common_identical: usize,
    /// Variables common with differing values
    pub common_differing: usize,
    /// Variables missing from some files
    pub partial: usize,
}

/// Outcome of comparing a set of files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// Files that took part, in discovery order
    pub files_compared: Vec<PathBuf>,

    /// The classification of their variables
    pub result: ClassificationResult,
}

impl Comparison {
    /// Build a comparison outcome from the compared files and their result.
    #[must_use]
    pub fn new(files: &[SourceFile], result: ClassificationResult) -> Self {
        Self {
            files_compared: files.iter().map(|f| f.path.clone()).collect(),
            result,
        }
    }

    /// Identifiers of the compared files, in discovery order.
    #[must_use]
    pub fn file_identifiers(&self) -> Vec<String> {
        self.files_compared
            .iter()
            .map(|p| p.display().to_string())
            .collect()
    }

    /// Whether `path` was one of the compared files.
    #[must_use]
    pub fn includes(&self, path: &Path) -> bool {
        self.files_compared.iter().any(|p| p == path)
    }

    /// Generate a report in the specified format with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if report generation fails.
    pub fn generate_report(&self, format: ReportFormat) -> crate::Result<String> {
        let config = crate::Config::default();
        let reporter = crate::reporter::Reporter::new(&config);
        reporter.generate(self, format)
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Self-contained HTML report
    Html,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Html => write!(f, "html"),
        }
    }
}
