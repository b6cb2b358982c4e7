//! Three-way classification of variables across files.

use crate::comparator::MIN_FILES;
use crate::error::Result;
use crate::types::{ClassificationResult, FileValue, KeyCategory, PartialPresence, SourceFile};
use std::collections::BTreeSet;

/// Compares parsed variable files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator;

impl Comparator {
    /// Create a new comparator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify every variable of `files`.
    ///
    /// File order only affects the order of per-file entries in the result,
    /// never which partition a variable lands in.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientInput` when fewer than two files are given.
    pub fn compare(&self, files: &[SourceFile]) -> Result<ClassificationResult> {
        if files.len() < MIN_FILES {
            return Err(crate::err!(InsufficientInput { found: files.len() }));
        }

        let identifiers: Vec<String> = files.iter().map(SourceFile::identifier).collect();
        let union_keys: BTreeSet<&str> = files.iter().flat_map(|f| f.variables.keys()).collect();

        let mut result = ClassificationResult::default();

        for key in union_keys {
            // one slot per file, None where the file doesn't assign the key
            let aligned: Vec<(Option<&str>, &str)> = files
                .iter()
                .zip(&identifiers)
                .map(|(f, id)| (f.value_of(key), id.as_str()))
                .collect();

            let category = if aligned.iter().all(|(value, _)| value.is_some()) {
                let distinct: BTreeSet<&str> = aligned.iter().filter_map(|(v, _)| *v).collect();

                if distinct.len() == 1 {
                    let value = distinct.into_iter().next().unwrap_or_default();
                    result
                        .common_identical
                        .insert(key.to_string(), value.to_string());
                    KeyCategory::CommonIdentical
                } else {
                    let values = aligned
                        .iter()
                        .filter_map(|(v, file)| v.map(|v| FileValue::new(*file, v)))
                        .collect();
                    result.common_differing.insert(key.to_string(), values);
                    KeyCategory::CommonDiffering
                }
            } else {
                let mut presence = PartialPresence::default();
                for (value, file) in &aligned {
                    match value {
                        Some(v) => presence.present.push(FileValue::new(*file, *v)),
                        None => presence.missing.push((*file).to_string()),
                    }
                }
                result.partial.insert(key.to_string(), presence);
                KeyCategory::Partial
            };

            tracing::trace!(key, category = %category, "Classified variable");
        }

        tracing::info!(
            files = files.len(),
            common_identical = result.common_identical.len(),
            common_differing = result.common_differing.len(),
            partial = result.partial.len(),
            "Comparison complete"
        );

        Ok(result)
    }
}
