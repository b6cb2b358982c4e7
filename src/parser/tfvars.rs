//! `.tfvars` file parser implementation.

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::parser::{Parser, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, LINE_COMMENT_PREFIXES};
use crate::types::{SourceFile, VariableMap};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Parser for `.tfvars` files.
///
/// Discovers matching files directly inside a directory (no recursion),
/// reads them in discovery order and extracts their assignments.
pub struct TfvarsParser {
    /// Glob matched against file names in the base directory
    pattern: String,
    /// File names to leave out
    exclude_patterns: Vec<String>,
}

impl TfvarsParser {
    /// Create a new parser with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            pattern: config.scan.pattern.clone(),
            exclude_patterns: config.scan.exclude_patterns.clone(),
        }
    }

    /// List the files to compare inside `dir`, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory doesn't exist or if the
    /// configured patterns are not valid globs.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(crate::err!(DirectoryNotFound {
                path: dir.to_path_buf(),
            }));
        }

        let pattern = compile_pattern(&self.pattern)?;
        let excludes = self
            .exclude_patterns
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>>>()?;

        // Patterns only ever see the file name, so the base directory's own
        // name (including non UTF-8 bytes) never takes part in matching
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).with_path(dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read directory entry");
                    continue;
                }
            };

            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if !pattern.matches_with(file_name, MATCH_OPTIONS) || !path.is_file() {
                continue;
            }

            if self.is_excluded(&path, &excludes) {
                continue;
            }

            files.push(path);
        }

        // read_dir order is platform dependent
        files.sort();

        tracing::debug!(dir = %dir.display(), count = files.len(), "Discovered files");
        Ok(files)
    }

    /// Discover and parse every matching file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails or any file cannot be read.
    /// No partial result is returned.
    pub fn parse_directory(&self, dir: &Path) -> Result<Vec<SourceFile>> {
        let paths = self.discover(dir)?;
        self.parse_files(&paths)
    }

    /// Parse the given files, in order.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as one file cannot be read.
    pub fn parse_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<SourceFile>> {
        let files = paths
            .iter()
            .map(|p| self.parse_file(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            files = files.len(),
            variables = files.iter().map(|f| f.variables.len()).sum::<usize>(),
            "Parsing complete"
        );

        Ok(files)
    }

    /// Parse a single `.tfvars` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn parse_file(&self, path: &Path) -> Result<SourceFile> {
        tracing::debug!(file = %path.display(), "Parsing file");

        let content = std::fs::read_to_string(path).with_path(path)?;

        Ok(SourceFile::new(path, self.parse_content(&content)))
    }

    /// Check if a file name matches one of the exclude patterns.
    fn is_excluded(&self, path: &Path, excludes: &[Pattern]) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if excludes.iter().any(|p| p.matches_with(file_name, MATCH_OPTIONS)) {
            tracing::debug!(path = %path.display(), reason = "matches exclude pattern", "Skipping file");
            return true;
        }

        false
    }
}

impl Parser for TfvarsParser {
    fn parse_content(&self, content: &str) -> VariableMap {
        parse_tfvars(content)
    }
}

/// Hidden files are only matched by patterns that start with a literal dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| {
        crate::err!(Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
    })
}

/// How a single trimmed line is treated.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Comment, blank or otherwise uninterpretable line
    Skip,
    /// `key = value` assignment
    Assignment(&'a str, &'a str),
}

/// Line-by-line reader tracking whether we are inside a block comment.
#[derive(Debug, Default)]
struct LineReader {
    in_block_comment: bool,
}

impl LineReader {
    fn read<'a>(&mut self, raw: &'a str) -> Line<'a> {
        let line = raw.trim();

        if self.in_block_comment {
            // The closing line itself is still part of the comment
            if line.ends_with(BLOCK_COMMENT_CLOSE) {
                self.in_block_comment = false;
            }
            return Line::Skip;
        }

        if line.starts_with(BLOCK_COMMENT_OPEN) {
            self.in_block_comment = true;
            return Line::Skip;
        }

        if LINE_COMMENT_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return Line::Skip;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    return Line::Skip;
                }
                Line::Assignment(key, unquote(value.trim()))
            }
            None => Line::Skip,
        }
    }
}

/// Strip exactly one pair of surrounding double quotes.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse `.tfvars` content into a variable map.
///
/// Never fails. Later assignments to the same key overwrite earlier ones.
#[must_use]
pub fn parse_tfvars(content: &str) -> VariableMap {
    let mut reader = LineReader::default();
    let mut variables = VariableMap::new();

    for raw in content.lines() {
        if let Line::Assignment(key, value) = reader.read(raw) {
            if let Some(previous) = variables.insert(key, value) {
                tracing::trace!(key, previous = %previous, "Variable reassigned, keeping last value");
            }
        }
    }

    if reader.in_block_comment {
        tracing::debug!("Block comment not closed before end of file");
    }

    variables
}
