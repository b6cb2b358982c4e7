//! Configuration module for Sillycow.
//!
//! This module handles loading configuration from:
//! - YAML configuration files (`sillycow.yaml`)
//! - Environment variables (expanded inside the YAML)
//! - CLI arguments
//!
//! # Configuration File Format
//!
//! ```yaml
//! # sillycow.yaml
//!
//! # Discovery options
//! scan:
//!   pattern: "*.tfvars"
//!   exclude_patterns:
//!     - "*.auto.tfvars"
//!
//! # Output options
//! output:
//!   format: text
//!   colored: true
//!   pretty: true
//! ```

use crate::error::{Result, SillycowError};
use crate::types::ReportFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default glob used to discover files inside the base directory.
pub const DEFAULT_PATTERN: &str = "*.tfvars";

/// Config file names looked up in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["sillycow.yaml", "sillycow.yml", ".sillycow.yaml"];

static BRACED_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid regex"));

static BARE_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("Invalid regex"));

/// File discovery options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Glob matched against file names directly inside the base directory.
    pub pattern: String,

    /// File name patterns to leave out of the comparison (glob).
    pub exclude_patterns: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Report format used when none is given on the command line.
    pub format: ReportFormat,

    /// Use colored output.
    pub colored: bool,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            colored: true,
            pretty: true,
        }
    }
}

/// Main configuration structure with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discovery options
    pub scan: ScanOptions,

    /// Output options
    pub output: OutputOptions,
}

impl Config {
    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(content: &str) -> Result<Self> {
        tracing::debug!("Parsing configuration from YAML");
        let expanded = expand_env_vars(content);

        // An empty or comment-only document means "all defaults"
        if expanded
            .lines()
            .all(|l| l.trim().is_empty() || l.trim_start().starts_with('#'))
        {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&expanded).map_err(|e| {
            SillycowError::config_parse(e.to_string(), Some(Box::new(e)), file!(), line!())
        })?;

        tracing::debug!(
            pattern = %config.scan.pattern,
            exclude_patterns = config.scan.exclude_patterns.len(),
            format = %config.output.format,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Merge CLI arguments into the configuration.
    pub fn merge_cli_args(&mut self, args: &crate::cli::Cli) {
        if !args.exclude_patterns.is_empty() {
            self.scan
                .exclude_patterns
                .extend(args.exclude_patterns.iter().cloned());
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if args.no_color {
            self.output.colored = false;
        }
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. Unknown variables are left as-is.
fn expand_env_vars(content: &str) -> String {
    let mut result = content.to_string();

    for cap in BRACED_VAR.captures_iter(content) {
        if let Ok(value) = std::env::var(&cap[1]) {
            result = result.replace(&cap[0], &value);
        }
    }

    for cap in BARE_VAR.captures_iter(content) {
        if let Ok(value) = std::env::var(&cap[1]) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.pattern, "*.tfvars");
        assert!(config.scan.exclude_patterns.is_empty());
        assert_eq!(config.output.format, ReportFormat::Text);
        assert!(config.output.colored);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_config_from_yaml_nested() {
        let yaml = r#"
scan:
  pattern: "*.auto.tfvars"
  exclude_patterns:
    - "local.*"
output:
  format: json
  colored: false
"#;

        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.scan.pattern, "*.auto.tfvars");
        assert_eq!(config.scan.exclude_patterns, vec!["local.*".to_string()]);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.output.colored);
        // unspecified fields keep their defaults
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_section_keeps_pattern_default() {
        let yaml = r#"
scan:
  exclude_patterns:
    - "secret.tfvars"
"#;

        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.scan.pattern, DEFAULT_PATTERN);
        assert_eq!(config.scan.exclude_patterns.len(), 1);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml("output:\n  format: [not, a, format]\n");
        assert!(matches!(result, Err(SillycowError::ConfigParse { .. })));
    }

    #[test]
    fn test_env_var_expansion_leaves_unknown_vars() {
        let expanded = expand_env_vars("pattern: ${SILLYCOW_SURELY_UNSET_VAR}");
        assert_eq!(expanded, "pattern: ${SILLYCOW_SURELY_UNSET_VAR}");

        for pattern in ["no vars here", "$NOTAVAR123", "${NESTED${VAR}}"] {
            let _ = expand_env_vars(pattern);
        }
    }

    #[test]
    fn test_merge_cli_args() {
        let cli = crate::cli::Cli::parse_from([
            "sillycow",
            "--format",
            "html",
            "--exclude",
            "*.auto.tfvars",
            "--no-color",
        ]);

        let mut config = Config::default();
        config.merge_cli_args(&cli);

        assert_eq!(config.output.format, ReportFormat::Html);
        assert!(!config.output.colored);
        assert_eq!(config.scan.exclude_patterns, vec!["*.auto.tfvars".to_string()]);
    }

    #[test]
    fn test_merge_cli_args_keeps_config_format() {
        let cli = crate::cli::Cli::parse_from(["sillycow"]);

        let mut config = Config::default();
        config.output.format = ReportFormat::Json;
        config.merge_cli_args(&cli);

        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.colored);
    }
}
