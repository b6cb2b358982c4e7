//! Integration tests for Sillycow.
//!
//! These tests verify the end-to-end functionality of discovery, parsing,
//! comparison and reporting, both through the library and the binary.

use sillycow::{Config, Scanner};
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod scanner_tests {
    use super::*;
    use sillycow::types::KeyCategory;
    use sillycow::SillycowError;

    #[test]
    fn test_scan_identical_files() {
        let scanner = Scanner::new(Config::default());
        let comparison = scanner
            .scan_directory(fixtures_path().join("identical"))
            .unwrap();

        assert_eq!(comparison.files_compared.len(), 2);
        assert!(comparison.result.is_consistent());
        assert_eq!(comparison.result.common_identical["region"], "us-east-1");
        assert_eq!(comparison.result.common_identical["instance_type"], "t3.micro");
    }

    #[test]
    fn test_scan_mixed_files() {
        let scanner = Scanner::new(Config::default());
        let comparison = scanner.scan_directory(fixtures_path().join("mixed")).unwrap();
        let result = &comparison.result;

        // Discovery order is alphabetical
        let names: Vec<_> = comparison
            .files_compared
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["dev.tfvars", "prod.tfvars", "staging.tfvars"]);

        assert_eq!(result.category_of("region"), Some(KeyCategory::CommonIdentical));
        assert_eq!(result.category_of("environment"), Some(KeyCategory::CommonDiffering));
        assert_eq!(result.category_of("instance_type"), Some(KeyCategory::CommonDiffering));
        assert_eq!(result.category_of("enable_debug"), Some(KeyCategory::Partial));

        // Commented out inside a block comment
        assert_eq!(result.category_of("legacy_flag"), None);
        assert_eq!(result.total_keys(), 4);

        // Last assignment wins
        let prod_instance = result.common_differing["instance_type"]
            .iter()
            .find(|fv| fv.file.ends_with("prod.tfvars"))
            .unwrap();
        assert_eq!(prod_instance.value, "m5.xlarge");

        let debug = &result.partial["enable_debug"];
        assert_eq!(debug.missing.len(), 1);
        assert!(debug.missing[0].ends_with("prod.tfvars"));
        assert_eq!(debug.present.len(), 2);
    }

    #[test]
    fn test_scan_with_exclude_pattern() {
        let mut config = Config::default();
        config.scan.exclude_patterns = vec!["staging.*".to_string()];

        let comparison = Scanner::new(config)
            .scan_directory(fixtures_path().join("mixed"))
            .unwrap();

        let mixed = fixtures_path().join("mixed");
        assert_eq!(comparison.files_compared.len(), 2);
        assert!(comparison.includes(&mixed.join("dev.tfvars")));
        assert!(!comparison.includes(&mixed.join("staging.tfvars")));
        assert!(comparison.result.partial.contains_key("enable_debug"));
    }

    #[test]
    fn test_scan_single_file_is_insufficient() {
        let result = Scanner::new(Config::default()).scan_directory(fixtures_path().join("single"));

        let err = result.unwrap_err();
        assert!(err.is_insufficient_input());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_scan_empty_directory_is_insufficient() {
        let dir = tempfile::tempdir().unwrap();
        let result = Scanner::new(Config::default()).scan_directory(dir.path());

        assert!(matches!(result, Err(SillycowError::InsufficientInput { found: 0, .. })));
    }

    #[test]
    fn test_scan_missing_directory() {
        let result =
            Scanner::new(Config::default()).scan_directory(fixtures_path().join("does-not-exist"));

        assert!(matches!(result, Err(SillycowError::DirectoryNotFound { .. })));
    }
}

mod reporter_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sillycow::reporter::Reporter;
    use sillycow::types::ReportFormat;

    fn plain_config() -> Config {
        let mut config = Config::default();
        config.output.colored = false;
        config
    }

    #[test]
    fn test_text_report() {
        let config = plain_config();
        let files = [
            "tests/fixtures/mixed/dev.tfvars",
            "tests/fixtures/mixed/prod.tfvars",
            "tests/fixtures/mixed/staging.tfvars",
        ];
        let comparison = Scanner::new(config.clone()).compare_files(&files).unwrap();

        let text = Reporter::new(&config)
            .generate(&comparison, ReportFormat::Text)
            .unwrap();

        let expected = "\
Common variables with identical values:
region = us-east-1

Differences:
Variable: environment
  tests/fixtures/mixed/dev.tfvars: environment = dev
  tests/fixtures/mixed/prod.tfvars: environment = prod
  tests/fixtures/mixed/staging.tfvars: environment = staging

Variable: instance_type
  tests/fixtures/mixed/prod.tfvars: instance_type = m5.xlarge
  tests/fixtures/mixed/dev.tfvars: instance_type = t3.micro
  tests/fixtures/mixed/staging.tfvars: instance_type = t3.small

Variable status:
Variable: enable_debug
  Missing in tests/fixtures/mixed/prod.tfvars
  Present in tests/fixtures/mixed/dev.tfvars with value true
  Present in tests/fixtures/mixed/staging.tfvars with value false

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_report() {
        let config = plain_config();
        let comparison = Scanner::new(config.clone())
            .scan_directory(fixtures_path().join("mixed"))
            .unwrap();

        let json = Reporter::new(&config)
            .generate(&comparison, ReportFormat::Json)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["metadata"]["version"].is_string());
        assert_eq!(parsed["metadata"]["files_compared"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["summary"]["common_identical"], 1);
        assert_eq!(parsed["summary"]["common_differing"], 2);
        assert_eq!(parsed["summary"]["partial"], 1);
        assert_eq!(parsed["common_identical"]["region"], "us-east-1");
    }

    #[test]
    fn test_html_report() {
        let config = plain_config();
        let comparison = Scanner::new(config.clone())
            .scan_directory(fixtures_path().join("mixed"))
            .unwrap();

        let html = Reporter::new(&config)
            .generate(&comparison, ReportFormat::Html)
            .unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        // HTML should be self-contained
        assert!(html.contains("<style>"));
        assert!(html.contains("instance_type"));
        assert!(html.contains("m5.xlarge"));
    }
}

mod cli_tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    /// Get a Command for the sillycow binary
    fn sillycow_cmd() -> Command {
        let mut cmd = Command::cargo_bin("sillycow").expect("Failed to find sillycow binary");
        cmd.env_remove("RUST_LOG").env_remove("SILLYCOW_CONFIG");
        cmd
    }

    #[test]
    fn test_identical_directory() {
        sillycow_cmd()
            .current_dir(fixtures_path().join("identical"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "Common variables with identical values:\n",
            ))
            .stdout(predicate::str::contains("instance_type = t3.micro\n"))
            .stdout(predicate::str::contains("region        = us-east-1\n"))
            .stdout(predicate::str::contains("Differences:").not())
            .stdout(predicate::str::contains("Variable status:").not());
    }

    #[test]
    fn test_mixed_directory() {
        sillycow_cmd()
            .arg("--basedir")
            .arg(fixtures_path().join("mixed"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Differences:"))
            .stdout(predicate::str::contains("Variable: environment"))
            .stdout(predicate::str::contains("Variable status:"))
            .stdout(predicate::str::contains("with value false"))
            .stdout(predicate::str::contains("legacy_flag").not());
    }

    #[test]
    fn test_single_file_fails() {
        sillycow_cmd()
            .arg("--basedir")
            .arg(fixtures_path().join("single"))
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr("At least two .tfvars files are required for comparison.\n");
    }

    #[test]
    fn test_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        sillycow_cmd()
            .arg("--basedir")
            .arg(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr("At least two .tfvars files are required for comparison.\n");
    }

    #[test]
    fn test_missing_directory_fails() {
        sillycow_cmd()
            .arg("--basedir")
            .arg(fixtures_path().join("does-not-exist"))
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Directory not found"));
    }

    #[test]
    fn test_json_format() {
        let output = sillycow_cmd()
            .args(["--format", "json", "--basedir"])
            .arg(fixtures_path().join("mixed"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(parsed["common_differing"]["environment"].is_array());
    }

    #[test]
    fn test_exclude_flag() {
        sillycow_cmd()
            .args(["--exclude", "staging.tfvars", "--basedir"])
            .arg(fixtures_path().join("mixed"))
            .assert()
            .success()
            .stdout(predicate::str::contains("staging.tfvars").not());
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sillycow.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").unwrap();

        let output = sillycow_cmd()
            .arg("--config")
            .arg(&config_path)
            .arg("--basedir")
            .arg(fixtures_path().join("identical"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["summary"]["common_identical"], 2);
    }

    #[test]
    fn test_positional_argument_rejected() {
        sillycow_cmd().arg("somewhere").assert().failure();
    }
}
