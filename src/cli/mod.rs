//! Command-line interface module.
//!
//! This module defines the CLI structure using Clap.
//!
//! # Example Usage
//!
//! ```bash
//! # Compare every .tfvars file in the current directory
//! sillycow
//!
//! # Compare the files of another directory
//! sillycow --basedir ./envs
//!
//! # Machine-readable output
//! sillycow --basedir ./envs --format json
//!
//! # Leave auto-loaded variable files out
//! sillycow --basedir ./envs --exclude '*.auto.tfvars'
//! ```

use crate::types::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Sillycow - compare Terraform/OpenTofu .tfvars files.
#[derive(Parser, Debug)]
#[command(
    name = "sillycow",
    author,
    version,
    about = "Compare .tfvars files in a directory.",
    long_about = "Sillycow reads every .tfvars file in a directory and reports the variables \
                  they share with identical values, the variables whose values differ, and \
                  the variables missing from some of the files."
)]
pub struct Cli {
    /// Base directory to search for .tfvars files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub basedir: PathBuf,

    /// Output format (defaults to the configured format, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Path to configuration file
    #[arg(short, long, env = "SILLYCOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// File name patterns to leave out of the comparison (glob patterns)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}
