//! Sillycow CLI entry point.
//!
//! This binary provides the command-line interface for Sillycow.

use clap::Parser;
use sillycow::cli::Cli;
use sillycow::config::DEFAULT_CONFIG_FILES;
use sillycow::error::ResultExt;
use sillycow::reporter::Reporter;
use sillycow::{Config, Scanner, SillycowError};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let known = e.downcast_ref::<SillycowError>();

            // Not enough files is an expected outcome, not a crash
            if let Some(err) = known.filter(|err| err.is_insufficient_input()) {
                eprintln!("{err}");
                return ExitCode::from(err.exit_code());
            }

            tracing::error!(error = %e, "Fatal error");
            eprintln!("Error: {e}");

            let mut causes = e.chain().skip(1).peekable();
            if causes.peek().is_some() {
                eprintln!("\nCaused by:");
                for (i, cause) in causes.enumerate() {
                    eprintln!("  {i}: {cause}");
                }
            }

            ExitCode::from(known.map_or(2, SillycowError::exit_code))
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        // RUST_LOG wins over the verbose flag
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let base_level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(format!("warn,sillycow={base_level}"))
        })
    };

    // stdout carries the report, logs go to stderr
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    tracing::debug!("Loading configuration");
    let mut config = load_config(cli)?;
    config.merge_cli_args(cli);

    if !std::io::stdout().is_terminal() {
        config.output.colored = false;
    }

    let comparison = Scanner::new(config.clone()).scan_directory(&cli.basedir)?;

    let report = Reporter::new(&config).generate(&comparison, config.output.format)?;

    if report.ends_with('\n') {
        print!("{report}");
    } else {
        println!("{report}");
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(ref config_path) = cli.config {
        tracing::debug!(path = %config_path.display(), "Loading configuration from explicit path");
        let content = std::fs::read_to_string(config_path).with_path(config_path)?;
        return Ok(Config::from_yaml(&content)?);
    }

    for path in DEFAULT_CONFIG_FILES {
        if std::path::Path::new(path).exists() {
            tracing::debug!(path = %path, "Found configuration file");
            let content = std::fs::read_to_string(path).with_path(*path)?;
            return Ok(Config::from_yaml(&content)?);
        }
    }

    tracing::debug!("No configuration file found, using default configuration");
    Ok(Config::default())
}
