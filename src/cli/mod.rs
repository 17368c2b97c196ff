//! # CLI Module
//!
//! This module defines the command-line interface for a11ylens using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Analyze an HTML document and print the findings |
//! | `report` | Export findings to a text or JSON report file |
//! | `serve` | Serve scan/highlight requests for a document over stdio |
//! | `init` | Initialize a new configuration file |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Scan a page
//! a11ylens scan index.html
//!
//! # Only check form labels and alt text, as JSON
//! a11ylens scan index.html --only missing-form-label,missing-alt-text --format json
//!
//! # Export the plain-text report
//! a11ylens report index.html -o report.txt
//!
//! # Pipe a document from another tool
//! curl -s https://example.com | a11ylens scan -
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{InitArgs, ReportArgs, ScanArgs, ServeArgs};

/// a11ylens - Inspect HTML documents for common accessibility defects
#[derive(Parser, Debug)]
#[command(name = "a11ylens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a document and print the findings
    Scan(ScanArgs),

    /// Export an accessibility report
    Report(ReportArgs),

    /// Serve scan and highlight requests for a document over stdin/stdout
    Serve(ServeArgs),

    /// Initialize a new configuration file
    Init(InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::{OutputFormat, ReportFormat};

    #[test]
    fn test_parse_scan_with_filters() {
        let cli = Cli::try_parse_from([
            "a11ylens",
            "-vv",
            "scan",
            "page.html",
            "--only",
            "missing-alt-text,tabindex-issue",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.source, "page.html");
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.only.unwrap().len(), 2);
                assert!(args.skip.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_defaults() {
        let cli = Cli::try_parse_from(["a11ylens", "report", "-", "-c", "custom.toml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.source, "-");
                assert_eq!(args.format, ReportFormat::Text);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["a11ylens", "init", "--preset", "wcag-aa", "--force"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.preset.as_deref(), Some("wcag-aa"));
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_scan_requires_source() {
        assert!(Cli::try_parse_from(["a11ylens", "scan"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
