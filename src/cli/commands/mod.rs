//! CLI commands module

pub mod init;
pub mod report;
pub mod scan;
pub mod serve;

use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::dom::DomTree;
use crate::error::{A11yLensError, DocumentError};

/// Source name that reads the document from standard input
pub const STDIN_SOURCE: &str = "-";

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// HTML document to analyze ("-" reads standard input)
    #[arg(value_name = "FILE")]
    pub source: String,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Only run specific rules
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific rules
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// HTML document to analyze ("-" reads standard input)
    #[arg(value_name = "FILE")]
    pub source: String,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Output file (defaults to accessibility-report.<ext>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// HTML document backing the page session ("-" reads standard input)
    #[arg(value_name = "FILE")]
    pub source: String,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Preset to use (baseline, wcag-aa, wcag-aaa)
    #[arg(short, long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Load the configuration named on the command line, or the one in the
/// working directory
pub fn load_config(path: Option<&Path>) -> Result<Config, A11yLensError> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load_or_default(),
    }
}

/// Read and parse the document named by `source`
pub fn load_document(source: &str) -> Result<DomTree, A11yLensError> {
    let html = read_source(source).map_err(|e| DocumentError::Read {
        path: source.to_string(),
        source: e,
    })?;

    let tree = DomTree::parse_html(&html);
    tracing::info!(source, elements = tree.len(), "Document loaded");
    Ok(tree)
}

fn read_source(source: &str) -> std::io::Result<String> {
    if source == STDIN_SOURCE {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(source)
    }
}

/// Write rendered output to a file
pub(crate) fn write_output(path: &Path, content: &str) -> Result<(), A11yLensError> {
    std::fs::write(path, content).map_err(|e| {
        A11yLensError::Output(crate::error::OutputError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })
    })
}
