//! Report command - Export an accessibility report

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::{load_config, load_document, write_output, ReportArgs, ReportFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TextReport};
use crate::error::A11yLensError;
use crate::rules::{DocumentAnalyzer, ScanResults};

/// Base name of the report file when no output path is given
pub const DEFAULT_REPORT_STEM: &str = "accessibility-report";

pub async fn execute(args: ReportArgs, config_path: Option<&Path>) -> Result<i32, A11yLensError> {
    let config = load_config(config_path)?;
    let document = load_document(&args.source)?;

    let mut analyzer = DocumentAnalyzer::from_config(&config);
    let findings = analyzer.analyze(&document).to_vec();
    let results = ScanResults::new(args.source, findings);

    let renderer: Box<dyn ReportRenderer> = match args.format {
        ReportFormat::Text => Box::new(TextReport::new()),
        ReportFormat::Json => Box::new(JsonOutput::new()),
    };
    let report = renderer.render_report(&results)?;

    let output_path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{DEFAULT_REPORT_STEM}.{}",
            args.format.extension()
        ))
    });
    write_output(&output_path, &report)?;

    println!(
        "{} Report written to: {}",
        "Success:".green().bold(),
        output_path.display().to_string().cyan()
    );

    Ok(exit_codes::for_results(&results))
}
