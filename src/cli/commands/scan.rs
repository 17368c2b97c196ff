//! Scan command - Analyze a document and print the findings

use colored::Colorize;
use std::path::Path;

use super::{load_config, load_document, write_output, OutputFormat, ScanArgs};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::error::A11yLensError;
use crate::rules::constants::filter_valid_rules;
use crate::rules::{DocumentAnalyzer, ScanResults};

/// Execute the scan command
///
/// Loads the document, runs the enabled rule checks and prints (or writes)
/// the findings in the requested format.
///
/// # Returns
///
/// An exit code: 0 when clean, 1 for critical findings, 2 for warnings only,
/// 4 when `--only` keeps no known rule
pub async fn execute(args: ScanArgs, config_path: Option<&Path>) -> Result<i32, A11yLensError> {
    let only = args.only.map(filter_valid_rules);
    if only.as_ref().is_some_and(Vec::is_empty) {
        eprintln!(
            "{} --only names no known rule, nothing to run",
            "Error:".red().bold()
        );
        return Ok(exit_codes::INVALID_ARGS);
    }

    let config = load_config(config_path)?;
    let document = load_document(&args.source)?;

    let mut analyzer = DocumentAnalyzer::from_config(&config);

    if let Some(only) = only {
        analyzer.set_only_rules(only);
    }
    if let Some(skip) = args.skip {
        analyzer.set_skip_rules(filter_valid_rules(skip));
    }

    let findings = analyzer.analyze(&document).to_vec();
    let results = ScanResults::new(args.source, findings);

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_report(&results)?;

    if let Some(output_path) = args.output {
        write_output(&output_path, &rendered)?;
        eprintln!(
            "{} Results written to: {}",
            "Success:".green().bold(),
            output_path.display().to_string().cyan()
        );
    } else {
        println!("{rendered}");
    }

    Ok(exit_codes::for_results(&results))
}
