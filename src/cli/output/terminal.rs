//! Terminal output formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::error::A11yLensError;
use crate::rules::{Finding, ScanResults, Severity};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, source: &str) -> String {
        format!(
            "\n{} v{}\n\n{} {}\n",
            "a11ylens".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Document:".dimmed(),
            source.white().bold()
        )
    }

    fn format_findings(&self, results: &ScanResults) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  ACCESSIBILITY ISSUES".bold()
        ));

        if results.findings().is_empty() {
            output.push_str(&format!(
                "  {}\n",
                "No accessibility issues found!".green()
            ));
            return output;
        }

        let critical: Vec<_> = results.findings_by_severity(Severity::Critical).collect();
        if !critical.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "❌ CRITICAL".red().bold(),
                critical.len()
            ));
            for finding in critical {
                output.push_str(&self.format_finding(finding));
            }
            output.push('\n');
        }

        let warnings: Vec<_> = results.findings_by_severity(Severity::Warning).collect();
        if !warnings.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "⚠️  WARNING".yellow().bold(),
                warnings.len()
            ));
            for finding in warnings {
                output.push_str(&self.format_finding(finding));
            }
            output.push('\n');
        }

        output
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut output = format!(
            "  {} [{}] {}\n",
            "•".dimmed(),
            finding.kind().as_str().cyan(),
            finding.description()
        );

        if !finding.locator().is_empty() {
            output.push_str(&format!(
                "    {} {}\n",
                "└─".dimmed(),
                finding.locator().dimmed()
            ));
        }
        output.push_str(&format!(
            "    {} {}\n",
            "→".dimmed(),
            finding.suggestion().dimmed()
        ));

        output
    }

    fn format_summary(&self, results: &ScanResults) -> String {
        let summary = results.summary();
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        output.push_str(&format!(
            "Total: {} │ Critical: {} │ Warnings: {}\n",
            summary.total.to_string().bold(),
            summary.critical.to_string().red().bold(),
            summary.warning.to_string().yellow().bold()
        ));

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, results: &ScanResults) -> Result<String, A11yLensError> {
        let mut output = String::new();

        output.push_str(&self.format_header(&results.source));
        output.push_str(&self.format_findings(results));
        output.push_str(&self.format_summary(results));

        Ok(output)
    }
}
