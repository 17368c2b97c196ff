//! Plain-text report export

use super::ReportRenderer;
use crate::error::A11yLensError;
use crate::rules::ScanResults;

/// Uncolored report meant to be saved and shared
pub struct TextReport;

impl TextReport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextReport {
    fn render_report(&self, results: &ScanResults) -> Result<String, A11yLensError> {
        let summary = results.summary();
        let mut report = String::new();

        report.push_str("ACCESSIBILITY ANALYSIS REPORT\n");
        report.push_str("================================\n\n");
        report.push_str(&format!(
            "Total Issues: {}\nCritical Issues: {}\nWarning Issues: {}\n\n",
            summary.total, summary.critical, summary.warning
        ));

        report.push_str("DETAILED ISSUES:\n");
        report.push_str("================\n\n");

        for (index, finding) in results.findings().iter().enumerate() {
            report.push_str(&format!(
                "{}. {}\n   Severity: {}\n   Description: {}\n   Suggestion: {}\n\n",
                index + 1,
                finding.title(),
                finding.severity().as_str().to_uppercase(),
                finding.description(),
                finding.suggestion()
            ));
        }

        Ok(report)
    }
}
