//! JSON output formatting

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ReportRenderer;
use crate::error::A11yLensError;
use crate::rules::{Finding, ScanResults, Summary};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    source: &'a str,
    generated_at: DateTime<Utc>,
    summary: Summary,
    issues: &'a [Finding],
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, results: &ScanResults) -> Result<String, A11yLensError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            source: &results.source,
            generated_at: Utc::now(),
            summary: results.summary(),
            issues: results.findings(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;
    use crate::rules::IssueKind;

    fn create_test_results() -> ScanResults {
        ScanResults::new(
            "page.html",
            vec![
                Finding::new(IssueKind::MissingFormLabel, NodeId(3)).with_locator("input#email"),
                Finding::new(IssueKind::InvalidAriaRole, NodeId(7))
                    .with_description("Role \"widget\" is not valid or properly used"),
            ],
        )
    }

    #[test]
    fn test_render_report() {
        let rendered = JsonOutput::new()
            .render_report(&create_test_results())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["source"], "page.html");
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["critical"], 1);
        assert_eq!(json["summary"]["warning"], 1);
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_render_report_issues() {
        let rendered = JsonOutput::new()
            .render_report(&create_test_results())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let issues = json["issues"].as_array().unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["type"], "missing-form-label");
        assert_eq!(issues[0]["locator"], "input#email");
        assert_eq!(issues[0]["subject"], 3);
        assert_eq!(issues[1]["severity"], "warning");
        assert_eq!(
            issues[1]["description"],
            "Role \"widget\" is not valid or properly used"
        );
    }

    #[test]
    fn test_render_empty_report() {
        let results = ScanResults::new("-", Vec::new());
        let rendered = JsonOutput::new().render_report(&results).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["summary"]["total"], 0);
        assert!(json["issues"].as_array().unwrap().is_empty());
    }
}
