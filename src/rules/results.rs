//! # Analysis Results Structures
//!
//! This module defines the data structures for representing accessibility
//! findings and their summary.
//!
//! ## Overview
//!
//! - [`IssueKind`] - The six defect categories the engine reports
//! - [`Severity`] - Finding severity levels (Critical, Warning)
//! - [`Finding`] - Individual defect tied to the node that triggered it
//! - [`Summary`] - Severity counts derived from a list of findings
//! - [`ScanResults`] - Findings of one scan, tagged with the scanned source
//!
//! ## Examples
//!
//! ```rust
//! use a11ylens::dom::NodeId;
//! use a11ylens::rules::{Finding, IssueKind, Severity, Summary};
//!
//! let findings = vec![
//!     Finding::new(IssueKind::MissingAltText, NodeId(3)),
//!     Finding::new(IssueKind::TabindexIssue, NodeId(8)),
//! ];
//!
//! assert_eq!(findings[0].severity(), Severity::Critical);
//!
//! let summary = Summary::of(&findings);
//! assert_eq!((summary.total, summary.critical, summary.warning), (2, 1, 1));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dom::NodeId;

/// Severity levels for accessibility findings.
///
/// - **Critical** - Blocks access for some users (e.g., unlabeled inputs)
/// - **Warning** - Degrades the experience (e.g., skipped heading levels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" | "error" => Some(Self::Critical),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Lowercase name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of an accessibility defect.
///
/// Each kind has exactly one severity and one fixed wording; see
/// [`IssueKind::severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingAltText,
    HeadingStructure,
    ColorContrast,
    MissingFormLabel,
    TabindexIssue,
    InvalidAriaRole,
}

impl IssueKind {
    /// All kinds, in the order their rule checks run
    pub const ALL: [IssueKind; 6] = [
        IssueKind::MissingAltText,
        IssueKind::HeadingStructure,
        IssueKind::ColorContrast,
        IssueKind::MissingFormLabel,
        IssueKind::TabindexIssue,
        IssueKind::InvalidAriaRole,
    ];

    /// Stable kebab-case name, shared with rule selection and config keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAltText => "missing-alt-text",
            Self::HeadingStructure => "heading-structure",
            Self::ColorContrast => "color-contrast",
            Self::MissingFormLabel => "missing-form-label",
            Self::TabindexIssue => "tabindex-issue",
            Self::InvalidAriaRole => "invalid-aria-role",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Severity is fixed per kind
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingAltText | Self::MissingFormLabel => Severity::Critical,
            Self::HeadingStructure
            | Self::ColorContrast
            | Self::TabindexIssue
            | Self::InvalidAriaRole => Severity::Warning,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingAltText => "Missing Alt Text",
            Self::HeadingStructure => "Heading Structure Issue",
            Self::ColorContrast => "Low Color Contrast",
            Self::MissingFormLabel => "Missing Form Label",
            Self::TabindexIssue => "Positive Tabindex",
            Self::InvalidAriaRole => "Invalid ARIA Role",
        }
    }

    /// Default description. Heading and ARIA findings replace it with one
    /// naming the offending values.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingAltText => "Image lacks alternative text for screen readers",
            Self::HeadingStructure => "Heading levels are skipped",
            Self::ColorContrast => "Text may be difficult to read due to poor contrast",
            Self::MissingFormLabel => "Form input lacks proper labeling",
            Self::TabindexIssue => "Positive tabindex can disrupt keyboard navigation",
            Self::InvalidAriaRole => "Role is not valid or properly used",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::MissingAltText => "Add descriptive alt attribute to image",
            Self::HeadingStructure => "Use proper heading hierarchy (h1, h2, h3, etc.)",
            Self::ColorContrast => "Increase contrast between text and background colors",
            Self::MissingFormLabel => "Add a label element or aria-label attribute",
            Self::TabindexIssue => "Use tabindex=\"0\" or remove tabindex attribute",
            Self::InvalidAriaRole => "Use valid ARIA roles according to WAI-ARIA specification",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accessibility defect.
///
/// The severity always matches [`IssueKind::severity`]; there is no way to
/// build a finding that disagrees with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    kind: IssueKind,

    severity: Severity,

    /// Node that triggered the finding, owned by the inspected document
    subject: NodeId,

    /// Human locator of the subject (e.g. `img#hero`), for presentation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    locator: String,

    title: String,
    description: String,
    suggestion: String,
}

impl Finding {
    /// Create a finding with the kind's fixed wording
    pub fn new(kind: IssueKind, subject: NodeId) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            subject,
            locator: String::new(),
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            suggestion: kind.suggestion().to_string(),
        }
    }

    /// Set the subject locator
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = locator.into();
        self
    }

    /// Replace the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn subject(&self) -> NodeId {
        self.subject
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }
}

/// Severity counts over a list of findings.
///
/// Always satisfies `total == critical + warning`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
}

impl Summary {
    /// Count findings by severity
    pub fn of(findings: &[Finding]) -> Self {
        findings
            .iter()
            .fold(Self::default(), |mut summary, finding| {
                summary.total += 1;
                match finding.severity() {
                    Severity::Critical => summary.critical += 1,
                    Severity::Warning => summary.warning += 1,
                }
                summary
            })
    }

    /// Check if there are no findings at all
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Findings of one completed scan, detached from the analyzer.
///
/// Renderers and exit-code logic work from this snapshot. The summary is
/// always recomputed from the findings, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResults {
    /// Where the scanned document came from (file path or "-")
    pub source: String,

    findings: Vec<Finding>,
}

impl ScanResults {
    pub fn new(source: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            source: source.into(),
            findings,
        }
    }

    /// Get all findings, in analysis order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Get findings by severity
    pub fn findings_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity() == severity)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.findings)
    }

    /// Check if there are any critical findings
    pub fn has_critical(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity() == Severity::Critical)
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity() == Severity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping_is_fixed() {
        assert_eq!(IssueKind::MissingAltText.severity(), Severity::Critical);
        assert_eq!(IssueKind::MissingFormLabel.severity(), Severity::Critical);
        assert_eq!(IssueKind::HeadingStructure.severity(), Severity::Warning);
        assert_eq!(IssueKind::ColorContrast.severity(), Severity::Warning);
        assert_eq!(IssueKind::TabindexIssue.severity(), Severity::Warning);
        assert_eq!(IssueKind::InvalidAriaRole.severity(), Severity::Warning);
    }

    #[test]
    fn test_finding_new_uses_fixed_wording() {
        let finding = Finding::new(IssueKind::MissingFormLabel, NodeId(4));

        assert_eq!(finding.kind(), IssueKind::MissingFormLabel);
        assert_eq!(finding.severity(), Severity::Critical);
        assert_eq!(finding.subject(), NodeId(4));
        assert_eq!(finding.title(), "Missing Form Label");
        assert_eq!(finding.description(), "Form input lacks proper labeling");
        assert_eq!(
            finding.suggestion(),
            "Add a label element or aria-label attribute"
        );
        assert!(finding.locator().is_empty());
    }

    #[test]
    fn test_finding_builder() {
        let finding = Finding::new(IssueKind::HeadingStructure, NodeId(1))
            .with_locator("h3")
            .with_description("Heading level 3 follows level 1");

        assert_eq!(finding.locator(), "h3");
        assert_eq!(finding.description(), "Heading level 3 follows level 1");
        assert_eq!(finding.severity(), Severity::Warning);
    }

    #[test]
    fn test_issue_kind_names_round_trip() {
        for kind in IssueKind::ALL {
            assert_eq!(IssueKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(IssueKind::from_name("missing-alt"), None);
    }

    #[test]
    fn test_issue_kind_serde_matches_as_str() {
        for kind in IssueKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_finding_serializes_type_field() {
        let finding = Finding::new(IssueKind::TabindexIssue, NodeId(9)).with_locator("a");
        let json = serde_json::to_value(&finding).unwrap();

        assert_eq!(json["type"], "tabindex-issue");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["subject"], 9);
        assert_eq!(json["locator"], "a");
    }

    #[test]
    fn test_severity_from_string() {
        assert_eq!(Severity::from_string("critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_string("ERROR"), Some(Severity::Critical));
        assert_eq!(Severity::from_string("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_string("info"), None);
    }

    #[test]
    fn test_summary_counts() {
        let findings = vec![
            Finding::new(IssueKind::MissingAltText, NodeId(0)),
            Finding::new(IssueKind::MissingFormLabel, NodeId(1)),
            Finding::new(IssueKind::InvalidAriaRole, NodeId(2)),
        ];
        let summary = Summary::of(&findings);

        assert_eq!(
            summary,
            Summary {
                total: 3,
                critical: 2,
                warning: 1
            }
        );
        assert!(!summary.is_clean());
        assert!(Summary::of(&[]).is_clean());
    }

    #[test]
    fn test_scan_results_queries() {
        let results = ScanResults::new(
            "page.html",
            vec![
                Finding::new(IssueKind::HeadingStructure, NodeId(0)),
                Finding::new(IssueKind::MissingAltText, NodeId(1)),
                Finding::new(IssueKind::ColorContrast, NodeId(2)),
            ],
        );

        assert!(results.has_critical());
        assert!(results.has_warnings());
        assert_eq!(results.findings_by_severity(Severity::Warning).count(), 2);
        assert_eq!(results.summary().total, results.findings().len());
    }

    #[test]
    fn test_scan_results_clean() {
        let results = ScanResults::new("-", Vec::new());
        assert!(!results.has_critical());
        assert!(!results.has_warnings());
        assert!(results.summary().is_clean());
    }
}
