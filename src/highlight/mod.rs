//! # Highlight Overlay
//!
//! Turns findings into overlay records a page-side renderer can draw over
//! the offending nodes. Critical and warning findings get distinct colors.
//!
//! The layer only describes overlays; positioning them on screen is the
//! renderer's job.

use serde::{Deserialize, Serialize};

use crate::dom::NodeId;
use crate::rules::{Finding, Severity};

/// Fill and border colors of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub fill: &'static str,
    pub border: &'static str,
}

impl OverlayStyle {
    /// Style used for a severity
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self {
                fill: "rgba(244, 67, 54, 0.3)",
                border: "#f44336",
            },
            Severity::Warning => Self {
                fill: "rgba(255, 152, 0, 0.3)",
                border: "#ff9800",
            },
        }
    }
}

/// One overlay drawn over a finding's subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Position of the finding in the scan's finding list
    pub index: usize,
    pub subject: NodeId,
    pub locator: String,
    /// Tooltip text
    pub title: String,
    pub severity: Severity,
    pub fill: String,
    pub border: String,
}

impl Highlight {
    fn from_finding(index: usize, finding: &Finding) -> Self {
        let style = OverlayStyle::for_severity(finding.severity());
        Self {
            index,
            subject: finding.subject(),
            locator: finding.locator().to_string(),
            title: finding.title().to_string(),
            severity: finding.severity(),
            fill: style.fill.to_string(),
            border: style.border.to_string(),
        }
    }
}

/// Set of overlays currently shown on a page
#[derive(Debug, Clone, Default)]
pub struct HighlightLayer {
    overlays: Vec<Highlight>,
}

impl HighlightLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current overlays with one per finding
    pub fn highlight(&mut self, findings: &[Finding]) -> &[Highlight] {
        self.remove();
        self.overlays = findings
            .iter()
            .enumerate()
            .map(|(index, finding)| Highlight::from_finding(index, finding))
            .collect();
        tracing::debug!(overlays = self.overlays.len(), "Highlights drawn");
        &self.overlays
    }

    /// Remove every overlay, returning how many were shown
    pub fn remove(&mut self) -> usize {
        let removed = self.overlays.len();
        self.overlays.clear();
        removed
    }

    pub fn overlays(&self) -> &[Highlight] {
        &self.overlays
    }

    pub fn is_active(&self) -> bool {
        !self.overlays.is_empty()
    }
}
