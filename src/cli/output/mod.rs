//! Output formatting module for CLI

pub mod json;
mod terminal;
mod text;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;
pub use text::TextReport;

use crate::error::A11yLensError;
use crate::rules::ScanResults;

/// Trait for rendering scan results
pub trait ReportRenderer {
    fn render_report(&self, results: &ScanResults) -> Result<String, A11yLensError>;
}
