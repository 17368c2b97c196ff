//! Rules module - Accessibility rule checks and the analysis engine

pub mod categories;
pub mod constants;
pub mod contrast;
pub mod engine;
pub mod patterns;
pub mod results;

pub use engine::{DocumentAnalyzer, RuleCheck};
pub use results::{Finding, IssueKind, ScanResults, Severity, Summary};
