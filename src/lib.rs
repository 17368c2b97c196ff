//! a11ylens Library
//!
//! This crate inspects HTML documents for common accessibility defects
//! (missing alt text, skipped heading levels, low contrast, unlabeled form
//! controls, positive tabindex, unsupported ARIA roles) and reports them as
//! findings with a severity summary.
//!
//! ```rust
//! use a11ylens::dom::DomTree;
//! use a11ylens::rules::DocumentAnalyzer;
//!
//! let tree = DomTree::parse_html("<body><img src=\"logo.png\"><h1>Hi</h1><h3>Oops</h3></body>");
//! let mut analyzer = DocumentAnalyzer::new();
//! let findings = analyzer.analyze(&tree);
//! assert_eq!(findings.len(), 2);
//!
//! let summary = analyzer.summarize();
//! assert_eq!((summary.critical, summary.warning), (1, 1));
//! ```

pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod highlight;
pub mod rules;
pub mod transport;

pub use cli::exit_codes;
pub use error::A11yLensError;
