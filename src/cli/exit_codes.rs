//! Exit codes for the CLI
//!
//! Standard exit codes used by a11ylens for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Scan completed, no findings |
//! | 1 | `CRITICAL_ISSUES` | Critical issues | Image without alt, unlabeled input |
//! | 2 | `WARNINGS` | Warnings | Skipped heading level, positive tabindex |
//! | 3 | `ERROR` | Runtime error | Document not found, invalid config |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Unknown preset |

use crate::error::{A11yLensError, ConfigError};
use crate::rules::ScanResults;

/// Success - no findings or operation completed successfully.
pub const SUCCESS: i32 = 0;

/// At least one critical finding.
pub const CRITICAL_ISSUES: i32 = 1;

/// Warning findings only.
pub const WARNINGS: i32 = 2;

/// Runtime error (document unreadable, invalid configuration, I/O failure).
pub const ERROR: i32 = 3;

/// Invalid arguments (unknown preset, etc.).
pub const INVALID_ARGS: i32 = 4;

/// Exit code for a completed scan
pub fn for_results(results: &ScanResults) -> i32 {
    if results.has_critical() {
        CRITICAL_ISSUES
    } else if results.has_warnings() {
        WARNINGS
    } else {
        SUCCESS
    }
}

/// Exit code for a failed command
pub fn for_error(error: &A11yLensError) -> i32 {
    match error {
        A11yLensError::Config(ConfigError::UnknownPreset(_)) => INVALID_ARGS,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;
    use crate::rules::{Finding, IssueKind};

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, CRITICAL_ISSUES, WARNINGS, ERROR, INVALID_ARGS];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(
                    codes[i], codes[j],
                    "Exit codes should be unique: {} and {} are both {}",
                    i, j, codes[i]
                );
            }
        }
    }

    #[test]
    fn test_for_results() {
        let clean = ScanResults::new("-", vec![]);
        assert_eq!(for_results(&clean), SUCCESS);

        let warnings = ScanResults::new(
            "-",
            vec![Finding::new(IssueKind::HeadingStructure, NodeId(0))],
        );
        assert_eq!(for_results(&warnings), WARNINGS);

        let critical = ScanResults::new(
            "-",
            vec![
                Finding::new(IssueKind::HeadingStructure, NodeId(0)),
                Finding::new(IssueKind::MissingFormLabel, NodeId(1)),
            ],
        );
        assert_eq!(for_results(&critical), CRITICAL_ISSUES);
    }

    #[test]
    fn test_for_error() {
        let preset = A11yLensError::from(ConfigError::UnknownPreset("x".to_string()));
        assert_eq!(for_error(&preset), INVALID_ARGS);

        let exists = A11yLensError::from(ConfigError::AlreadyExists("x".to_string()));
        assert_eq!(for_error(&exists), ERROR);
    }
}
