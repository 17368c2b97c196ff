//! Keyboard navigation rule

use crate::dom::{Document, NodeQuery};
use crate::rules::engine::RuleCheck;
use crate::rules::results::{Finding, IssueKind};

const INTERACTIVE_TAGS: &[&str] = &["button", "a", "input", "textarea", "select"];

/// Flags interactive elements with a positive `tabindex`, which pulls them
/// ahead of the natural tab order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardRule;

/// Leading integer of an attribute value, the way browsers read `tabindex`:
/// surrounding whitespace and an optional sign, then digits. Trailing junk
/// after the digits is ignored; no digits at all means no value.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // saturate rather than overflow on absurd values
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

impl RuleCheck for KeyboardRule {
    fn kind(&self) -> IssueKind {
        IssueKind::TabindexIssue
    }

    fn run(&self, document: &dyn Document) -> Vec<Finding> {
        document
            .query(&NodeQuery::tags(INTERACTIVE_TAGS))
            .into_iter()
            .filter(|element| {
                document
                    .attribute(*element, "tabindex")
                    .and_then(parse_leading_int)
                    .is_some_and(|tab_index| tab_index > 0)
            })
            .map(|element| {
                Finding::new(IssueKind::TabindexIssue, element)
                    .with_locator(document.describe(element))
            })
            .collect()
    }
}
