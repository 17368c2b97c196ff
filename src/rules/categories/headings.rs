//! Heading hierarchy rule

use crate::dom::{Document, NodeQuery};
use crate::rules::engine::RuleCheck;
use crate::rules::results::{Finding, IssueKind};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Flags headings that jump more than one level deeper than the heading
/// right before them. Going back up (h3 then h1) is never flagged.
///
/// The first heading of the document sets the baseline. With
/// `flag_opening_level` it is instead compared against level 0, so a page
/// opening on an `h3` is reported as skipping from nothing. Starting from
/// level 0 is not the default because it would also flag a page that opens
/// on `h2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRule {
    flag_opening_level: bool,
}

impl HeadingRule {
    pub fn new(flag_opening_level: bool) -> Self {
        Self { flag_opening_level }
    }
}

/// Numeric level of an `h1`..`h6` tag
fn heading_level(tag: &str) -> Option<u8> {
    tag.strip_prefix('h')?
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

impl RuleCheck for HeadingRule {
    fn kind(&self) -> IssueKind {
        IssueKind::HeadingStructure
    }

    fn run(&self, document: &dyn Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut previous_level: Option<u8> = self.flag_opening_level.then_some(0);

        for heading in document.query(&NodeQuery::tags(HEADING_TAGS)) {
            let Some(level) = document.tag_name(heading).and_then(heading_level) else {
                continue;
            };
            let previous = previous_level.unwrap_or(level);

            if level > previous + 1 {
                findings.push(
                    Finding::new(IssueKind::HeadingStructure, heading)
                        .with_locator(document.describe(heading))
                        .with_description(format!(
                            "Heading level {} follows level {}",
                            level, previous
                        )),
                );
            }

            previous_level = Some(level);
        }

        findings
    }
}
