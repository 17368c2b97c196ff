//! Form control labelling rule

use crate::dom::{Document, NodeId, NodeQuery};
use crate::rules::engine::RuleCheck;
use crate::rules::results::{Finding, IssueKind};

const FORM_CONTROL_TAGS: &[&str] = &["input", "textarea", "select"];

/// Flags form controls without an accessible name source: no associated
/// label, no non-empty `aria-label` and no non-empty `aria-labelledby`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormLabelRule;

fn has_accessible_name(document: &dyn Document, control: NodeId) -> bool {
    let non_empty = |name: &str| document.attribute(control, name).is_some_and(|v| !v.is_empty());

    !document.labels(control).is_empty() || non_empty("aria-label") || non_empty("aria-labelledby")
}

impl RuleCheck for FormLabelRule {
    fn kind(&self) -> IssueKind {
        IssueKind::MissingFormLabel
    }

    fn run(&self, document: &dyn Document) -> Vec<Finding> {
        document
            .query(&NodeQuery::tags(FORM_CONTROL_TAGS))
            .into_iter()
            .filter(|control| !has_accessible_name(document, *control))
            .map(|control| {
                Finding::new(IssueKind::MissingFormLabel, control)
                    .with_locator(document.describe(control))
            })
            .collect()
    }
}
