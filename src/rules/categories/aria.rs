//! ARIA role rule

use crate::dom::{Document, NodeQuery};
use crate::rules::constants::is_valid_aria_role;
use crate::rules::engine::RuleCheck;
use crate::rules::results::{Finding, IssueKind};

const ARIA_ATTRIBUTES: &[&str] = &["role", "aria-label", "aria-labelledby", "aria-describedby"];

/// Flags elements whose `role` is not in the accepted role list.
///
/// Only role names are validated. Naming attributes without a role never
/// flag, and an empty `role=""` counts as no role.
#[derive(Debug, Clone, Copy, Default)]
pub struct AriaRoleRule;

impl RuleCheck for AriaRoleRule {
    fn kind(&self) -> IssueKind {
        IssueKind::InvalidAriaRole
    }

    fn run(&self, document: &dyn Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for element in document.query(&NodeQuery::attributes(ARIA_ATTRIBUTES)) {
            let Some(role) = document.attribute(element, "role").filter(|r| !r.is_empty()) else {
                continue;
            };

            if !is_valid_aria_role(role) {
                findings.push(
                    Finding::new(IssueKind::InvalidAriaRole, element)
                        .with_locator(document.describe(element))
                        .with_description(format!(
                            "Role \"{}\" is not valid or properly used",
                            role
                        )),
                );
            }
        }

        findings
    }
}
