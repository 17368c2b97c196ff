//! Image alternative text rule

use crate::dom::{Document, NodeQuery};
use crate::rules::engine::RuleCheck;
use crate::rules::results::{Finding, IssueKind};

const IMAGE_TAGS: &[&str] = &["img"];

/// Flags images whose `alt` attribute is absent or blank.
///
/// An explicitly empty `alt=""` is flagged too unless the rule was built
/// with `flag_empty_alt = false`, in which case it is read as a decorative
/// image. Whitespace-only alt text always flags.
#[derive(Debug, Clone, Copy)]
pub struct AltTextRule {
    flag_empty_alt: bool,
}

impl AltTextRule {
    pub fn new(flag_empty_alt: bool) -> Self {
        Self { flag_empty_alt }
    }

    fn lacks_alt(&self, alt: Option<&str>) -> bool {
        match alt {
            None => true,
            Some("") => self.flag_empty_alt,
            Some(alt) => alt.trim().is_empty(),
        }
    }
}

impl Default for AltTextRule {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RuleCheck for AltTextRule {
    fn kind(&self) -> IssueKind {
        IssueKind::MissingAltText
    }

    fn run(&self, document: &dyn Document) -> Vec<Finding> {
        document
            .query(&NodeQuery::tags(IMAGE_TAGS))
            .into_iter()
            .filter(|img| self.lacks_alt(document.attribute(*img, "alt")))
            .map(|img| {
                Finding::new(IssueKind::MissingAltText, img).with_locator(document.describe(img))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DomTree;
    use crate::rules::results::Severity;

    fn images(alts: &[Option<&str>]) -> DomTree {
        let mut tree = DomTree::new();
        let body = tree.append(None, "body", &[]);
        for alt in alts.iter().copied() {
            match alt {
                Some(alt) => tree.append(Some(body), "img", &[("src", "x.png"), ("alt", alt)]),
                None => tree.append(Some(body), "img", &[("src", "x.png")]),
            };
        }
        tree
    }

    #[test]
    fn test_missing_and_empty_alt_flag() {
        let tree = images(&[None, Some(""), Some("x")]);
        let findings = AltTextRule::default().run(&tree);

        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.kind() == IssueKind::MissingAltText && f.severity() == Severity::Critical));
    }

    #[test]
    fn test_whitespace_alt_flags() {
        let tree = images(&[Some("   \t")]);
        assert_eq!(AltTextRule::default().run(&tree).len(), 1);
    }

    #[test]
    fn test_descriptive_alt_passes() {
        let tree = images(&[Some("A red bicycle"), Some(" x ")]);
        assert!(AltTextRule::default().run(&tree).is_empty());
    }

    #[test]
    fn test_decorative_empty_alt_when_allowed() {
        let tree = images(&[Some(""), Some(" "), None]);
        let findings = AltTextRule::new(false).run(&tree);
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_findings_follow_document_order() {
        let tree = images(&[None, Some("ok"), None]);
        let findings = AltTextRule::default().run(&tree);
        assert!(findings[0].subject() < findings[1].subject());
        assert_eq!(findings[0].locator(), "img");
    }

    #[test]
    fn test_no_images() {
        let tree = DomTree::new();
        assert!(AltTextRule::default().run(&tree).is_empty());
    }
}
