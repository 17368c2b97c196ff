//! Color contrast rule

use std::sync::Arc;

use crate::dom::{Document, NodeId, NodeQuery};
use crate::rules::contrast::{ContrastPredicate, PlaceholderContrast};
use crate::rules::engine::RuleCheck;
use crate::rules::patterns::colors::parse_color;
use crate::rules::results::{Finding, IssueKind};

const TEXT_TAGS: &[&str] = &["p", "span", "div", "a", "button", "label"];

/// Canvas color assumed behind a fully transparent ancestry
pub const CANVAS_BACKGROUND: &str = "rgb(255, 255, 255)";

/// Flags text-bearing elements whose text and background colors the
/// configured [`ContrastPredicate`] judges too close.
#[derive(Clone)]
pub struct ContrastRule {
    predicate: Arc<dyn ContrastPredicate>,
}

impl ContrastRule {
    pub fn new(predicate: Arc<dyn ContrastPredicate>) -> Self {
        Self { predicate }
    }
}

impl Default for ContrastRule {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderContrast))
    }
}

impl std::fmt::Debug for ContrastRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContrastRule").finish_non_exhaustive()
    }
}

/// Background actually painted behind `node`: the first ancestor-or-self
/// background that is not fully transparent, else the canvas.
pub fn effective_background(document: &dyn Document, node: NodeId) -> String {
    let mut current = Some(node);

    while let Some(id) = current {
        if let Some(background) = document.computed_style(id, "background-color") {
            let transparent = parse_color(&background).is_some_and(|c| c.is_transparent());
            if !transparent {
                return background;
            }
        }
        current = document.parent(id);
    }

    CANVAS_BACKGROUND.to_string()
}

impl RuleCheck for ContrastRule {
    fn kind(&self) -> IssueKind {
        IssueKind::ColorContrast
    }

    fn run(&self, document: &dyn Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for element in document.query(&NodeQuery::tags(TEXT_TAGS)) {
            let Some(color) = document.computed_style(element, "color") else {
                continue;
            };
            let background = effective_background(document, element);

            if self.predicate.is_low_contrast(&color, &background) {
                findings.push(
                    Finding::new(IssueKind::ColorContrast, element)
                        .with_locator(document.describe(element)),
                );
            }
        }

        findings
    }
}
