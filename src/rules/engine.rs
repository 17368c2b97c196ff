//! Document analysis engine

use std::sync::Arc;

use tracing::{debug, info, span, Level};

use super::categories::{
    alt_text::AltTextRule, aria::AriaRoleRule, contrast::ContrastRule, forms::FormLabelRule,
    headings::HeadingRule, keyboard::KeyboardRule,
};
use super::contrast::ContrastPredicate;
use super::results::{Finding, IssueKind, Summary};
use crate::config::Config;
use crate::dom::Document;

/// Trait for rule checks.
///
/// A check is a pure scan of the document. It must return a (possibly
/// empty) list for any document and report findings in document order.
pub trait RuleCheck: Send + Sync {
    /// Kind of finding this check produces
    fn kind(&self) -> IssueKind;

    /// Rule name used for selection and configuration
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Scan the document
    fn run(&self, document: &dyn Document) -> Vec<Finding>;
}

/// Accessibility analysis engine.
///
/// Owns the findings of the most recent [`analyze`](Self::analyze) call.
/// Each call starts from an empty list, so nothing leaks between scans.
pub struct DocumentAnalyzer {
    checks: Vec<Box<dyn RuleCheck>>,
    findings: Vec<Finding>,
    only_rules: Option<Vec<String>>,
    skip_rules: Option<Vec<String>>,
}

impl DocumentAnalyzer {
    /// Create an analyzer with the reference rule set
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create an analyzer following a configuration
    pub fn from_config(config: &Config) -> Self {
        let checks: Vec<Box<dyn RuleCheck>> = vec![
            Box::new(AltTextRule::new(config.alt_text.flag_empty_alt)),
            Box::new(HeadingRule::new(config.headings.flag_opening_level)),
            Box::new(ContrastRule::new(config.contrast_predicate())),
            Box::new(FormLabelRule),
            Box::new(KeyboardRule),
            Box::new(AriaRoleRule),
        ];

        let disabled: Vec<String> = checks
            .iter()
            .map(|check| check.name())
            .filter(|name| !config.is_rule_enabled(name))
            .map(str::to_string)
            .collect();

        Self {
            checks,
            findings: Vec::new(),
            only_rules: None,
            skip_rules: (!disabled.is_empty()).then_some(disabled),
        }
    }

    /// Replace the contrast judgment, keeping every other check
    pub fn with_contrast_predicate(mut self, predicate: Arc<dyn ContrastPredicate>) -> Self {
        for check in self.checks.iter_mut() {
            if check.kind() == IssueKind::ColorContrast {
                *check = Box::new(ContrastRule::new(Arc::clone(&predicate)));
            }
        }
        self
    }

    /// Set rules to exclusively run
    pub fn set_only_rules(&mut self, rules: Vec<String>) {
        self.only_rules = Some(rules);
    }

    /// Set rules to skip, in addition to those disabled by configuration
    pub fn set_skip_rules(&mut self, rules: Vec<String>) {
        self.skip_rules
            .get_or_insert_with(Vec::new)
            .extend(rules);
    }

    /// Check if a rule should be run
    fn should_run_rule(&self, rule: &str) -> bool {
        if let Some(only) = &self.only_rules {
            if !only.iter().any(|r| r == rule) {
                return false;
            }
        }

        if let Some(skip) = &self.skip_rules {
            return !skip.iter().any(|r| r == rule);
        }

        true
    }

    /// Run every enabled check against `document` and return the findings.
    ///
    /// Checks run in a fixed order (alt text, headings, contrast, form labels,
    /// keyboard, ARIA) and each appends in document order.
    pub fn analyze(&mut self, document: &dyn Document) -> &[Finding] {
        self.findings.clear();

        for check in &self.checks {
            let rule = check.name();

            if !self.should_run_rule(rule) {
                debug!(rule, "Skipping rule");
                continue;
            }

            let span = span!(Level::DEBUG, "rule", rule);
            let _guard = span.enter();

            let findings = check.run(document);
            debug!(rule, findings_count = findings.len(), "Rule completed");
            self.findings.extend(findings);
        }

        let summary = self.summarize();
        info!(
            "Analysis complete: {} critical, {} warnings",
            summary.critical, summary.warning
        );

        &self.findings
    }

    /// Findings of the most recent analysis
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Severity counts over the current findings
    pub fn summarize(&self) -> Summary {
        Summary::of(&self.findings)
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContrastMode, Preset, RuleConfig};
    use crate::dom::DomTree;
    use crate::rules::results::Severity;
    use pretty_assertions::assert_eq;

    fn fixture() -> DomTree {
        let mut tree = DomTree::new();
        let body = tree.append(None, "body", &[]);
        tree.append(Some(body), "h1", &[]);
        tree.append(Some(body), "input", &[("type", "text"), ("tabindex", "4")]);
        tree.append(Some(body), "img", &[("src", "a.png")]);
        tree.append(Some(body), "h3", &[]);
        tree.append(Some(body), "div", &[("role", "widget")]);
        tree
    }

    fn kinds(findings: &[Finding]) -> Vec<IssueKind> {
        findings.iter().map(|f| f.kind()).collect()
    }

    #[test]
    fn test_rules_run_in_fixed_order() {
        let tree = fixture();
        let mut analyzer = DocumentAnalyzer::new();

        assert_eq!(
            kinds(analyzer.analyze(&tree)),
            vec![
                IssueKind::MissingAltText,
                IssueKind::HeadingStructure,
                IssueKind::MissingFormLabel,
                IssueKind::TabindexIssue,
                IssueKind::InvalidAriaRole,
            ]
        );
    }

    #[test]
    fn test_summary_matches_findings() {
        let tree = fixture();
        let mut analyzer = DocumentAnalyzer::new();
        let total = analyzer.analyze(&tree).len();
        let summary = analyzer.summarize();

        assert_eq!(summary.total, total);
        assert_eq!(summary.critical + summary.warning, summary.total);
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.warning, 3);
    }

    #[test]
    fn test_findings_reset_between_calls() {
        let tree = fixture();
        let mut analyzer = DocumentAnalyzer::new();

        let first = analyzer.analyze(&tree).to_vec();
        let second = analyzer.analyze(&tree).to_vec();
        assert_eq!(first, second);

        let clean = DomTree::new();
        assert!(analyzer.analyze(&clean).is_empty());
        assert!(analyzer.summarize().is_clean());
    }

    #[test]
    fn test_one_node_in_several_findings() {
        let mut tree = DomTree::new();
        let input = tree.append(None, "input", &[("tabindex", "1")]);
        let mut analyzer = DocumentAnalyzer::new();

        let findings = analyzer.analyze(&tree);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.subject() == input));
    }

    #[test]
    fn test_summarize_before_analyze() {
        let analyzer = DocumentAnalyzer::new();
        assert_eq!(analyzer.summarize(), Summary::default());
        assert!(analyzer.findings().is_empty());
    }

    #[test]
    fn test_only_rules() {
        let tree = fixture();
        let mut analyzer = DocumentAnalyzer::new();
        analyzer.set_only_rules(vec!["tabindex-issue".to_string()]);

        assert_eq!(kinds(analyzer.analyze(&tree)), vec![IssueKind::TabindexIssue]);
    }

    #[test]
    fn test_skip_rules() {
        let tree = fixture();
        let mut analyzer = DocumentAnalyzer::new();
        analyzer.set_skip_rules(vec![
            "missing-alt-text".to_string(),
            "missing-form-label".to_string(),
        ]);

        let findings = analyzer.analyze(&tree);
        assert!(findings.iter().all(|f| f.severity() == Severity::Warning));
        assert_eq!(findings.len(), 3);
    }

    #[test]
    fn test_config_disables_rule() {
        let mut config = Config::default();
        config
            .rules
            .insert("heading-structure".to_string(), RuleConfig { enabled: false });

        let tree = fixture();
        let mut analyzer = DocumentAnalyzer::from_config(&config);
        assert!(!kinds(analyzer.analyze(&tree)).contains(&IssueKind::HeadingStructure));
    }

    #[test]
    fn test_only_does_not_revive_disabled_rule() {
        let mut config = Config::default();
        config
            .rules
            .insert("tabindex-issue".to_string(), RuleConfig { enabled: false });

        let mut analyzer = DocumentAnalyzer::from_config(&config);
        analyzer.set_only_rules(vec!["tabindex-issue".to_string()]);
        assert!(analyzer.analyze(&fixture()).is_empty());
    }

    #[test]
    fn test_wcag_preset_reports_contrast() {
        let mut tree = DomTree::new();
        let body = tree.append(None, "body", &[("style", "background: white")]);
        tree.append(Some(body), "p", &[("style", "color: #f0f0f0")]);

        let mut baseline = DocumentAnalyzer::new();
        assert!(baseline.analyze(&tree).is_empty());

        let config = Config::from_preset(Preset::WcagAa);
        assert_eq!(config.contrast.mode, ContrastMode::Wcag);
        let mut wcag = DocumentAnalyzer::from_config(&config);
        assert_eq!(kinds(wcag.analyze(&tree)), vec![IssueKind::ColorContrast]);
    }

    #[test]
    fn test_injected_contrast_predicate() {
        let mut tree = DomTree::new();
        tree.append(None, "span", &[]);

        let always = |_: &str, _: &str| true;
        let mut analyzer = DocumentAnalyzer::new().with_contrast_predicate(Arc::new(always));
        assert_eq!(kinds(analyzer.analyze(&tree)), vec![IssueKind::ColorContrast]);
    }
}
