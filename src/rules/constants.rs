//! Rule names, accepted ARIA roles and validation helpers

use colored::Colorize;

/// Valid rule names for --only and --skip options
pub const VALID_RULES: &[&str] = &[
    "missing-alt-text",
    "heading-structure",
    "color-contrast",
    "missing-form-label",
    "tabindex-issue",
    "invalid-aria-role",
];

/// Roles accepted by the ARIA role rule
pub const VALID_ARIA_ROLES: &[&str] = &[
    "button", "link", "menu", "menuitem", "tab", "tabpanel", "dialog", "alert",
];

/// Check if a rule name is valid
pub fn is_valid_rule(name: &str) -> bool {
    VALID_RULES.contains(&name)
}

/// Check if a role is in the accepted list (case-sensitive)
pub fn is_valid_aria_role(role: &str) -> bool {
    VALID_ARIA_ROLES.contains(&role)
}

/// Filter a list of rule names, returning only valid ones and printing warnings for invalid ones
pub fn filter_valid_rules(rules: Vec<String>) -> Vec<String> {
    let mut valid = Vec::new();
    for rule in rules {
        if is_valid_rule(&rule) {
            valid.push(rule);
        } else {
            eprintln!(
                "{} Unknown rule '{}' ignored. Valid rules: {}",
                "Warning:".yellow(),
                rule.cyan(),
                VALID_RULES.join(", ").dimmed()
            );
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::IssueKind;

    #[test]
    fn test_valid_rules_match_issue_kinds() {
        let kinds: Vec<_> = IssueKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(VALID_RULES, kinds.as_slice());
    }

    #[test]
    fn test_is_valid_rule() {
        assert!(is_valid_rule("missing-alt-text"));
        assert!(is_valid_rule("invalid-aria-role"));
        assert!(!is_valid_rule("alt-text"));
        assert!(!is_valid_rule("MISSING-ALT-TEXT"));
        assert!(!is_valid_rule(""));
    }

    #[test]
    fn test_aria_roles() {
        for role in ["button", "link", "menu", "menuitem", "tab", "tabpanel", "dialog", "alert"] {
            assert!(is_valid_aria_role(role), "{} should be accepted", role);
        }
        assert!(!is_valid_aria_role("navigation"));
        assert!(!is_valid_aria_role("foo"));
        assert!(!is_valid_aria_role("Button"));
    }

    #[test]
    fn test_filter_valid_rules_removes_invalid() {
        let input = vec![
            "missing-alt-text".to_string(),
            "nonsense".to_string(),
            "tabindex-issue".to_string(),
        ];
        let result = filter_valid_rules(input);
        assert_eq!(
            result,
            vec!["missing-alt-text".to_string(), "tabindex-issue".to_string()]
        );
    }

    #[test]
    fn test_filter_valid_rules_empty_input() {
        assert!(filter_valid_rules(Vec::new()).is_empty());
    }
}
