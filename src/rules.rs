//! Literal substitution rules applied to the docs index.
//!
//! Matching is plain substring matching, never a pattern: every
//! non-overlapping occurrence is replaced, scanning left to right.

use serde::Serialize;
use tracing::debug;

/// A literal search string and its replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionRule {
    pub search: &'static str,
    pub replace: &'static str,
}

/// Rules for the generated docs index, in application order
pub const INDEX_RULES: [SubstitutionRule; 2] = [
    // Image references copied from the repository root
    SubstitutionRule {
        search: "doc/docs/image/",
        replace: "image/",
    },
    SubstitutionRule {
        search: "/CHANGELOG.md",
        replace: "change_log.md/",
    },
];

impl SubstitutionRule {
    pub const fn new(search: &'static str, replace: &'static str) -> Self {
        Self { search, replace }
    }

    /// Replace every occurrence of the search literal, returning the new
    /// buffer and how many occurrences were replaced.
    pub fn apply(&self, content: &str) -> (String, usize) {
        if self.search.is_empty() {
            return (content.to_string(), 0);
        }

        let count = content.matches(self.search).count();
        if count == 0 {
            return (content.to_string(), 0);
        }

        (content.replace(self.search, self.replace), count)
    }
}

/// Replacement count for a single rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule: SubstitutionRule,
    pub replacements: usize,
}

/// Content after all rules ran, with per-rule counts in application order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub content: String,
    pub outcomes: Vec<RuleOutcome>,
}

/// Apply `rules` in slice order, each to the output of the previous one
pub fn apply_rules(content: &str, rules: &[SubstitutionRule]) -> Transformed {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, replacements) = rule.apply(&current);
        debug!(
            "Rule '{}' -> '{}' replaced {} occurrence(s)",
            rule.search, rule.replace, replacements
        );
        current = next;
        outcomes.push(RuleOutcome {
            rule: *rule,
            replacements,
        });
    }

    Transformed {
        content: current,
        outcomes,
    }
}

/// Apply the docs index rules
pub fn rewrite_index(content: &str) -> Transformed {
    apply_rules(content, &INDEX_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_both_literals() {
        let input = "![x](doc/docs/image/foo.png) see /CHANGELOG.md for history";
        let result = rewrite_index(input);
        assert_eq!(
            result.content,
            "![x](image/foo.png) see change_log.md/ for history"
        );
        assert_eq!(result.outcomes[0].replacements, 1);
        assert_eq!(result.outcomes[1].replacements, 1);
    }

    #[test]
    fn test_content_without_literals_is_unchanged() {
        let input = "# Title\nNo links here.";
        let result = rewrite_index(input);
        assert_eq!(result.content, input);
        assert!(result.outcomes.iter().all(|o| o.replacements == 0));
    }

    #[test]
    fn test_every_image_occurrence_is_replaced() {
        let input = "![a](doc/docs/image/a.png)\n![b](doc/docs/image/b.png)\ndoc/docs/image/";
        let result = rewrite_index(input);
        assert!(!result.content.contains("doc/docs/image/"));
        assert_eq!(result.content, "![a](image/a.png)\n![b](image/b.png)\nimage/");
        assert_eq!(result.outcomes[0].replacements, 3);
        assert_eq!(result.outcomes[1].replacements, 0);
    }

    #[test]
    fn test_changelog_links_are_replaced() {
        let input = "[log](https://github.com/org/repo/blob/main/CHANGELOG.md) and [again](/CHANGELOG.md)";
        let result = rewrite_index(input);
        assert_eq!(
            result.content,
            "[log](https://github.com/org/repo/blob/mainchange_log.md/) and [again](change_log.md/)"
        );
        assert_eq!(result.outcomes[1].replacements, 2);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let input = "doc/docs/image/x.png /CHANGELOG.md doc/docs/image/y.png";
        let once = rewrite_index(input).content;
        let twice = rewrite_index(&once);
        assert_eq!(twice.content, once);
        assert!(twice.outcomes.iter().all(|o| o.replacements == 0));
    }

    #[test]
    fn test_outcomes_follow_rule_order() {
        let result = rewrite_index("");
        let searches: Vec<_> = result.outcomes.iter().map(|o| o.rule.search).collect();
        assert_eq!(searches, vec!["doc/docs/image/", "/CHANGELOG.md"]);
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let rules = [SubstitutionRule::new("a", "b"), SubstitutionRule::new("b", "c")];
        let result = apply_rules("ab", &rules);
        assert_eq!(result.content, "cc");
        assert_eq!(result.outcomes[0].replacements, 1);
        assert_eq!(result.outcomes[1].replacements, 2);
    }

    #[test]
    fn test_matches_are_non_overlapping() {
        let rule = SubstitutionRule::new("aa", "b");
        assert_eq!(rule.apply("aaa"), ("ba".to_string(), 1));
    }

    #[test]
    fn test_empty_search_is_noop() {
        let rule = SubstitutionRule::new("", "x");
        assert_eq!(rule.apply("abc"), ("abc".to_string(), 0));
    }

    #[test]
    fn test_literals_are_not_patterns() {
        let rule = SubstitutionRule::new("/CHANGELOG.md", "change_log.md/");
        assert_eq!(rule.apply("/CHANGELOGxmd").1, 0);
    }
}
