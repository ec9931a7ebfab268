pub mod rules;

use shared_types::{Analysis, AtsStatus};

pub use rules::{IssueRule, IssueRuleConfig, Rule, RuleConfig, RuleError, RuleSet, RuleSetConfig};

/// AtsEngine entry point
pub struct AtsEngine {
    rule_set: RuleSet,
}

impl AtsEngine {
    /// Engine with the built-in reference rule table.
    pub fn new() -> Self {
        Self {
            rule_set: RuleSet::default(),
        }
    }

    /// Engine with a caller-supplied rule table.
    pub fn with_rules(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Score extracted resume text against the rule tables.
    ///
    /// Pure and infallible: the same text and rules always produce the same
    /// Analysis, and text that matches nothing is a valid zero score.
    pub fn analyze(&self, text: &str) -> Analysis {
        let mut score: u32 = 0;
        let mut feedback = Vec::new();

        for rule in &self.rule_set.rules {
            if rule.pattern.is_match(text) {
                score += rule.points;
                feedback.push(rule.feedback.clone());
            }
        }

        let mut suggestions = Vec::new();
        for issue in &self.rule_set.issues {
            if issue.pattern.is_match(text) {
                suggestions.push(issue.suggestion.clone());
            }
        }

        let score = score.min(100);
        let status = AtsStatus::from_score(score);

        Analysis {
            score,
            status,
            status_color: status.color(),
            feedback,
            suggestions,
        }
    }
}

impl Default for AtsEngine {
    fn default() -> Self {
        Self::new()
    }
}
