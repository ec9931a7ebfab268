//! Rule tables for ATS compatibility scoring.
//!
//! Rules are data, not code: a `RuleSetConfig` is a plain serde structure
//! (loadable from JSON) that compiles into a `RuleSet` of case-insensitive
//! regexes. The built-in table awards exactly 100 points across 8 rules.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Source representation of a scoring rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub points: u32,
    pub feedback: String,
}

/// Source representation of an advisory-only rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRuleConfig {
    pub name: String,
    pub pattern: String,
    pub suggestion: String,
}

/// A complete rule table in its serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub rules: Vec<RuleConfig>,
    #[serde(default)]
    pub issues: Vec<IssueRuleConfig>,
}

/// A compiled scoring rule. Matching is case-insensitive and independent
/// per rule; multiple rules may match the same substring.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub pattern: Regex,
    pub points: u32,
    pub feedback: String,
}

/// A compiled advisory rule. Contributes no points, only a suggestion.
#[derive(Debug, Clone)]
pub struct IssueRule {
    pub name: String,
    pub pattern: Regex,
    pub suggestion: String,
}

/// Immutable, compiled rule tables. Built once at startup.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub issues: Vec<IssueRule>,
}

impl RuleSet {
    /// Compile a rule table from its source representation.
    pub fn compile(config: RuleSetConfig) -> Result<Self, RuleError> {
        let rules = config
            .rules
            .into_iter()
            .map(|r| {
                Ok(Rule {
                    pattern: compile_pattern(&r.name, &r.pattern)?,
                    name: r.name,
                    points: r.points,
                    feedback: r.feedback,
                })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        let issues = config
            .issues
            .into_iter()
            .map(|r| {
                Ok(IssueRule {
                    pattern: compile_pattern(&r.name, &r.pattern)?,
                    name: r.name,
                    suggestion: r.suggestion,
                })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        Ok(Self { rules, issues })
    }

    /// Total points available if every rule matched (before clamping).
    pub fn max_points(&self) -> u32 {
        self.rules.iter().map(|r| r.points).sum()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        DEFAULT_RULE_SET.clone()
    }
}

fn compile_pattern(name: &str, pattern: &str) -> Result<Regex, RuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| RuleError::InvalidPattern {
            name: name.to_string(),
            source,
        })
}

/// The reference rule table: ATS-friendly resume elements worth 100 points
/// total, plus two advisory checks for ATS-hostile formatting.
pub fn default_config() -> RuleSetConfig {
    RuleSetConfig {
        rules: vec![
            RuleConfig {
                name: "Contact Information".to_string(),
                pattern: r"email|phone|address|linkedin|github".to_string(),
                points: 10,
                feedback: "Contact information found".to_string(),
            },
            RuleConfig {
                name: "Professional Summary".to_string(),
                pattern: r"summary|objective|profile|overview".to_string(),
                points: 15,
                feedback: "Professional summary/objective found".to_string(),
            },
            RuleConfig {
                name: "Work Experience".to_string(),
                pattern: r"experience|work|employment|job".to_string(),
                points: 20,
                feedback: "Work experience section found".to_string(),
            },
            RuleConfig {
                name: "Education".to_string(),
                pattern: r"education|degree|university|college|school".to_string(),
                points: 10,
                feedback: "Education section found".to_string(),
            },
            RuleConfig {
                name: "Skills".to_string(),
                // Stem form so "skills" and "skilled" both register
                pattern: r"skill|technologies|programming|languages".to_string(),
                points: 15,
                feedback: "Skills section found".to_string(),
            },
            RuleConfig {
                name: "Keywords".to_string(),
                pattern: r"leadership|management|project|team|develop|design|analyze|implement"
                    .to_string(),
                points: 10,
                feedback: "Action keywords found".to_string(),
            },
            RuleConfig {
                name: "Formatting".to_string(),
                pattern: r"bullet|list|section|header".to_string(),
                points: 10,
                feedback: "Good formatting detected".to_string(),
            },
            RuleConfig {
                name: "Quantifiable Results".to_string(),
                pattern: r"\d+%|\d+x|\$\d+|\d+ people|\d+ projects".to_string(),
                points: 10,
                feedback: "Quantifiable results found".to_string(),
            },
        ],
        issues: vec![
            IssueRuleConfig {
                name: "Graphics".to_string(),
                pattern: r"graphics|images|tables|charts".to_string(),
                suggestion: "Consider using text-based formatting instead of graphics".to_string(),
            },
            IssueRuleConfig {
                name: "Complex Formatting".to_string(),
                pattern: r"font|color|styling".to_string(),
                suggestion: "Use simple, clean formatting for better ATS compatibility".to_string(),
            },
        ],
    }
}

lazy_static! {
    static ref DEFAULT_RULE_SET: RuleSet =
        RuleSet::compile(default_config()).expect("built-in rule table must compile");
}
