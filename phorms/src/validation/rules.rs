//! Validation rules for string values.

use log::trace;

use super::result::ValidationOutcome;
use crate::error::FieldBuildError;
use crate::utils::text::char_len;

/// Type alias for rule predicate closures.
type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single named check with the message reported when it fails.
pub struct Rule {
    name: &'static str,
    check: Predicate,
    message: String,
    /// Whether the rule runs against an empty value.
    applies_to_empty: bool,
}

impl Rule {
    /// Create a custom rule. Custom rules run against every value, including
    /// the empty string.
    pub fn new<F>(f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: "custom",
            check: Box::new(f),
            message: msg.into(),
            applies_to_empty: true,
        }
    }

    fn builtin<F>(name: &'static str, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            check: Box::new(f),
            message: msg.into(),
            applies_to_empty: false,
        }
    }

    /// Require the value to be non-blank.
    pub fn required(msg: impl Into<String>) -> Self {
        Self {
            applies_to_empty: true,
            ..Self::builtin("required", |v| !v.trim().is_empty(), msg)
        }
    }

    /// Require minimum length (in characters).
    pub fn min_length(min: usize, msg: impl Into<String>) -> Self {
        Self::builtin("min_length", move |v| char_len(v) >= min, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(pattern: &str, msg: impl Into<String>) -> Result<Self, FieldBuildError> {
        let re = regex::Regex::new(pattern)
            .map_err(|e| FieldBuildError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self::builtin("pattern", move |v| re.is_match(v), msg))
    }

    /// Require a valid email address.
    pub fn email(msg: impl Into<String>) -> Self {
        Self::builtin("email", email_address::EmailAddress::is_valid, msg)
    }

    /// Require the value to equal another value.
    pub fn equals(other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        Self::builtin("equals", move |v| v == other, msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        Self::builtin("contains", move |v| v.contains(&substr), msg)
    }

    /// Check a value, returning the failure message if it doesn't pass.
    ///
    /// Empty values pass every rule except `required` and custom rules; use
    /// `required` to reject them.
    pub fn check(&self, value: &str) -> Result<(), &str> {
        if value.is_empty() && !self.applies_to_empty {
            return Ok(());
        }
        if (self.check)(value) {
            Ok(())
        } else {
            Err(self.message.as_str())
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of rules.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Rules are evaluated in insertion order.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `value`, collecting all failures.
    pub fn evaluate(&self, value: &str) -> ValidationOutcome {
        let mut messages = Vec::new();
        for rule in &self.rules {
            if let Err(msg) = rule.check(value) {
                trace!("rule '{}' failed: {}", rule.name, msg);
                messages.push(msg.to_string());
            }
        }
        ValidationOutcome::from_messages(messages)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_skips_builtin_rules() {
        let rule = Rule::min_length(3, "too short");
        assert_eq!(rule.check(""), Ok(()));
        assert_eq!(rule.check("ab"), Err("too short"));
    }

    #[test]
    fn test_required_rejects_blank() {
        let rule = Rule::required("required");
        assert_eq!(rule.check("   "), Err("required"));
        assert_eq!(rule.check("x"), Ok(()));
    }

    #[test]
    fn test_equals_compares_whole_value() {
        let rule = Rule::equals("hunter2", "passwords differ");
        assert_eq!(rule.check("hunter2"), Ok(()));
        assert_eq!(rule.check("hunter"), Err("passwords differ"));
        assert_eq!(rule.check(""), Ok(()));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::pattern("(", "bad").unwrap_err();
        assert!(matches!(err, FieldBuildError::InvalidPattern { .. }));
    }

    #[test]
    fn test_evaluate_collects_in_order() {
        let rules: RuleSet = [
            Rule::contains("@", "missing @"),
            Rule::min_length(10, "too short"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            rules.evaluate("abc"),
            ValidationOutcome::Invalid(vec!["missing @".into(), "too short".into()])
        );
        assert!(rules.evaluate("someone@example.com").is_valid());
    }
}
