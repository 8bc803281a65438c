//! Ordered regex substitution chains for asset path rewriting.
//!
//! A [`StringTransformer`] owns a list of compiled [`Replacement`] rules and
//! an optional prefix. Rules are applied in declared order, each one
//! rewriting the output of the previous one (sequential chaining, not
//! simultaneous substitution), and the prefix is prepended once at the end.
//!
//! Transformers are pure: applying the same input twice yields the same
//! output, and construction is the only fallible step (pattern syntax is
//! checked up front, never at apply time).

use regex::{NoExpand, Regex};

use crate::config::section::ReplacementRule;
use crate::config::types::ConfigError;

// ============================================================================
// Replacement
// ============================================================================

/// A single compiled (pattern, replacement) rule.
///
/// Replaces **all** non-overlapping matches. The replacement string is
/// literal: `$` has no capture-group meaning.
#[derive(Debug, Clone)]
pub struct Replacement {
    matcher: Regex,
    replace_with: String,
}

impl Replacement {
    /// Compile a rule from its pattern source.
    ///
    /// Fails with [`ConfigError::InvalidPattern`] when the pattern is not a
    /// valid regular expression.
    pub fn compile(pattern: &str, replace_with: impl Into<String>) -> Result<Self, ConfigError> {
        let matcher = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            matcher,
            replace_with: replace_with.into(),
        })
    }

    /// Replace every match in `input`.
    fn apply(&self, input: &str) -> String {
        self.matcher
            .replace_all(input, NoExpand(&self.replace_with))
            .into_owned()
    }
}

// ============================================================================
// StringTransformer
// ============================================================================

/// An ordered substitution chain plus a final prefix.
#[derive(Debug, Clone)]
pub struct StringTransformer {
    replacements: Vec<Replacement>,
    prefix: String,
}

impl StringTransformer {
    /// Build a transformer from already-compiled rules.
    pub fn new(replacements: Vec<Replacement>, prefix: impl Into<String>) -> Self {
        Self {
            replacements,
            prefix: prefix.into(),
        }
    }

    /// Identity transform (empty rule list, empty prefix).
    pub fn identity() -> Self {
        Self::new(Vec::new(), "")
    }

    /// Compile a transformer from declarative configuration rules.
    ///
    /// Rule order is preserved; the first invalid pattern aborts with an
    /// error naming it.
    pub fn from_rules(rules: &[ReplacementRule], prefix: &str) -> Result<Self, ConfigError> {
        let replacements = rules
            .iter()
            .map(|rule| Replacement::compile(&rule.match_pattern, &rule.replace_with))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(replacements, prefix))
    }

    /// Apply all rules in order, then prepend the prefix.
    ///
    /// Each rule rewrites the previous rule's output, so `[(^a -> b),
    /// (^b -> c)]` turns `"afile"` into `"cfile"`.
    pub fn apply(&self, input: &str) -> String {
        let mut result = input.to_string();
        for replacement in &self.replacements {
            result = replacement.apply(&result);
        }
        format!("{}{}", self.prefix, result)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, replace_with: &str) -> Replacement {
        Replacement::compile(pattern, replace_with).unwrap()
    }

    #[test]
    fn test_empty_rule_list_is_identity() {
        let transformer = StringTransformer::identity();
        assert_eq!(transformer.apply("assets/file.txt"), "assets/file.txt");
        assert_eq!(transformer.apply(""), "");
    }

    #[test]
    fn test_prefix_applied_after_rules() {
        let transformer = StringTransformer::new(vec![rule("^a", "b")], "pre/");
        // The prefix must not be visible to the rules themselves.
        assert_eq!(transformer.apply("afile"), "pre/bfile");
    }

    #[test]
    fn test_rules_chain_sequentially() {
        let transformer = StringTransformer::new(vec![rule("^a", "b"), rule("^b", "c")], "");
        // a -> b, then the second rule sees "bfolder..." and rewrites it.
        assert_eq!(transformer.apply("afolder/file.txt"), "cfolder/file.txt");
    }

    #[test]
    fn test_replaces_all_matches() {
        let transformer = StringTransformer::new(vec![rule("a", "x")], "");
        assert_eq!(transformer.apply("banana"), "bxnxnx");
    }

    #[test]
    fn test_replacement_is_literal() {
        // "$1" in the replacement is text, not a capture reference.
        let transformer = StringTransformer::new(vec![rule("(file)", "$1_x")], "");
        assert_eq!(transformer.apply("afile"), "a$1_x");
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let result = Replacement::compile("[unclosed", "x");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("[unclosed"));
    }

    #[test]
    fn test_from_rules_preserves_order() {
        let rules = vec![
            ReplacementRule::new("^az", "replaced"),
            ReplacementRule::new("^replaced", "final"),
        ];
        let transformer = StringTransformer::from_rules(&rules, "").unwrap();
        assert_eq!(transformer.apply("aztest.txt"), "finaltest.txt");
    }
}
