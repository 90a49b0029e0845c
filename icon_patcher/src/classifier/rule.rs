//! Ordered first-match rule tables.

/// One rule: a predicate over a classifier's attribute bundle and the outcome
/// it yields when it matches.
pub struct Rule<P, O> {
    /// Short label used in logs and tests.
    pub name: &'static str,
    pub when: P,
    pub then: O,
}

/// An ordered list of rules with a fallback outcome.
///
/// Rules are evaluated in order and the first match wins; the fallback
/// applies when nothing matches, so evaluation is total.
pub struct RuleSet<P: 'static, O: 'static> {
    pub rules: &'static [Rule<P, O>],
    pub fallback: O,
}

/// Name reported when the fallback outcome applies.
pub const FALLBACK_RULE: &str = "default";

impl<P: 'static, O: 'static> RuleSet<P, O> {
    /// The first rule whose predicate passes `test`, if any.
    pub fn first_match(&self, test: impl Fn(&P) -> bool) -> Option<&'static Rule<P, O>> {
        self.rules.iter().find(|rule| test(&rule.when))
    }

    /// Evaluate the table, returning the deciding rule's name and outcome.
    pub fn evaluate(&self, test: impl Fn(&P) -> bool) -> (&'static str, &O) {
        match self.first_match(test) {
            Some(rule) => (rule.name, &rule.then),
            None => (FALLBACK_RULE, &self.fallback),
        }
    }

    /// Number of explicit rules, not counting the fallback.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
