//! Fail-fast check pipelines.

use super::outcome::{Failure, ValidationOutcome};

/// A single pure check over a raw field value.
pub type Check = fn(&str) -> ValidationOutcome;

/// A check together with the name it is reported under.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: Check,
}

impl Rule {
    pub const fn new(name: &'static str, check: Check) -> Self {
        Self { name, check }
    }
}

/// An ordered, immutable list of rules for one field.
///
/// [`Pipeline::run`] stops at the first failing rule and returns exactly that
/// rule's outcome. Empty input is always [`ValidationOutcome::Valid`].
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    name: &'static str,
    rules: &'static [Rule],
}

impl Pipeline {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Evaluate rules in declaration order; first failure wins.
    pub fn run(&self, input: &str) -> ValidationOutcome {
        if input.is_empty() {
            return ValidationOutcome::Valid;
        }
        self.rules
            .iter()
            .map(|rule| (rule.check)(input))
            .find(|outcome| !outcome.is_valid())
            .unwrap_or(ValidationOutcome::Valid)
    }

    /// Every failing rule, in declaration order.
    ///
    /// Diagnostic only: shows which failures [`Pipeline::run`] masks. The
    /// pipeline verdict is still the first entry.
    pub fn failures(&self, input: &str) -> Vec<(&'static str, Failure)> {
        if input.is_empty() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter_map(|rule| (rule.check)(input).into_failure().map(|f| (rule.name, f)))
            .collect()
    }
}
