use super::comparator::Comparator;
use super::rule::Rule;
use super::ruleset::RuleSet;
use super::value::Value;

/// Whether the cursor's current rule has received a condition yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// The current rule was reserved by [`RuleSet::rule()`] and has no
    /// comparator; the next condition fills it in place.
    Uncommitted,
    /// The current rule is finished; the next condition appends a new rule
    /// on the same path.
    Committed,
}

/// Builder handle bound to one rule of a [`RuleSet`].
///
/// Created by [`RuleSet::rule()`]. Each condition method either fills the
/// reserved rule or, once that rule is committed, appends a sibling rule on
/// the same path, so `gt(10).lt(20)` yields two rules forming a range.
/// A committed rule is never modified again. [`end()`](Self::end) hands the
/// rule set back.
///
/// ```
/// use ruler::{CursorState, RuleSet};
///
/// let cursor = RuleSet::new().rule("age").gte(18_i64);
/// assert_eq!(cursor.index(), 0);
///
/// let cursor = cursor.lt(65_i64);
/// assert_eq!(cursor.index(), 1);
/// assert_eq!(cursor.state(), CursorState::Committed);
///
/// let rules = cursor.end();
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug)]
#[must_use = "call `end()` to get the rule set back"]
pub struct Cursor {
    set: RuleSet,
    index: usize,
    state: CursorState,
}

impl Cursor {
    pub(crate) fn start(mut set: RuleSet, path: &str) -> Self {
        set.rules.push(Rule::pending(path));
        let index = set.rules.len() - 1;
        Self {
            set,
            index,
            state: CursorState::Uncommitted,
        }
    }

    /// Add an equals condition.
    pub fn eq(self, value: impl Into<Value>) -> Self {
        self.compare(Comparator::Eq, value.into())
    }

    /// Add a not-equals condition.
    pub fn neq(self, value: impl Into<Value>) -> Self {
        self.compare(Comparator::Neq, value.into())
    }

    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.compare(Comparator::Lt, value.into())
    }

    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.compare(Comparator::Lte, value.into())
    }

    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.compare(Comparator::Gt, value.into())
    }

    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.compare(Comparator::Gte, value.into())
    }

    /// Add a regex condition; the pattern may match anywhere in the field.
    pub fn matches(self, pattern: &str) -> Self {
        self.compare(Comparator::Matches, Value::from(pattern))
    }

    /// Same as [`matches()`](Self::matches), stored under the `contains` name.
    pub fn contains(self, pattern: &str) -> Self {
        self.compare(Comparator::Contains, Value::from(pattern))
    }

    /// Add a negated regex condition (`ncontains`).
    pub fn not_matches(self, pattern: &str) -> Self {
        self.compare(Comparator::Ncontains, Value::from(pattern))
    }

    /// Require the field to be present.
    pub fn exists(self) -> Self {
        self.compare(Comparator::Exists, Value::Null)
    }

    /// Require the field to be absent.
    pub fn not_exists(self) -> Self {
        self.compare(Comparator::Nexists, Value::Null)
    }

    /// Require the field to be a string equal to one of `candidates`.
    pub fn one_of<S: AsRef<str>>(self, candidates: &[S]) -> Self {
        let list = candidates.iter().map(|s| s.as_ref().to_owned()).collect();
        self.compare(Comparator::StringsContains, Value::List(list))
    }

    /// Finish this path and return the rule set. A reserved rule that never
    /// received a condition is dropped.
    pub fn end(mut self) -> RuleSet {
        if self.state == CursorState::Uncommitted {
            self.set.rules.truncate(self.index);
        }
        self.set
    }

    /// Position of the current rule in the rule set.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// The rule this cursor is bound to.
    #[must_use]
    pub fn current(&self) -> &Rule {
        &self.set.rules[self.index]
    }

    /// The rule set under construction, including the current rule.
    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.set
    }

    fn compare(mut self, comparator: Comparator, value: Value) -> Self {
        match self.state {
            CursorState::Uncommitted => {
                let rule = &mut self.set.rules[self.index];
                rule.comparator = Some(comparator);
                rule.value = value;
                rule.clear_pattern();
                self.state = CursorState::Committed;
            }
            CursorState::Committed => {
                let path = self.set.rules[self.index].path.clone();
                self.set.rules.push(Rule::new(comparator, path, value));
                self.index = self.set.rules.len() - 1;
            }
        }
        self
    }
}
