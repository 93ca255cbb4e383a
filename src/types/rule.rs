use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::comparator::Comparator;
use super::config::PatternConfig;
use super::value::Value;

/// A single field comparison: `path <comparator> value`.
///
/// Rules are created by decoding JSON with
/// [`RuleSet::from_json()`](super::RuleSet::from_json), through the builder
/// with [`RuleSet::rule()`](super::RuleSet::rule), or directly with
/// [`Rule::new()`]. The comparator is `None` only while a
/// [`Cursor`](super::Cursor) is still composing the rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub(crate) comparator: Option<Comparator>,
    pub(crate) path: String,
    pub(crate) value: Value,
    /// Compiled form of `value` for the regex comparators, filled on first use
    /// and keyed by the limits it was compiled under.
    pub(crate) pattern: OnceLock<(PatternConfig, Result<Regex, regex::Error>)>,
}

impl Rule {
    #[must_use]
    pub fn new(
        comparator: impl Into<Comparator>,
        path: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            comparator: Some(comparator.into()),
            path: path.into(),
            value: value.into(),
            pattern: OnceLock::new(),
        }
    }

    pub(crate) fn pending(path: impl Into<String>) -> Self {
        Self {
            comparator: None,
            path: path.into(),
            value: Value::Null,
            pattern: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether a comparator has been set.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.comparator.is_some()
    }

    /// Run `f` on the compiled pattern for this rule's value under `config`.
    /// Returns `None` when the value is not a string.
    ///
    /// The first compilation is memoized. A rule evaluated under different
    /// limits than the memoized ones compiles afresh without caching.
    pub(crate) fn with_pattern<R>(
        &self,
        config: &PatternConfig,
        f: impl FnOnce(&Result<Regex, regex::Error>) -> R,
    ) -> Option<R> {
        let source = self.value.as_str()?;
        let (compiled_under, compiled) = self
            .pattern
            .get_or_init(|| (*config, config.compile(source)));
        if compiled_under == config {
            Some(f(compiled))
        } else {
            Some(f(&config.compile(source)))
        }
    }

    pub(crate) fn clear_pattern(&mut self) {
        self.pattern = OnceLock::new();
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.comparator == other.comparator && self.path == other.path && self.value == other.value
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comparator {
            Some(c) => write!(f, "{} {c} {}", self.path, self.value),
            None => write!(f, "{} <unset>", self.path),
        }
    }
}
