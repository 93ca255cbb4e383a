use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::config::PatternConfig;
use super::cursor::Cursor;
use super::evaluation_report::EvaluationReport;
use super::observer::{Observer, TracingObserver};
use super::record::Record;
use super::rule::Rule;

/// An ordered set of rules that a record must all satisfy.
///
/// Built with [`rule()`](Self::rule), decoded with
/// [`from_json()`](Self::from_json), or wrapped around existing rules with
/// [`from_rules()`](Self::from_rules). Evaluation takes `&self` and never
/// mutates the set, so a finished `RuleSet` can be shared behind `Arc`.
///
/// # Example
///
/// ```
/// use ruler::{Record, RuleSet};
///
/// let rules = RuleSet::new()
///     .rule("location.pop").gt(100_000_i64).end()
///     .rule("name").matches("Bob").end();
///
/// let record = Record::new()
///     .set("name", "Bob Smith")
///     .set("location.pop", 324_234_234_i64);
///
/// assert!(rules.test(&record));
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
    observer: Arc<dyn Observer>,
    config: PatternConfig,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            observer: Arc::new(TracingObserver),
            config: PatternConfig::default(),
        }
    }
}

impl RuleSet {
    /// Create an empty rule set. An empty set matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing sequence of rules. Patterns the rules compiled
    /// elsewhere are discarded.
    #[must_use]
    pub fn from_rules(mut rules: Vec<Rule>) -> Self {
        for rule in &mut rules {
            rule.clear_pattern();
        }
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Replace the observer notified when rules fail closed.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the pattern limits. Patterns already compiled are discarded.
    #[must_use]
    pub fn with_pattern_config(mut self, config: PatternConfig) -> Self {
        self.config = config;
        for rule in &mut self.rules {
            rule.clear_pattern();
        }
        self
    }

    /// Start building a condition on `path`. See [`Cursor`].
    pub fn rule(self, path: &str) -> Cursor {
        Cursor::start(self, path)
    }

    /// Test `record` against every rule, stopping at the first that fails.
    #[must_use]
    pub fn test(&self, record: &Record) -> bool {
        self.rules
            .iter()
            .all(|rule| crate::evaluate::evaluate(rule, record, &self.config, &*self.observer))
    }

    /// Test with diagnostics: which rule failed first, how many rules ran,
    /// and how long evaluation took.
    pub fn evaluate_detailed(&self, record: &Record) -> EvaluationReport {
        let start = Instant::now();
        let mut evaluated = 0;
        let mut failed = None;
        for (index, rule) in self.rules.iter().enumerate() {
            evaluated += 1;
            if !crate::evaluate::evaluate(rule, record, &self.config, &*self.observer) {
                failed = Some(index);
                break;
            }
        }
        EvaluationReport::new(failed, evaluated, start.elapsed())
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn pattern_config(&self) -> &PatternConfig {
        &self.config
    }

    /// Decode a JSON array of `{comparator, path, value}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`](crate::DecodeError) if the input is not valid
    /// JSON or any record is malformed.
    pub fn from_json(input: &str) -> Result<Self, crate::DecodeError> {
        crate::decode::decode(input.as_bytes())
    }

    /// Byte-slice version of [`from_json()`](Self::from_json).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`](crate::DecodeError) on malformed input.
    pub fn from_slice(input: &[u8]) -> Result<Self, crate::DecodeError> {
        crate::decode::decode(input)
    }

    /// Read a JSON rule file and decode it.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError`](crate::RulerError) on I/O or decode failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::RulerError> {
        let input = std::fs::read(path)?;
        Ok(Self::from_slice(&input)?)
    }

    /// Encode the committed rules as a JSON array in the decoder's format.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`](crate::EncodeError) if a rule value is a NaN
    /// or infinite float.
    pub fn to_json(&self) -> Result<String, crate::EncodeError> {
        crate::decode::encode(self)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::from_rules(iter.into_iter().collect())
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} rules)", self.rules.len())
    }
}
