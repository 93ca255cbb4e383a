use std::fmt;
use std::time::Duration;

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::ruleset::RuleSet::evaluate_detailed).
///
/// Contains the verdict, the index of the first rule that did not match,
/// how many rules ran before evaluation stopped, and the wall-clock duration.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    failed_rule: Option<usize>,
    evaluated: usize,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(failed_rule: Option<usize>, evaluated: usize, duration: Duration) -> Self {
        Self {
            failed_rule,
            evaluated,
            duration,
        }
    }

    /// The evaluation verdict, same as [`RuleSet::test()`](super::ruleset::RuleSet::test).
    #[must_use]
    pub fn verdict(&self) -> bool {
        self.failed_rule.is_none()
    }

    /// Index of the first rule that did not match.
    #[must_use]
    pub fn failed_rule(&self) -> Option<usize> {
        self.failed_rule
    }

    /// Number of rules evaluated, including the failing one.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failed_rule {
            Some(idx) => write!(f, "verdict: false (rule {idx} failed)")?,
            None => write!(f, "verdict: true")?,
        }
        write!(f, ", evaluated: {}", self.evaluated)?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
