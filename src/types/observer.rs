use std::fmt;

use super::rule::Rule;

/// Why a rule failed closed instead of producing a real comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoftFailure {
    /// The rule's path did not resolve in the record.
    MissingField,
    /// The field and rule value cannot be compared with this comparator.
    TypeMismatch {
        actual: &'static str,
        expected: &'static str,
    },
    /// The rule value did not compile as a pattern.
    InvalidPattern(String),
    UnknownComparator,
    /// The rule was reserved by a cursor but never given a condition.
    MissingComparator,
}

impl fmt::Display for SoftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoftFailure::MissingField => write!(f, "field not found"),
            SoftFailure::TypeMismatch { actual, expected } => {
                write!(f, "cannot compare {actual} with {expected}")
            }
            SoftFailure::InvalidPattern(err) => write!(f, "invalid pattern: {err}"),
            SoftFailure::UnknownComparator => write!(f, "unknown comparator"),
            SoftFailure::MissingComparator => write!(f, "rule has no comparator"),
        }
    }
}

/// Receives diagnostics when rules fail closed during evaluation.
///
/// Installed per [`RuleSet`](super::RuleSet) with
/// [`with_observer`](super::RuleSet::with_observer). Implementations must be
/// cheap; they run inline on the evaluating thread.
pub trait Observer: Send + Sync + fmt::Debug {
    fn soft_failure(&self, rule: &Rule, failure: &SoftFailure);
}

/// Default observer: forwards soft failures to `tracing`.
///
/// Missing fields and type mismatches are expected in normal use and go to
/// `debug`; malformed rules go to `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn soft_failure(&self, rule: &Rule, failure: &SoftFailure) {
        let comparator = rule.comparator().map_or("<unset>", |c| c.as_str());
        match failure {
            SoftFailure::MissingField | SoftFailure::TypeMismatch { .. } => {
                tracing::debug!(path = rule.path(), comparator, "{failure}");
            }
            SoftFailure::InvalidPattern(_)
            | SoftFailure::UnknownComparator
            | SoftFailure::MissingComparator => {
                tracing::warn!(path = rule.path(), comparator, "{failure}");
            }
        }
    }
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn soft_failure(&self, _rule: &Rule, _failure: &SoftFailure) {}
}
