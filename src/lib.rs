//! A predicate rule engine for nested records.
//!
//! A [`RuleSet`] holds field comparisons such as `location.pop gt 100000`;
//! [`RuleSet::test()`] reports whether a [`Record`] satisfies all of them.
//! Rule sets are decoded from JSON or built with a fluent [`Cursor`].
//! Comparisons that cannot be made (missing fields, mismatched kinds, bad
//! patterns) fail closed and are reported to an [`Observer`].

pub mod decode;
mod error;
mod evaluate;
pub mod extract;
mod types;

pub use decode::{DecodeError, EncodeError};
pub use error::RulerError;
pub use extract::extract;
pub use types::{
    Comparator, Cursor, CursorState, EvaluationReport, Field, NoopObserver, Observer,
    PatternConfig, Record, Rule, RuleSet, SoftFailure, TracingObserver, Value,
};

/// Evaluate a single rule against `record` with default pattern limits,
/// reporting soft failures through `tracing`.
#[must_use]
pub fn evaluate(rule: &Rule, record: &Record) -> bool {
    evaluate::evaluate(rule, record, &PatternConfig::default(), &TracingObserver)
}
