use std::cmp::Ordering;

use crate::extract::extract;
use crate::types::{Comparator, Field, Observer, PatternConfig, Record, Rule, SoftFailure, Value};

/// Decide whether `record` satisfies `rule`. Never panics and never errors:
/// anything that cannot be compared resolves to `false` and is reported to
/// `observer`.
pub(crate) fn evaluate(
    rule: &Rule,
    record: &Record,
    config: &PatternConfig,
    observer: &dyn Observer,
) -> bool {
    let Some(comparator) = rule.comparator() else {
        observer.soft_failure(rule, &SoftFailure::MissingComparator);
        return false;
    };

    let outcome = match extract(record, rule.path()) {
        Some(actual) => compare(rule, comparator, actual, config),
        None => match comparator {
            Comparator::Nexists => Ok(true),
            Comparator::Exists => Ok(false),
            Comparator::Unknown(_) => Err(SoftFailure::UnknownComparator),
            _ => Err(SoftFailure::MissingField),
        },
    };

    outcome.unwrap_or_else(|failure| {
        observer.soft_failure(rule, &failure);
        false
    })
}

fn compare(
    rule: &Rule,
    comparator: &Comparator,
    actual: &Field,
    config: &PatternConfig,
) -> Result<bool, SoftFailure> {
    let expected = rule.value();
    match comparator {
        Comparator::Exists => Ok(true),
        Comparator::Nexists => Ok(false),
        Comparator::Eq => Ok(equals(actual, expected)),
        Comparator::Neq => Ok(!equals(actual, expected)),
        Comparator::Gt | Comparator::Gte | Comparator::Lt | Comparator::Lte => {
            let ord = scalar(actual, expected)?
                .partial_cmp_value(expected)
                .ok_or_else(|| mismatch(actual, expected))?;
            Ok(match comparator {
                Comparator::Gt => ord == Ordering::Greater,
                Comparator::Gte => ord != Ordering::Less,
                Comparator::Lt => ord == Ordering::Less,
                _ => ord != Ordering::Greater,
            })
        }
        Comparator::Regex | Comparator::Matches | Comparator::Contains => {
            pattern_match(rule, actual, config)
        }
        // Only negates a well-defined match; bad patterns still fail closed.
        Comparator::Ncontains => pattern_match(rule, actual, config).map(|found| !found),
        Comparator::StringsContains => {
            let (Some(text), Some(candidates)) = (
                scalar(actual, expected)?.as_str(),
                expected.as_list(),
            ) else {
                return Err(mismatch(actual, expected));
            };
            Ok(candidates.iter().any(|c| c == text))
        }
        Comparator::Unknown(_) => Err(SoftFailure::UnknownComparator),
    }
}

/// Structural equality; differing kinds are never equal.
fn equals(actual: &Field, expected: &Value) -> bool {
    actual.as_value().is_some_and(|v| v == expected)
}

fn pattern_match(rule: &Rule, actual: &Field, config: &PatternConfig) -> Result<bool, SoftFailure> {
    let expected = rule.value();
    let Some(text) = scalar(actual, expected)?.as_str() else {
        return Err(mismatch(actual, expected));
    };
    let outcome = rule.with_pattern(config, |compiled| match compiled {
        Ok(re) => Ok(re.is_match(text)),
        Err(err) => Err(SoftFailure::InvalidPattern(err.to_string())),
    });
    outcome.unwrap_or_else(|| Err(mismatch(actual, expected)))
}

fn scalar<'a>(actual: &'a Field, expected: &Value) -> Result<&'a Value, SoftFailure> {
    actual.as_value().ok_or_else(|| mismatch(actual, expected))
}

fn mismatch(actual: &Field, expected: &Value) -> SoftFailure {
    SoftFailure::TypeMismatch {
        actual: actual.as_value().map_or("record", Value::kind),
        expected: expected.kind(),
    }
}
