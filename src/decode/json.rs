use serde::Deserialize;

use crate::{Comparator, Rule, RuleSet, Value};

use super::{DecodeError, EncodeError};

/// One element of the serialized rule array.
#[derive(Debug, Deserialize)]
struct RuleRecord {
    comparator: Comparator,
    path: String,
    #[serde(default)]
    value: serde_json::Value,
}

/// Decode a JSON array of `{comparator, path, value}` objects into a [`RuleSet`].
///
/// `value` may be omitted (it defaults to null, as `exists`/`nexists` need no
/// operand). Unknown comparator names are kept and never match.
///
/// # Errors
///
/// Returns [`DecodeError`] if the input is not a JSON array of rule objects,
/// or if any rule's value is an object or a non-string array. No rule is
/// skipped: one bad record fails the whole decode.
pub fn decode(input: &[u8]) -> Result<RuleSet, DecodeError> {
    let records: Vec<RuleRecord> = serde_json::from_slice(input)?;
    let rules = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let value = Value::from_json(record.value).map_err(|reason| {
                DecodeError::InvalidValue {
                    index,
                    path: record.path.clone(),
                    reason,
                }
            })?;
            Ok(Rule::new(record.comparator, record.path, value))
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    tracing::debug!(rules = rules.len(), "decoded rule set");
    Ok(RuleSet::from_rules(rules))
}

/// Encode the committed rules of `rules` in the format read by [`decode`].
///
/// # Errors
///
/// Returns [`EncodeError::NonFiniteFloat`] if a rule value is NaN or
/// infinite, since JSON has no representation for it.
pub fn encode(rules: &RuleSet) -> Result<String, EncodeError> {
    let mut records = Vec::with_capacity(rules.len());
    for (index, rule) in rules.iter().enumerate() {
        let Some(comparator) = rule.comparator() else {
            continue;
        };
        let value = rule.value().to_json().ok_or_else(|| EncodeError::NonFiniteFloat {
            index,
            path: rule.path().to_owned(),
        })?;
        records.push(serde_json::json!({
            "comparator": comparator.as_str(),
            "path": rule.path(),
            "value": value,
        }));
    }
    Ok(serde_json::Value::Array(records).to_string())
}
