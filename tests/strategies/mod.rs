#![allow(dead_code)]

use proptest::prelude::*;
use ruler::{Comparator, Cursor, Record, Rule, RuleSet, Value};

// --- Fixed record schema ---
// name          : string, one of NAMES
// status        : string, one of STATUSES (sometimes missing)
// location.pop  : i64 (0..=1_000_000)
// location.x    : f64 (-180..180, two decimal places so JSON text is exact)
// location.name : string, one of CITIES

pub const NAMES: &[&str] = &["Bob", "Bobby Jones", "Alice", "Thomas"];
pub const STATUSES: &[&str] = &["active", "trial", "suspended"];
pub const CITIES: &[&str] = &["Fort Lauderdale, Florida", "Austin, Texas", "Miami, Florida"];
const PATTERNS: &[&str] = &["Bob", "^A", "Florida$", "o{2}", "[0-9]+", "Jones|Smith"];

fn arb_coordinate() -> impl Strategy<Value = f64> {
    (-18_000_i32..18_000).prop_map(|n| f64::from(n) / 100.0)
}

/// Generate a record that aligns with the fixed schema.
pub fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(NAMES),
        prop::option::of(prop::sample::select(STATUSES)),
        0_i64..=1_000_000,
        arb_coordinate(),
        prop::sample::select(CITIES),
    )
        .prop_map(|(name, status, pop, x, city)| {
            let record = Record::new()
                .set("name", name)
                .set("location.pop", pop)
                .set("location.x", x)
                .set("location.name", city);
            match status {
                Some(status) => record.set("status", status),
                None => record,
            }
        })
}

/// A generated rule, kept separate from [`Rule`] so it can be applied either
/// through a cursor or serialized.
#[derive(Debug, Clone)]
pub struct GenRule {
    pub comparator: Comparator,
    pub path: &'static str,
    pub value: Value,
}

impl GenRule {
    pub fn to_rule(&self) -> Rule {
        Rule::new(self.comparator.clone(), self.path, self.value.clone())
    }

    /// Apply this rule as a cursor condition.
    pub fn apply(&self, cursor: Cursor) -> Cursor {
        let v = self.value.clone();
        match &self.comparator {
            Comparator::Eq => cursor.eq(v),
            Comparator::Neq => cursor.neq(v),
            Comparator::Gt => cursor.gt(v),
            Comparator::Gte => cursor.gte(v),
            Comparator::Lt => cursor.lt(v),
            Comparator::Lte => cursor.lte(v),
            Comparator::Exists => cursor.exists(),
            Comparator::Nexists => cursor.not_exists(),
            Comparator::Matches => cursor.matches(v.as_str().unwrap_or_default()),
            Comparator::Contains => cursor.contains(v.as_str().unwrap_or_default()),
            Comparator::Ncontains => cursor.not_matches(v.as_str().unwrap_or_default()),
            Comparator::StringsContains => cursor.one_of(v.as_list().unwrap_or_default()),
            other => panic!("no cursor method for {other}"),
        }
    }
}

fn ordering_comparator() -> impl Strategy<Value = Comparator> {
    prop::sample::select(vec![
        Comparator::Eq,
        Comparator::Neq,
        Comparator::Gt,
        Comparator::Gte,
        Comparator::Lt,
        Comparator::Lte,
    ])
}

fn pattern_comparator() -> impl Strategy<Value = Comparator> {
    prop::sample::select(vec![
        Comparator::Matches,
        Comparator::Contains,
        Comparator::Ncontains,
    ])
}

/// Generate a rule over the schema. Values are usually the right kind for the
/// path but sometimes deliberately mismatched.
pub fn arb_rule() -> impl Strategy<Value = GenRule> {
    prop_oneof![
        (ordering_comparator(), 0_i64..=1_000_000).prop_map(|(comparator, v)| GenRule {
            comparator,
            path: "location.pop",
            value: Value::Int(v),
        }),
        (ordering_comparator(), arb_coordinate()).prop_map(|(comparator, v)| GenRule {
            comparator,
            path: "location.x",
            value: Value::Float(v),
        }),
        (ordering_comparator(), prop::sample::select(NAMES)).prop_map(|(comparator, v)| {
            GenRule {
                comparator,
                path: "name",
                value: Value::from(v),
            }
        }),
        (ordering_comparator(), "[0-9]{1,3}").prop_map(|(comparator, v)| GenRule {
            comparator,
            path: "location.pop",
            value: Value::String(v),
        }),
        (pattern_comparator(), prop::sample::select(PATTERNS)).prop_map(|(comparator, p)| {
            GenRule {
                comparator,
                path: "location.name",
                value: Value::from(p),
            }
        }),
        prop::sample::subsequence(STATUSES.to_vec(), 0..=STATUSES.len()).prop_map(|list| {
            GenRule {
                comparator: Comparator::StringsContains,
                path: "status",
                value: Value::from(list),
            }
        }),
        (prop::bool::ANY, prop::sample::select(vec!["status", "name", "missing.field"]))
            .prop_map(|(exists, path)| GenRule {
                comparator: if exists {
                    Comparator::Exists
                } else {
                    Comparator::Nexists
                },
                path,
                value: Value::Null,
            }),
    ]
}

/// Generate 0..=8 rules.
pub fn arb_rules() -> impl Strategy<Value = Vec<GenRule>> {
    prop::collection::vec(arb_rule(), 0..=8)
}

/// Build a rule set through the cursor API, one `rule(path)` per generated rule.
pub fn build(rules: &[GenRule]) -> RuleSet {
    rules
        .iter()
        .fold(RuleSet::new(), |set, rule| rule.apply(set.rule(rule.path)).end())
}

/// Build a rule set directly from rule values.
pub fn from_rules(rules: &[GenRule]) -> RuleSet {
    RuleSet::from_rules(rules.iter().map(GenRule::to_rule).collect())
}

/// Serialize generated rules to the JSON wire format, independently of
/// [`RuleSet::to_json`].
pub fn to_json(rules: &[GenRule]) -> String {
    let items: Vec<String> = rules
        .iter()
        .map(|r| {
            let value = match &r.value {
                Value::Null => "null".to_owned(),
                Value::Int(i) => i.to_string(),
                Value::Float(f) => format!("{f:?}"),
                Value::String(s) => format!("{s:?}"),
                Value::List(items) => format!(
                    "[{}]",
                    items
                        .iter()
                        .map(|s| format!("{s:?}"))
                        .collect::<Vec<_>>()
                        .join(",")
                ),
                other => panic!("unexpected generated value {other}"),
            };
            format!(
                r#"{{"comparator":"{}","path":"{}","value":{value}}}"#,
                r.comparator, r.path
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}
