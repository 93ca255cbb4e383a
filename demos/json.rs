use ruler::{Record, RuleSet};
use tracing_subscriber::EnvFilter;

const RULES: &str = r#"[
    {"comparator": "eq", "path": "name", "value": "Bob"},
    {"comparator": "ncontains", "path": "name", "value": "Jones"},
    {"comparator": "contains", "path": "location.name", "value": "Florida"},
    {"comparator": "gt", "path": "location.pop", "value": 100000},
    {"comparator": "lt", "path": "location.elev", "value": 1000}
]"#;

const RECORD: &str = r#"{
    "name": "Bob",
    "location": {"name": "Fort Lauderdale, Florida", "pop": 324234234, "elev": 72}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=ruler=debug shows decode and soft-failure events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rules = RuleSet::from_json(RULES)?;
    let record = Record::from_json(RECORD)?;
    println!("{rules}: {}", rules.test(&record));

    // Elevation stored as text: ordering fails closed and is reported.
    let record = Record::from_json(
        r#"{"name": "Bob", "location": {"name": "Miami, Florida", "pop": 400000, "elev": "2"}}"#,
    )?;
    println!("{}", rules.evaluate_detailed(&record));

    println!("{}", rules.to_json()?);
    Ok(())
}
