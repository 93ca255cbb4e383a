use ruler::{Record, RuleSet};

fn main() {
    // Define rules
    let rules = RuleSet::new()
        .rule("user.age")
        .gte(18_i64)
        .lt(65_i64)
        .end()
        .rule("user.status")
        .one_of(&["active", "trial"])
        .end()
        .rule("user.email")
        .matches("@example\\.com$")
        .end();

    println!("{rules}");
    for rule in &rules {
        println!("  {rule}");
    }

    // Evaluate against a record
    let record = Record::new()
        .set("user.age", 25_i64)
        .set("user.status", "active")
        .set("user.email", "sam@example.com");

    let report = rules.evaluate_detailed(&record);
    println!("Result: {report}");

    let record = record.set("user.age", 70_i64);
    let report = rules.evaluate_detailed(&record);
    match report.failed_rule() {
        Some(index) => println!("Rejected by rule {index}: {}", rules.rules()[index]),
        None => println!("Accepted."),
    }
}
