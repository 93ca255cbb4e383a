mod comparator;
mod config;
mod cursor;
mod evaluation_report;
mod observer;
mod record;
mod rule;
mod ruleset;
mod value;

pub use comparator::Comparator;
pub use config::PatternConfig;
pub use cursor::{Cursor, CursorState};
pub use evaluation_report::EvaluationReport;
pub use observer::{NoopObserver, Observer, SoftFailure, TracingObserver};
pub use record::{Field, Record};
pub use rule::Rule;
pub use ruleset::RuleSet;
pub use value::Value;
