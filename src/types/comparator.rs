use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Comparators supported in rules.
///
/// Parsing never fails: names outside the known set are kept as
/// [`Comparator::Unknown`] and never match during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Exists,
    Nexists,
    Regex,
    Matches,
    Contains,
    Ncontains,
    /// The field is a string equal to one of the strings in the rule's list.
    StringsContains,
    Unknown(String),
}

impl Comparator {
    /// The wire name used in serialized rules.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Comparator::Eq => "eq",
            Comparator::Neq => "neq",
            Comparator::Gt => "gt",
            Comparator::Gte => "gte",
            Comparator::Lt => "lt",
            Comparator::Lte => "lte",
            Comparator::Exists => "exists",
            Comparator::Nexists => "nexists",
            Comparator::Regex => "regex",
            Comparator::Matches => "matches",
            Comparator::Contains => "contains",
            Comparator::Ncontains => "ncontains",
            Comparator::StringsContains => "stringscontains",
            Comparator::Unknown(name) => name,
        }
    }
}

impl FromStr for Comparator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "eq" => Comparator::Eq,
            "neq" => Comparator::Neq,
            "gt" => Comparator::Gt,
            "gte" => Comparator::Gte,
            "lt" => Comparator::Lt,
            "lte" => Comparator::Lte,
            "exists" => Comparator::Exists,
            "nexists" => Comparator::Nexists,
            "regex" => Comparator::Regex,
            "matches" => Comparator::Matches,
            "contains" => Comparator::Contains,
            "ncontains" => Comparator::Ncontains,
            "stringscontains" => Comparator::StringsContains,
            other => Comparator::Unknown(other.to_owned()),
        })
    }
}

impl From<String> for Comparator {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(c) => c,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Comparator {
    fn from(s: &str) -> Self {
        Comparator::from(s.to_owned())
    }
}

impl From<Comparator> for String {
    fn from(c: Comparator) -> Self {
        match c {
            Comparator::Unknown(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
