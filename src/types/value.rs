use std::cmp::Ordering;
use std::fmt;

/// Values carried by rules and records.
///
/// Integers are stored canonically: anything that fits in an `i64` is
/// [`Value::Int`], so structurally equal integers always share a tag.
/// [`Value::Uint`] only holds values above `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null. A record field holding `Null` reads as absent.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit unsigned integer larger than `i64::MAX`.
    Uint(u64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A sequence of strings, used by membership comparisons.
    List(Vec<String>),
}

/// A value widened to the representation used for ordering comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Widened<'a> {
    Integer(i128),
    Float(f64),
    Text(&'a str),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::Uint(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Widen into the family used for ordering. Signed and unsigned integers
    /// share one exact family; floats and text are their own families.
    pub(crate) fn widen(&self) -> Option<Widened<'_>> {
        match self {
            Value::Int(v) => Some(Widened::Integer(i128::from(*v))),
            Value::Uint(v) => Some(Widened::Integer(i128::from(*v))),
            Value::Float(v) => Some(Widened::Float(*v)),
            Value::String(s) => Some(Widened::Text(s)),
            Value::Null | Value::Bool(_) | Value::List(_) => None,
        }
    }

    /// Order two values of the same family.
    /// Returns `None` across families, for unorderable kinds, and for NaN.
    #[must_use]
    pub fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self.widen()?, other.widen()?) {
            (Widened::Integer(a), Widened::Integer(b)) => Some(a.cmp(&b)),
            (Widened::Float(a), Widened::Float(b)) => a.partial_cmp(&b),
            (Widened::Text(a), Widened::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub(crate) fn from_json(json: serde_json::Value) -> Result<Self, &'static str> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::Uint(u))
                } else {
                    n.as_f64().map(Value::Float).ok_or("number out of range")
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Ok(s),
                    _ => Err("arrays may only contain strings"),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(_) => Err("objects are not valid rule values"),
        }
    }

    /// JSON form of this value, or `None` for NaN and infinities, which
    /// JSON cannot represent.
    pub(crate) fn to_json(&self) -> Option<serde_json::Value> {
        Some(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Uint(u) => serde_json::Value::from(*u),
            Value::Float(f) => serde_json::Value::Number(serde_json::Number::from_f64(*f)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().cloned().map(Into::into).collect())
            }
        })
    }
}

macro_rules! from_lossless {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

from_lossless!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::Uint(v), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::List(v.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(v: &[&str]) -> Self {
        Value::List(v.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(v: [&str; N]) -> Self {
        Value::List(v.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{item}\"")?;
                }
                write!(f, "]")
            }
        }
    }
}
