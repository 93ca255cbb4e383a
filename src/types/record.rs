use std::collections::HashMap;

use crate::decode::DecodeError;

use super::Value;

/// A nested keyed record that rules are tested against.
///
/// Each key maps to either a scalar [`Value`] or another `Record`, so paths
/// like `"location.extra.fips"` walk one level per segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Field>,
}

/// One entry of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Value),
    Record(Record),
}

impl Field {
    /// The scalar value, or `None` for a nested record.
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(v) => Some(v),
            Field::Record(_) => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Field::Record(r) => Some(r),
            Field::Value(_) => None,
        }
    }
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value at a dot-separated path. Creates intermediate records as needed.
    /// A path with an empty segment (`""`, `"a..b"`) is never resolvable and
    /// leaves the record unchanged.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Set a nested record at a dot-separated path.
    #[must_use]
    pub fn set_record(mut self, path: &str, record: Record) -> Self {
        self.insert_field(path, Field::Record(record));
        self
    }

    /// Insert a value at a dot-separated path (mutable reference version).
    ///
    /// A scalar sitting where an intermediate record is needed is replaced.
    /// Paths with an empty segment are ignored, as with [`set`](Self::set).
    pub fn insert(&mut self, path: &str, value: Value) {
        self.insert_field(path, Field::Value(value));
    }

    fn insert_field(&mut self, path: &str, field: Field) {
        if path.split('.').any(str::is_empty) {
            return;
        }
        let mut segments = path.split('.');
        let Some(mut key) = segments.next() else {
            return;
        };
        let mut map = &mut self.fields;
        for next in segments {
            let entry = map
                .entry(key.to_owned())
                .or_insert_with(|| Field::Record(Record::new()));
            if let Field::Value(_) = entry {
                *entry = Field::Record(Record::new());
            }
            let Field::Record(nested) = entry else {
                return;
            };
            map = &mut nested.fields;
            key = next;
        }
        map.insert(key.to_owned(), field);
    }

    /// Look up a field directly under this record, without path splitting.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Resolve a dot-separated path. See [`extract`](crate::extract::extract).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Field> {
        crate::extract::extract(self, path)
    }

    /// Resolve a dot-separated path to a scalar value.
    /// Returns `None` if the path is absent or names a nested record.
    #[must_use]
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        self.get(path).and_then(Field::as_value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a JSON object into a record.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] for malformed JSON,
    /// [`DecodeError::RecordNotObject`] if the root is not an object, and
    /// [`DecodeError::UnsupportedRecordValue`] for an array with non-string
    /// elements.
    pub fn from_json(input: &str) -> Result<Self, DecodeError> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Self::try_from(json)
    }

    fn from_json_object(
        object: serde_json::Map<String, serde_json::Value>,
        prefix: &str,
    ) -> Result<Self, DecodeError> {
        let mut fields = HashMap::with_capacity(object.len());
        for (key, json) in object {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            let field = match json {
                serde_json::Value::Object(nested) => {
                    Field::Record(Self::from_json_object(nested, &path)?)
                }
                other => Field::Value(
                    Value::from_json(other)
                        .map_err(|_| DecodeError::UnsupportedRecordValue { path })?,
                ),
            };
            fields.insert(key, field);
        }
        Ok(Self { fields })
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = DecodeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Object(object) => Self::from_json_object(object, ""),
            serde_json::Value::Null => Err(DecodeError::RecordNotObject { found: "null" }),
            serde_json::Value::Bool(_) => Err(DecodeError::RecordNotObject { found: "bool" }),
            serde_json::Value::Number(_) => Err(DecodeError::RecordNotObject { found: "number" }),
            serde_json::Value::String(_) => Err(DecodeError::RecordNotObject { found: "string" }),
            serde_json::Value::Array(_) => Err(DecodeError::RecordNotObject { found: "array" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_simple() {
        let record = Record::new().set("name", "alice");
        assert_eq!(record.get_value("name"), Some(&Value::from("alice")));
    }

    #[test]
    fn set_and_get_nested() {
        let record = Record::new().set("user.profile.age", 25_i64);
        assert_eq!(record.get_value("user.profile.age"), Some(&Value::Int(25)));
    }

    #[test]
    fn intermediate_path_is_a_record() {
        let record = Record::new().set("user.age", 25_i64);
        assert!(record.get("user").and_then(Field::as_record).is_some());
        assert_eq!(record.get_value("user"), None);
    }

    #[test]
    fn overwrite_leaf_with_nested() {
        let record = Record::new()
            .set("user", "old_value")
            .set("user.age", 30_i64);
        assert_eq!(record.get_value("user.age"), Some(&Value::Int(30)));
        assert_eq!(record.get_value("user"), None);
    }

    #[test]
    fn overwrite_value() {
        let record = Record::new().set("score", 10_i64).set("score", 20_i64);
        assert_eq!(record.get_value("score"), Some(&Value::Int(20)));
    }

    #[test]
    fn unreachable_paths_are_ignored() {
        let record = Record::new()
            .set("", 1_i64)
            .set("a..b", 2_i64)
            .set(".a", 3_i64)
            .set("a.", 4_i64)
            .set_record("x..y", Record::new().set("z", 5_i64));
        assert!(record.is_empty());

        let mut record = Record::new().set("a.b", 1_i64);
        record.insert("a..b", Value::Int(9));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get_value("a.b"), Some(&Value::Int(1)));
    }

    #[test]
    fn set_record_attaches_subtree() {
        let inner = Record::new().set("zone", "America/New_York");
        let record = Record::new().set_record("location.time", inner);
        assert_eq!(
            record.get_value("location.time.zone"),
            Some(&Value::from("America/New_York"))
        );
    }

    #[test]
    fn from_json_nested() {
        let record = Record::from_json(
            r#"{"name": "Bob", "location": {"pop": 324234234, "tags": ["a", "b"]}}"#,
        )
        .unwrap();
        assert_eq!(record.get_value("name"), Some(&Value::from("Bob")));
        assert_eq!(
            record.get_value("location.pop"),
            Some(&Value::Int(324_234_234))
        );
        assert_eq!(
            record.get_value("location.tags"),
            Some(&Value::from(["a", "b"]))
        );
    }

    #[test]
    fn from_json_rejects_mixed_arrays() {
        let err = Record::from_json(r#"{"a": {"b": [1, "x"]}}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedRecordValue { ref path } if path == "a.b"
        ));
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(matches!(
            Record::from_json("[1, 2]"),
            Err(DecodeError::RecordNotObject { found: "array" })
        ));
        assert!(matches!(
            Record::from_json("\"text\""),
            Err(DecodeError::RecordNotObject { found: "string" })
        ));
    }
}
