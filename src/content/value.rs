//! Owned front-matter value type

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Decoded front-matter mapping, preserving key order from the source
pub type Metadata = IndexMap<String, Value>;

/// A front-matter value
///
/// Covers the scalar and container shapes YAML produces, with date-like
/// plain scalars promoted to [`Value::Date`] so a `date: 2024-01-15` field
/// stays a timestamp rather than a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(DateTime<Utc>),
    Sequence(Vec<Value>),
    Mapping(Metadata),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Metadata> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(yaml: serde_yaml::Value) -> Self {
        match yaml {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => match parse_date_scalar(&s) {
                Some(date) => Value::Date(date),
                None => Value::String(s),
            },
            serde_yaml::Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(map) => Value::Mapping(convert_mapping(map)),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Convert a YAML mapping into an ordered `Metadata` mapping
///
/// Scalar keys that are not strings (numbers, booleans) are stringified;
/// sequence- or mapping-keyed entries are dropped.
pub(crate) fn convert_mapping(map: serde_yaml::Mapping) -> Metadata {
    let mut out = Metadata::with_capacity(map.len());
    for (key, value) in map {
        let key = match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Bool(b) => b.to_string(),
            serde_yaml::Value::Number(n) => n.to_string(),
            other => {
                tracing::warn!("skipping non-scalar front-matter key: {:?}", other);
                continue;
            }
        };
        out.insert(key, Value::from(value));
    }
    out
}

/// Recognize date-like plain scalars
///
/// Bare ISO calendar dates (`2024-01-15`) resolve to midnight UTC; full
/// RFC 3339 timestamps keep their instant.
fn parse_date_scalar(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    None
}
