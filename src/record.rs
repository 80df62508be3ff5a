//! Records, the values they hold, and the knobs that decide how a record is ordered by one of its
//! fields.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortError};

/// A single field value.
///
/// Values only compare meaningfully against values of the same [`ValueKind`]. The derived `Ord`
/// orders by kind first, the sort implementations reject mixed kinds before relying on it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Int(i64),
    Text(String),
    /// A label out of a small closed set, e.g. `high`, `medium`, `low`.
    Category(String),
}

impl Value {
    pub fn category(label: impl Into<String>) -> Self {
        Value::Category(label.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Text(_) => ValueKind::Text,
            Value::Category(_) => ValueKind::Category,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Category(v) => f.write_str(v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Text,
    Category,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Int => "integer",
            ValueKind::Text => "text",
            ValueKind::Category => "category",
        })
    }
}

/// A mapping from field name to [`Value`]. Two records are equal if they hold the same fields
/// with the same values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style insert, mostly useful for hand written datasets.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy of `self` that is guaranteed to carry `field`, using `default` if it is
    /// absent. `self` is left untouched.
    pub fn filled(&self, field: &str, default: &Value) -> Record {
        let mut copy = self.clone();
        if !copy.contains(field) {
            copy.insert(field, default.clone());
        }
        copy
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

pub type Dataset = Vec<Record>;

/// Parses a dataset from a JSON array of objects.
///
/// Integers become [`Value::Int`] and strings [`Value::Text`]. Anything else (floats, booleans,
/// null, nested arrays or objects) is rejected, there is no sensible way to order it.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let parsed: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| SortError::InvalidInput(format!("dataset is not valid JSON: {e}")))?;

    let serde_json::Value::Array(items) = parsed else {
        return Err(SortError::InvalidInput(
            "dataset must be a JSON array of objects".into(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let serde_json::Value::Object(map) = item else {
                return Err(SortError::InvalidInput(format!(
                    "record {index} is not a JSON object"
                )));
            };

            map.into_iter()
                .map(|(field, value)| {
                    let value = match value {
                        serde_json::Value::String(s) => Value::Text(s),
                        serde_json::Value::Number(n) => match n.as_i64() {
                            Some(v) => Value::Int(v),
                            None => {
                                return Err(SortError::InvalidInput(format!(
                                    "record {index} field '{field}': {n} is not an integer"
                                )))
                            }
                        },
                        other => {
                            return Err(SortError::InvalidInput(format!(
                                "record {index} field '{field}': unsupported value {other}"
                            )))
                        }
                    };
                    Ok((field, value))
                })
                .collect::<Result<Record>>()
        })
        .collect()
}

/// Name of the field records are ordered by.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortKey(pub(crate) String);

impl SortKey {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SortError::EmptyKey);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Orients an ascending comparison result.
    ///
    /// Descending order reverses the comparison instead of the output, so records with equal keys
    /// still keep their input order.
    #[inline]
    pub fn orient(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// What to do with a record that lacks the sort key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Order the record as if it carried this value.
    Default(Value),
    /// Treat the record as malformed.
    Require,
}

impl Default for MissingKeyPolicy {
    fn default() -> Self {
        MissingKeyPolicy::Default(Value::Int(0))
    }
}

impl MissingKeyPolicy {
    /// The value `record` (found at `index` in its dataset) is ordered by.
    pub fn resolve<'a>(
        &'a self,
        record: &'a Record,
        key: &SortKey,
        index: usize,
    ) -> Result<&'a Value> {
        match (record.get(key.as_str()), self) {
            (Some(value), _) => Ok(value),
            (None, MissingKeyPolicy::Default(value)) => Ok(value),
            (None, MissingKeyPolicy::Require) => Err(SortError::MissingKey {
                index,
                key: key.as_str().to_owned(),
            }),
        }
    }
}

impl FromStr for MissingKeyPolicy {
    type Err = SortError;

    /// Accepts `require`, or an integer default.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("require") {
            return Ok(MissingKeyPolicy::Require);
        }
        s.parse::<i64>()
            .map(|v| MissingKeyPolicy::Default(Value::Int(v)))
            .map_err(|_| {
                SortError::InvalidInput(format!(
                    "missing key policy must be 'require' or an integer, got '{s}'"
                ))
            })
    }
}

/// Checks that every value a dataset is about to be ordered by has the same kind.
///
/// `values` yields each value together with the index of the record it belongs to.
pub fn ensure_single_kind<'a>(
    key: &SortKey,
    values: impl IntoIterator<Item = (usize, &'a Value)>,
) -> Result<()> {
    let mut first = None;
    for (index, value) in values {
        let kind = value.kind();
        match first {
            None => first = Some(kind),
            Some(first) if first != kind => {
                return Err(SortError::MixedKeyTypes {
                    key: key.as_str().to_owned(),
                    first,
                    other: kind,
                    index,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
