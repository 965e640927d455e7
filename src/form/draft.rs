use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::warn;

/// In-progress, partial record. Every attribute is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    fields: IndexMap<String, Value>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            fields: object.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Merge a single attribute, leaving every other attribute untouched.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Absent, `null` and whitespace-only strings all count as blank.
    pub fn is_blank(&self, name: &str) -> bool {
        self.fields.get(name).is_none_or(is_blank_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }
}

pub fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Bridge between a typed record and the untyped [`Draft`] the editors mutate.
///
/// Implemented for every serde record, so each collection only has to derive
/// `Serialize`/`Deserialize` on its record type.
pub trait Record: Clone {
    /// Shallow copy of the record's top-level attributes.
    fn to_draft(&self) -> Draft;

    fn from_draft(draft: &Draft) -> Result<Self, serde_json::Error>;

    fn from_value(value: Value) -> Result<Self, serde_json::Error>;

    fn to_value(&self) -> Value;
}

impl<T> Record for T
where
    T: Serialize + DeserializeOwned + Clone,
{
    fn to_draft(&self) -> Draft {
        match serde_json::to_value(self) {
            Ok(Value::Object(object)) => Draft::from_object(object),
            Ok(other) => {
                warn!(kind = value_kind(&other), "record is not an object; starting blank draft");
                Draft::new()
            }
            Err(err) => {
                warn!(error = %err, "record failed to serialize; starting blank draft");
                Draft::new()
            }
        }
    }

    fn from_draft(draft: &Draft) -> Result<Self, serde_json::Error> {
        Self::from_value(draft.to_value())
    }

    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            warn!(error = %err, "record failed to serialize");
            Value::Null
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
