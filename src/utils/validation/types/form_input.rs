//! Raw form submissions, before any rule has looked at them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::file_input::UploadedFile;

/// The value submitted for one form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    File(UploadedFile),
    /// Anything else a JSON client sent (numbers, booleans, null, ...)
    Other(Value),
}

impl FieldValue {
    /// Name of the value's kind, as reported in type mismatch messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::File(_) => "file",
            FieldValue::Other(Value::Null) => "null",
            FieldValue::Other(Value::Bool(_)) => "boolean",
            FieldValue::Other(Value::Number(_)) => "number",
            FieldValue::Other(Value::String(_)) => "string",
            FieldValue::Other(Value::Array(_)) => "array",
            FieldValue::Other(Value::Object(_)) => "object",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) | FieldValue::Other(Value::String(text)) => Some(text),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&UploadedFile> {
        match self {
            FieldValue::File(file) => Some(file),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<UploadedFile> for FieldValue {
    fn from(file: UploadedFile) -> Self {
        FieldValue::File(file)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            other => FieldValue::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedForm {
    #[error("form payload must be a JSON object")]
    NotAnObject,
}

/// Field name to submitted value, in submission order.
///
/// Setting a field twice keeps the last value, like a browser `FormData::set`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    fields: Vec<(String, FieldValue)>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable variant of [`FormInput::insert`]
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.get(name).and_then(FieldValue::as_file)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Builds a form from a JSON object: strings become text, objects shaped like
/// an [`UploadedFile`] become files, everything else is kept as is.
impl TryFrom<Value> for FormInput {
    type Error = MalformedForm;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = payload else {
            return Err(MalformedForm::NotAnObject);
        };

        let mut form = FormInput::new();
        for (name, value) in map {
            let value = match value {
                Value::String(text) => FieldValue::Text(text),
                object @ Value::Object(_) => match serde_json::from_value::<UploadedFile>(object.clone()) {
                    Ok(file) => FieldValue::File(file),
                    Err(_) => FieldValue::Other(object),
                },
                other => FieldValue::Other(other),
            };
            form.insert(&name, value);
        }
        Ok(form)
    }
}

impl Serialize for FormInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
