//! Structured validation errors keyed by field path.
//!
//! Validation failures are data handed back to the form handler, never faults.
//! Every violation found in an input is kept, grouped under the path of the
//! field it should be displayed next to.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// One step in a field path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Locates where an error applies, e.g. `confirm`, `address.street` or `photos[0]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Path pointing at a top-level field
    pub fn field(name: &str) -> Self {
        Self(vec![PathSegment::Key(name.to_string())])
    }

    /// Extends the path with a nested key
    pub fn key(mut self, name: &str) -> Self {
        self.0.push(PathSegment::Key(name.to_string()));
        self
    }

    /// Extends the path with an array index
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The kind of rule an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Missing,
    InvalidType,
    FieldTooShort,
    FieldTooLong,
    InvalidFormat,
    FileTooLarge,
    UnsupportedFileType,
    MismatchedConfirmation,
}

/// A single user-facing violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Every violation found in one input, grouped by field path.
///
/// Serializes as `{ "<path>": ["message", ...] }`, ready to be shown next to
/// the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation under `path`, after any already recorded there
    pub fn add(&mut self, path: FieldPath, error: FieldError) {
        self.errors.entry(path).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of paths carrying at least one error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.errors.contains_key(path)
    }

    pub fn get(&self, path: &FieldPath) -> Option<&[FieldError]> {
        self.errors.get(path).map(Vec::as_slice)
    }

    /// Messages recorded for a top-level field, in evaluation order
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(&FieldPath::field(field))
            .map(|errors| errors.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &[FieldError])> {
        self.errors.iter().map(|(path, errors)| (path, errors.as_slice()))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (path, errors) in &self.errors {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            map.serialize_entry(&path.to_string(), &messages)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_display() {
        let cases = vec![
            (FieldPath::field("confirm"), "confirm"),
            (FieldPath::field("address").key("street"), "address.street"),
            (FieldPath::field("photos").index(0), "photos[0]"),
            (FieldPath::field("books").index(2).key("title"), "books[2].title"),
        ];

        for (path, expected) in cases {
            assert_eq!(path.to_string(), expected);
        }
    }

    #[test]
    fn test_errors_accumulate_per_path() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add(FieldPath::field("email"), FieldError::new(ErrorKind::InvalidFormat, "bad email"));
        errors.add(FieldPath::field("email"), FieldError::new(ErrorKind::FieldTooShort, "too short"));
        errors.add(FieldPath::field("confirm"), FieldError::new(ErrorKind::MismatchedConfirmation, "mismatch"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages("email"), vec!["bad email", "too short"]);
        assert!(errors.messages("password").is_empty());
        assert_eq!(errors.to_string(), "validation failed for 2 field(s)");
    }

    #[test]
    fn test_serialization() {
        let mut errors = ValidationErrors::new();
        errors.add(
            FieldPath::field("photos").index(1),
            FieldError::new(ErrorKind::FileTooLarge, "Max 2 MB upload size."),
        );
        errors.add(FieldPath::field("confirm"), FieldError::new(ErrorKind::MismatchedConfirmation, "Passwords do not match"));

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "confirm": ["Passwords do not match"],
                "photos[1]": ["Max 2 MB upload size."],
            })
        );
    }
}
