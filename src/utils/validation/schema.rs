//! Schemas as data.
//!
//! A schema is an ordered list of fields, each carrying the constraints it must
//! satisfy, plus rules spanning several fields. Schemas are declared once and
//! evaluated by [`validate`](super::validate); nothing here runs any check.

use super::errors::FieldPath;
use super::validator::{validate, ValidationResult};
use super::types::FormInput;

/// A length limit, optionally with the message shown when it is crossed.
///
/// Bounds without a message fall back to the generic length messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBound {
    pub limit: usize,
    pub message: Option<&'static str>,
}

impl LengthBound {
    pub const fn new(limit: usize) -> Self {
        Self { limit, message: None }
    }

    pub const fn with_message(limit: usize, message: &'static str) -> Self {
        Self {
            limit,
            message: Some(message),
        }
    }
}

/// One rule a single field must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldConstraint {
    /// The value must be text; its length in characters must stay within the
    /// given bounds (inclusive). A rule without bounds only checks the type.
    Text {
        min: Option<LengthBound>,
        max: Option<LengthBound>,
    },
    /// The value must be a syntactically valid email address.
    Email { message: &'static str },
    /// The value must be an uploaded file strictly smaller than `max_size`
    /// bytes whose declared type is one of `allowed_types`.
    File {
        max_size: u64,
        allowed_types: &'static [&'static str],
        not_a_file: &'static str,
        too_large: &'static str,
        unsupported_type: &'static str,
    },
}

/// A rule whose outcome depends on several fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// `field` and `other` must hold the same value; a mismatch is reported at
    /// `path`.
    Equals {
        field: &'static str,
        other: &'static str,
        path: FieldPath,
        message: &'static str,
    },
}

impl CrossFieldRule {
    /// Fields that must pass their own rules before this one is evaluated
    pub fn fields(&self) -> [&'static str; 2] {
        match self {
            CrossFieldRule::Equals { field, other, .. } => [*field, *other],
        }
    }

    /// Where the resulting error is displayed
    pub fn path(&self) -> &FieldPath {
        match self {
            CrossFieldRule::Equals { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub constraints: Vec<FieldConstraint>,
}

impl FieldSpec {
    pub fn new(name: &'static str, constraints: Vec<FieldConstraint>) -> Self {
        Self { name, constraints }
    }
}

/// A named set of field constraints plus cross-field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
    pub cross_field: Vec<CrossFieldRule>,
}

impl Schema {
    /// Checks `input` against this schema
    pub fn validate(&self, input: &FormInput) -> ValidationResult {
        validate(self, input)
    }
}
