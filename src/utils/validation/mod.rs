//! Root module for the validation system.
//! Exposes the public API for form validation.

mod constants;
mod errors;
mod forms;
mod schema;
mod schemas;
mod types;
mod validator;
pub mod validators;

// Re-export commonly used types and functions
pub use constants::*;
pub use errors::{ErrorKind, FieldError, FieldPath, PathSegment, ValidationErrors};
pub use forms::{LoginForm, RegisterForm};
pub use schema::{CrossFieldRule, FieldConstraint, FieldSpec, LengthBound, Schema};
pub use schemas::{LOGIN_SCHEMA, REGISTER_SCHEMA};
pub use types::{FieldValue, FormInput, MalformedForm, UploadedFile};
pub use validator::{validate, ValidationResult};
