//! Typed views of accepted account forms.

use serde::{Deserialize, Serialize};

use super::errors::{ErrorKind, FieldError, FieldPath, ValidationErrors};
use super::schemas::{LOGIN_SCHEMA, REGISTER_SCHEMA};
use super::types::{FormInput, UploadedFile};
use crate::utils::error_messages::REQUIRED;

/// Credentials from the login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Fields from the registration form; the confirmation is dropped once it
/// matched the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub photo: UploadedFile,
    pub username: String,
    pub password: String,
}

fn missing(field: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(FieldPath::field(field), FieldError::new(ErrorKind::Missing, REQUIRED));
    errors
}

fn take_text(value: &FormInput, field: &str) -> Result<String, ValidationErrors> {
    value
        .text(field)
        .map(str::to_string)
        .ok_or_else(|| missing(field))
}

impl TryFrom<&FormInput> for LoginForm {
    type Error = ValidationErrors;

    fn try_from(input: &FormInput) -> Result<Self, Self::Error> {
        let value = LOGIN_SCHEMA.validate(input).into_result()?;
        Ok(Self {
            username: take_text(&value, "username")?,
            password: take_text(&value, "password")?,
        })
    }
}

impl TryFrom<&FormInput> for RegisterForm {
    type Error = ValidationErrors;

    fn try_from(input: &FormInput) -> Result<Self, Self::Error> {
        let value = REGISTER_SCHEMA.validate(input).into_result()?;
        let photo = value.file("photo").cloned().ok_or_else(|| missing("photo"))?;
        Ok(Self {
            name: take_text(&value, "name")?,
            email: take_text(&value, "email")?,
            photo,
            username: take_text(&value, "username")?,
            password: take_text(&value, "password")?,
        })
    }
}
