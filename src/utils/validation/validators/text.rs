//! Text-specific validation functions

use validator::ValidateEmail;

use crate::utils::error_messages;
use crate::utils::validation::errors::{ErrorKind, FieldError};
use crate::utils::validation::schema::LengthBound;

/// Length as users count it: characters, not bytes
fn char_length(value: &str) -> usize {
    value.chars().count()
}

/// Validates that the text is at least `bound.limit` characters long
pub fn validate_min_length(value: &str, bound: &LengthBound) -> Result<(), FieldError> {
    if char_length(value) < bound.limit {
        let message = bound
            .message
            .map(str::to_string)
            .unwrap_or_else(|| error_messages::too_short(bound.limit));
        return Err(FieldError::new(ErrorKind::FieldTooShort, message));
    }
    Ok(())
}

/// Validates that the text is at most `bound.limit` characters long
pub fn validate_max_length(value: &str, bound: &LengthBound) -> Result<(), FieldError> {
    if char_length(value) > bound.limit {
        let message = bound
            .message
            .map(str::to_string)
            .unwrap_or_else(|| error_messages::too_long(bound.limit));
        return Err(FieldError::new(ErrorKind::FieldTooLong, message));
    }
    Ok(())
}

/// Validates email addresses according to the HTML5 specification
pub fn validate_email(value: &str, message: &str) -> Result<(), FieldError> {
    if !value.validate_email() {
        return Err(FieldError::new(ErrorKind::InvalidFormat, message));
    }
    Ok(())
}
