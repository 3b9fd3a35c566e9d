//! The account forms: login and registration.

use once_cell::sync::Lazy;

use crate::utils::error_messages::*;

use super::constants::*;
use super::errors::FieldPath;
use super::schema::{CrossFieldRule, FieldConstraint, FieldSpec, LengthBound, Schema};

pub static LOGIN_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema {
    name: "login",
    fields: vec![
        FieldSpec::new(
            "username",
            vec![FieldConstraint::Text {
                min: Some(LengthBound::with_message(MIN_USERNAME_LENGTH, USERNAME_TOO_SHORT)),
                max: Some(LengthBound::with_message(MAX_USERNAME_LENGTH, USERNAME_TOO_LONG)),
            }],
        ),
        FieldSpec::new(
            "password",
            vec![FieldConstraint::Text {
                min: Some(LengthBound::with_message(MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)),
                max: Some(LengthBound::with_message(MAX_PASSWORD_LENGTH, PASSWORD_TOO_LONG)),
            }],
        ),
    ],
    cross_field: Vec::new(),
});

pub static REGISTER_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema {
    name: "register",
    fields: vec![
        FieldSpec::new(
            "name",
            vec![FieldConstraint::Text {
                min: Some(LengthBound::with_message(MIN_NAME_LENGTH, NAME_TOO_SHORT)),
                max: Some(LengthBound::new(MAX_NAME_LENGTH)),
            }],
        ),
        FieldSpec::new(
            "email",
            vec![
                FieldConstraint::Email { message: INVALID_EMAIL },
                // The registration page has always shown the name message here
                FieldConstraint::Text {
                    min: Some(LengthBound::with_message(MIN_NAME_LENGTH, NAME_TOO_SHORT)),
                    max: Some(LengthBound::new(MAX_NAME_LENGTH)),
                },
            ],
        ),
        FieldSpec::new(
            "photo",
            vec![FieldConstraint::File {
                max_size: MAX_PHOTO_SIZE,
                allowed_types: ALLOWED_PHOTO_TYPES,
                not_a_file: PHOTO_NOT_A_FILE,
                too_large: PHOTO_TOO_LARGE,
                unsupported_type: PHOTO_UNSUPPORTED_TYPE,
            }],
        ),
        FieldSpec::new(
            "username",
            vec![FieldConstraint::Text {
                min: Some(LengthBound::with_message(MIN_USERNAME_LENGTH, REGISTER_USERNAME_TOO_SHORT)),
                max: Some(LengthBound::with_message(MAX_USERNAME_LENGTH, REGISTER_USERNAME_TOO_LONG)),
            }],
        ),
        FieldSpec::new(
            "password",
            vec![FieldConstraint::Text {
                min: Some(LengthBound::with_message(MIN_PASSWORD_LENGTH, REGISTER_PASSWORD_TOO_SHORT)),
                max: Some(LengthBound::new(MAX_PASSWORD_LENGTH)),
            }],
        ),
        FieldSpec::new("confirm", vec![FieldConstraint::Text { min: None, max: None }]),
    ],
    cross_field: vec![CrossFieldRule::Equals {
        field: "password",
        other: "confirm",
        path: FieldPath::field("confirm"),
        message: PASSWORDS_DO_NOT_MATCH,
    }],
});
