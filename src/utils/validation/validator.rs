//! Evaluates a [`Schema`] against a [`FormInput`].
//!
//! Every declared field is checked and every violation is collected. For one
//! field, a value of the wrong kind stops the remaining rules of that field,
//! since none of them could be meaningfully applied. Cross-field rules run
//! last, and only when all the fields they reference passed their own rules.

use crate::utils::error_messages;

use super::errors::{ErrorKind, FieldError, FieldPath, ValidationErrors};
use super::schema::{CrossFieldRule, FieldConstraint, FieldSpec, Schema};
use super::types::{FieldValue, FormInput};
use super::validators::{file as file_validators, text as text_validators};

/// Outcome of validating one input against one schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// The declared fields, unchanged, in schema order
    Accepted(FormInput),
    Rejected(ValidationErrors),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<FormInput, ValidationErrors> {
        match self {
            ValidationResult::Accepted(value) => Ok(value),
            ValidationResult::Rejected(errors) => Err(errors),
        }
    }
}

impl From<ValidationResult> for Result<FormInput, ValidationErrors> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

/// Checks `input` against `schema`.
///
/// Fields the schema does not declare are dropped from the accepted value.
pub fn validate(schema: &Schema, input: &FormInput) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    let mut accepted = FormInput::new();

    for spec in &schema.fields {
        let path = FieldPath::field(spec.name);
        let Some(value) = input.get(spec.name) else {
            errors.add(path, FieldError::new(ErrorKind::Missing, error_messages::REQUIRED));
            continue;
        };

        for error in check_field(spec, value) {
            errors.add(path.clone(), error);
        }
        accepted.insert(spec.name, value.clone());
    }

    for rule in &schema.cross_field {
        let blocked = rule
            .fields()
            .iter()
            .any(|field| errors.contains(&FieldPath::field(field)));
        if blocked {
            continue;
        }
        if let Err(error) = check_cross_field(rule, input) {
            errors.add(rule.path().clone(), error);
        }
    }

    if errors.is_empty() {
        ValidationResult::Accepted(accepted)
    } else {
        ValidationResult::Rejected(errors)
    }
}

/// Applies the constraints of one field, in declaration order
fn check_field(spec: &FieldSpec, value: &FieldValue) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for constraint in &spec.constraints {
        match (constraint, value.as_text(), value.as_file()) {
            (FieldConstraint::Text { min, max }, Some(text), _) => {
                if let Some(Err(error)) = min.as_ref().map(|bound| text_validators::validate_min_length(text, bound)) {
                    errors.push(error);
                }
                if let Some(Err(error)) = max.as_ref().map(|bound| text_validators::validate_max_length(text, bound)) {
                    errors.push(error);
                }
            }
            (FieldConstraint::Email { message }, Some(text), _) => {
                if let Err(error) = text_validators::validate_email(text, message) {
                    errors.push(error);
                }
            }
            (
                FieldConstraint::File {
                    max_size,
                    allowed_types,
                    too_large,
                    unsupported_type,
                    ..
                },
                _,
                Some(file),
            ) => {
                if let Err(error) = file_validators::validate_file_size(file, *max_size, too_large) {
                    errors.push(error);
                }
                if let Err(error) = file_validators::validate_content_type(file, allowed_types, unsupported_type) {
                    errors.push(error);
                }
            }
            (FieldConstraint::File { not_a_file, .. }, _, _) => {
                errors.push(FieldError::new(ErrorKind::InvalidType, *not_a_file));
                break;
            }
            _ => {
                errors.push(FieldError::new(
                    ErrorKind::InvalidType,
                    error_messages::expected_string(value.kind_name()),
                ));
                break;
            }
        }
    }

    errors
}

fn check_cross_field(rule: &CrossFieldRule, input: &FormInput) -> Result<(), FieldError> {
    match rule {
        CrossFieldRule::Equals {
            field,
            other,
            message,
            ..
        } => {
            let equal = match (input.text(field), input.text(other)) {
                (Some(left), Some(right)) => left == right,
                _ => input.get(field) == input.get(other),
            };
            if !equal {
                return Err(FieldError::new(ErrorKind::MismatchedConfirmation, *message));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::schema::LengthBound;
    use crate::utils::validation::types::UploadedFile;

    fn profile_schema() -> Schema {
        Schema {
            name: "profile",
            fields: vec![
                FieldSpec::new(
                    "nickname",
                    vec![FieldConstraint::Text {
                        min: Some(LengthBound::with_message(3, "nickname too short")),
                        max: Some(LengthBound::with_message(8, "nickname too long")),
                    }],
                ),
                FieldSpec::new(
                    "contact",
                    vec![
                        FieldConstraint::Email { message: "bad contact" },
                        FieldConstraint::Text {
                            min: Some(LengthBound::new(5)),
                            max: None,
                        },
                    ],
                ),
                FieldSpec::new(
                    "avatar",
                    vec![FieldConstraint::File {
                        max_size: 100,
                        allowed_types: &["image/png"],
                        not_a_file: "need a file",
                        too_large: "avatar too large",
                        unsupported_type: "avatar must be png",
                    }],
                ),
                FieldSpec::new("pin", vec![FieldConstraint::Text { min: Some(LengthBound::new(4)), max: None }]),
                FieldSpec::new("pin_again", vec![FieldConstraint::Text { min: None, max: None }]),
            ],
            cross_field: vec![CrossFieldRule::Equals {
                field: "pin",
                other: "pin_again",
                path: FieldPath::field("pin_again"),
                message: "pins differ",
            }],
        }
    }

    fn valid_profile() -> FormInput {
        FormInput::new()
            .with("nickname", "neo")
            .with("contact", "neo@example.com")
            .with("avatar", UploadedFile::new("neo.png", 99, "image/png"))
            .with("pin", "1234")
            .with("pin_again", "1234")
    }

    #[test]
    fn test_accepts_valid_input_unchanged() {
        let input = valid_profile();
        match validate(&profile_schema(), &input) {
            ValidationResult::Accepted(value) => assert_eq!(value, input),
            ValidationResult::Rejected(errors) => panic!("unexpected rejection: {:?}", errors),
        }
    }

    #[test]
    fn test_strips_undeclared_fields_and_follows_schema_order() {
        let input = FormInput::new()
            .with("extra", "ignored")
            .with("pin_again", "1234")
            .with("pin", "1234")
            .with("avatar", UploadedFile::new("neo.png", 1, "image/png"))
            .with("contact", "neo@example.com")
            .with("nickname", "neo");

        let value = validate(&profile_schema(), &input).into_result().unwrap();
        let names: Vec<&str> = value.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["nickname", "contact", "avatar", "pin", "pin_again"]);
    }

    #[test]
    fn test_collects_every_violation() {
        let input = FormInput::new()
            .with("nickname", "ne")
            .with("contact", "neo")
            .with("avatar", UploadedFile::new("neo.gif", 500, "image/gif"))
            .with("pin", "1234")
            .with("pin_again", "1234");

        let errors = validate(&profile_schema(), &input).into_result().unwrap_err();
        assert_eq!(errors.messages("nickname"), vec!["nickname too short"]);
        assert_eq!(
            errors.messages("contact"),
            vec!["bad contact", "String must contain at least 5 character(s)"]
        );
        assert_eq!(errors.messages("avatar"), vec!["avatar too large", "avatar must be png"]);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_missing_fields_are_required() {
        let errors = validate(&profile_schema(), &FormInput::new()).into_result().unwrap_err();

        for field in ["nickname", "contact", "avatar", "pin", "pin_again"] {
            let reported = errors.get(&FieldPath::field(field)).unwrap();
            assert_eq!(reported.len(), 1);
            assert_eq!(reported[0].kind, ErrorKind::Missing, "Should require field: {}", field);
            assert_eq!(reported[0].message, "Required");
        }
    }

    #[test]
    fn test_wrong_kind_stops_the_field() {
        let input = valid_profile()
            .with("contact", serde_json::Value::from(42))
            .with("avatar", "not a file");
        let errors = validate(&profile_schema(), &input).into_result().unwrap_err();

        let contact = errors.get(&FieldPath::field("contact")).unwrap();
        assert_eq!(contact.len(), 1);
        assert_eq!(contact[0].kind, ErrorKind::InvalidType);
        assert_eq!(contact[0].message, "Expected string, received number");

        assert_eq!(errors.messages("avatar"), vec!["need a file"]);

        let nickname = valid_profile().with("nickname", UploadedFile::new("a.png", 1, "image/png"));
        let errors = validate(&profile_schema(), &nickname).into_result().unwrap_err();
        assert_eq!(errors.messages("nickname"), vec!["Expected string, received file"]);
    }

    #[test]
    fn test_cross_field_error_attaches_to_its_path() {
        let input = valid_profile().with("pin_again", "4321");
        let errors = validate(&profile_schema(), &input).into_result().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.messages("pin_again"), vec!["pins differ"]);
        assert!(errors.messages("pin").is_empty());
        assert_eq!(
            errors.get(&FieldPath::field("pin_again")).unwrap()[0].kind,
            ErrorKind::MismatchedConfirmation
        );
    }

    #[test]
    fn test_cross_field_waits_for_referenced_fields() {
        // "pin" fails its own rule, so the comparison is not made
        let input = valid_profile().with("pin", "12").with("pin_again", "4321");
        let errors = validate(&profile_schema(), &input).into_result().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.messages("pin"), vec!["String must contain at least 4 character(s)"]);

        let input = valid_profile().with("pin_again", serde_json::Value::Null);
        let errors = validate(&profile_schema(), &input).into_result().unwrap_err();
        assert_eq!(errors.messages("pin_again"), vec!["Expected string, received null"]);
    }

    #[test]
    fn test_json_string_values_count_as_text() {
        let json_text = |text: &str| FieldValue::Other(serde_json::Value::from(text));
        let input = valid_profile()
            .with("nickname", json_text("ne"))
            .with("pin_again", json_text("1234"));
        let errors = validate(&profile_schema(), &input).into_result().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.messages("nickname"), vec!["nickname too short"]);

        let input = valid_profile().with("pin_again", json_text("1234"));
        assert!(validate(&profile_schema(), &input).is_accepted());
    }
}
