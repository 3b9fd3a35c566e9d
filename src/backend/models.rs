//! Définitions des réponses renvoyées par les routes de formulaires.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;

use crate::utils::validation::{FormInput, ValidationErrors, ValidationResult};

/// Résultat d'une validation, tel qu'il est envoyé au client
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormResponse {
    Accepted { value: FormInput },
    Rejected { errors: ValidationErrors },
}

impl From<ValidationResult> for FormResponse {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted(value) => FormResponse::Accepted { value },
            ValidationResult::Rejected(errors) => FormResponse::Rejected { errors },
        }
    }
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        let status = match self {
            FormResponse::Accepted { .. } => StatusCode::OK,
            FormResponse::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(self)).into_response()
    }
}
