//! Gestion des routes de validation des formulaires de compte.
//! Chaque handler construit un `FormInput` à partir de la requête et le
//! soumet au schéma correspondant.

use axum::{extract::Multipart, Json};
use http::StatusCode;
use log::debug;

use crate::backend::models::FormResponse;
use crate::utils::error_messages::{REGISTRATION_ERROR, VALIDATION_ERROR};
use crate::utils::validation::{FormInput, Schema, UploadedFile, LOGIN_SCHEMA, REGISTER_SCHEMA};

/// Type déclaré par défaut pour un fichier envoyé sans `Content-Type`
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Valide le formulaire de connexion (corps JSON)
pub async fn login_form(Json(payload): Json<serde_json::Value>) -> axum::response::Result<FormResponse> {
    let input = FormInput::try_from(payload)
        .map_err(|_| (StatusCode::BAD_REQUEST, VALIDATION_ERROR))?;

    Ok(check(&LOGIN_SCHEMA, &input))
}

/// Valide le formulaire d'inscription (corps multipart avec la photo)
pub async fn register_form(mut multipart: Multipart) -> axum::response::Result<FormResponse> {
    let mut input = FormInput::new();

    // Process each field from the multipart form
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| (StatusCode::BAD_REQUEST, REGISTRATION_ERROR))?
    {
        let name = field
            .name()
            .ok_or((StatusCode::BAD_REQUEST, REGISTRATION_ERROR))?
            .to_string();

        let filename = field.file_name().map(str::to_string);
        match filename {
            Some(filename) => {
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| (StatusCode::BAD_REQUEST, REGISTRATION_ERROR))?;

                input.insert(&name, UploadedFile::new(&filename, bytes.len() as u64, &content_type));
            }
            None => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| (StatusCode::BAD_REQUEST, REGISTRATION_ERROR))?;

                input.insert(&name, text);
            }
        }
    }

    Ok(check(&REGISTER_SCHEMA, &input))
}

fn check(schema: &Schema, input: &FormInput) -> FormResponse {
    let result = schema.validate(input);
    if let Some(errors) = result.errors() {
        debug!("{} form rejected: {}", schema.name, errors);
    }
    result.into()
}
