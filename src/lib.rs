//! Formulaires de compte de l'application de bibliothèque : schémas de
//! validation, contexte de session côté client et client de l'API.

pub mod backend;
pub mod client;
pub mod config;
pub mod consts;
pub mod session;
pub mod utils;

pub use client::{ApiClient, ClientError, Mode};
pub use config::Config;
pub use session::{SessionContext, SessionUser, UserRole};
pub use utils::validation::{
    validate, FormInput, LoginForm, RegisterForm, Schema, UploadedFile, ValidationErrors, ValidationResult,
    LOGIN_SCHEMA, REGISTER_SCHEMA,
};
