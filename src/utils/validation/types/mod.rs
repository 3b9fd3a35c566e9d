//! Type definitions for the validation system

mod file_input;
mod form_input;

// Re-export commonly used types and functions
pub use file_input::UploadedFile;
pub use form_input::{FieldValue, FormInput, MalformedForm};
