//! File-specific validation functions

use crate::utils::validation::errors::{ErrorKind, FieldError};
use crate::utils::validation::types::UploadedFile;

/// Validates that the file is strictly smaller than `max_size` bytes
pub fn validate_file_size(file: &UploadedFile, max_size: u64, message: &str) -> Result<(), FieldError> {
    if file.size >= max_size {
        return Err(FieldError::new(ErrorKind::FileTooLarge, message));
    }
    Ok(())
}

/// Validates the declared content type against an allow-list
pub fn validate_content_type(
    file: &UploadedFile,
    allowed_types: &[&str],
    message: &str,
) -> Result<(), FieldError> {
    if !allowed_types.iter().any(|&allowed| allowed == file.content_type) {
        return Err(FieldError::new(ErrorKind::UnsupportedFileType, message));
    }
    Ok(())
}
