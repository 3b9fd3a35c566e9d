//! Messages displayed next to form fields and returned by the form endpoints

pub const VALIDATION_ERROR: &str = "Validation failed";

pub const LOGIN_ERROR: &str = "Login failed";

pub const REGISTRATION_ERROR: &str = "Registration failed";

pub const REQUIRED: &str = "Required";

// Login form
pub const USERNAME_TOO_SHORT: &str = "Username too short";
pub const USERNAME_TOO_LONG: &str = "Username too long";
pub const PASSWORD_TOO_SHORT: &str = "Password too short";
pub const PASSWORD_TOO_LONG: &str = "Password too long";

// Registration form
pub const NAME_TOO_SHORT: &str = "Name must contain at least 2 characters";
pub const INVALID_EMAIL: &str = "Please provide a valid email address.";
pub const PHOTO_NOT_A_FILE: &str = "Please upload a file.";
pub const PHOTO_TOO_LARGE: &str = "Max 2 MB upload size.";
pub const PHOTO_UNSUPPORTED_TYPE: &str = "Only JPEG or PNG files are allowed.";
pub const REGISTER_USERNAME_TOO_SHORT: &str = "Username must contain at least 2 characters";
pub const REGISTER_USERNAME_TOO_LONG: &str = "Username must contain less than 50 characters";
pub const REGISTER_PASSWORD_TOO_SHORT: &str = "Password must contain at least 6 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Fallback for a minimum length bound declared without its own message
pub fn too_short(min: usize) -> String {
    format!("String must contain at least {} character(s)", min)
}

/// Fallback for a maximum length bound declared without its own message
pub fn too_long(max: usize) -> String {
    format!("String must contain at most {} character(s)", max)
}

/// Message for a text field that received some other kind of value
pub fn expected_string(received: &str) -> String {
    format!("Expected string, received {}", received)
}
