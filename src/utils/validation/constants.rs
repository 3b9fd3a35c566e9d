//! Constants used throughout the validation system

/// Minimum length for usernames
pub const MIN_USERNAME_LENGTH: usize = 2;
/// Maximum length for usernames
pub const MAX_USERNAME_LENGTH: usize = 50;
/// Minimum length for passwords
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Maximum length for passwords
pub const MAX_PASSWORD_LENGTH: usize = 100;
/// Minimum length for display names and email addresses
pub const MIN_NAME_LENGTH: usize = 2;
/// Maximum length for display names and email addresses
pub const MAX_NAME_LENGTH: usize = 255;

/// Uploaded photos must be strictly smaller than this many bytes
pub const MAX_PHOTO_SIZE: u64 = 2_000_000;
/// Declared content types accepted for profile photos
pub const ALLOWED_PHOTO_TYPES: &[&str] = &["image/jpeg", "image/png"];
