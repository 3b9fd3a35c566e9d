//! Descriptor of a file attached to a form submission.
//!
//! Only the metadata the browser declares is kept: the rules on uploads look at
//! the size and the declared content type, never at the bytes themselves.

use serde::{Deserialize, Serialize};

/// An uploaded file as described by the submitting client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DeclaredFile")]
pub struct UploadedFile {
    /// Original filename, without any path component
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type, e.g. `image/png`
    #[serde(rename = "type")]
    pub content_type: String,
}

impl UploadedFile {
    pub fn new(name: &str, size: u64, content_type: &str) -> Self {
        Self {
            name: sanitize_filename(name),
            size,
            content_type: content_type.trim().to_string(),
        }
    }
}

/// File descriptor as received in a JSON payload, cleaned up through
/// [`UploadedFile::new`] like a multipart upload
#[derive(Deserialize)]
struct DeclaredFile {
    name: String,
    size: u64,
    #[serde(rename = "type")]
    content_type: String,
}

impl From<DeclaredFile> for UploadedFile {
    fn from(file: DeclaredFile) -> Self {
        UploadedFile::new(&file.name, file.size, &file.content_type)
    }
}

/// Keeps only the last path component so a crafted name cannot point elsewhere
fn sanitize_filename(filename: &str) -> String {
    filename
        .trim()
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .to_string()
}
