//! Image upload validation and data-URI encoding.
//!
//! Uploaded images are never written to disk: once an image passes the
//! type and size checks it is base64-encoded into a `data:` URI, and that
//! string is what gets stored in the entity's URL field.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CoreError;

/// Maximum accepted size of a single uploaded image (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for image uploads.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Strip parameters (`; charset=...`) and normalise case.
fn essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

/// Whether `mime` is one of the accepted image types.
pub fn validate_type(mime: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&essence(mime).as_str())
}

/// Whether an image of `len` bytes is within the upload ceiling.
pub fn validate_size(len: usize) -> bool {
    len <= MAX_UPLOAD_BYTES
}

/// Encode `bytes` as a base64 `data:` URI tagged with `mime`.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", essence(mime), STANDARD.encode(bytes))
}

/// Split a base64 `data:` URI back into its MIME type and raw bytes.
///
/// Returns `None` for anything that is not a well-formed base64 data URI.
pub fn decode_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

/// Human-readable size, e.g. `512 B`, `3.2 KB`, `6.0 MB`.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

/// Validate one named image part and encode it.
///
/// The error message names the form field and the violated constraint.
pub fn check_image(field: &str, mime: &str, bytes: &[u8]) -> Result<String, CoreError> {
    if !validate_type(mime) {
        return Err(CoreError::Validation(format!(
            "Invalid file type for '{field}' ({}). Only JPEG, PNG, GIF, and WebP images are allowed.",
            essence(mime)
        )));
    }
    if !validate_size(bytes.len()) {
        return Err(CoreError::Validation(format!(
            "File '{field}' is too large ({}). Maximum size is {}.",
            format_size(bytes.len()),
            format_size(MAX_UPLOAD_BYTES)
        )));
    }
    Ok(to_data_uri(mime, bytes))
}
