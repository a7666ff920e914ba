// src/util/image.rs
use crate::constants::ACCEPTED_IMAGE_EXTENSIONS;
use crate::domain::DomainError;

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff];

/// MIME type for an accepted image file name, by extension.
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Validate an attachment as PNG or JPEG and return its content type.
///
/// Checks both the extension and the file's magic bytes so a mislabeled
/// file is rejected before the note record is created.
pub fn validate_attachment(file_name: &str, bytes: &[u8]) -> Result<&'static str, DomainError> {
    let content_type = content_type_for(file_name).ok_or_else(|| DomainError::InvalidImage {
        file_name: file_name.to_string(),
        reason: format!(
            "unsupported extension (accepted: {})",
            ACCEPTED_IMAGE_EXTENSIONS.join(", ")
        ),
    })?;

    let magic_ok = match content_type {
        "image/png" => bytes.starts_with(PNG_MAGIC),
        "image/jpeg" => bytes.starts_with(JPEG_MAGIC),
        _ => false,
    };
    if !magic_ok {
        return Err(DomainError::InvalidImage {
            file_name: file_name.to_string(),
            reason: "file content does not match its extension".to_string(),
        });
    }

    Ok(content_type)
}
