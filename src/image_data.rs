use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

use crate::constants::DEFAULT_IMAGE_MIME;
use crate::error::ImageDataError;

/// Bytes behind a `data:` image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub fn png_data_uri(base64_payload: &str) -> String {
    format!("data:{DEFAULT_IMAGE_MIME};base64,{base64_payload}")
}

pub fn decode_data_uri(uri: &str) -> Result<DecodedImage, ImageDataError> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or(ImageDataError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageDataError::NotDataUri)?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or(ImageDataError::NotBase64)?;
    let mime_type = if mime_type.is_empty() {
        DEFAULT_IMAGE_MIME
    } else {
        mime_type
    };

    let bytes = BASE64_ENGINE.decode(payload.trim())?;

    Ok(DecodedImage {
        mime_type: mime_type.to_string(),
        bytes,
    })
}
