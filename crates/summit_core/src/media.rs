//! Inline image data for image-mode requests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use summit_error::{RequestError, RequestErrorKind};

/// Where image bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content. A `data:<mime>;base64,` prefix, as produced by
    /// a browser `FileReader`, and embedded line breaks are tolerated.
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

/// Base64 payload ready for the wire, with the size it decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EncodedMedia {
    /// Standard base64 without prefix or whitespace
    data: String,
    /// Decoded size in bytes
    size: usize,
}

impl EncodedMedia {
    /// Consumes the payload, returning the base64 text.
    pub fn into_data(self) -> String {
        self.data
    }
}

/// Strips a data-URL header and ASCII whitespace from a base64 string.
fn base64_payload(data: &str) -> String {
    let data = data.trim();
    data.strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .map_or(data, |(_, body)| body)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect()
}

impl MediaSource {
    /// Encodes the content as standard base64, the form the model expects.
    ///
    /// Base64 payloads are normalised and decoded exactly once, so invalid
    /// data is reported here rather than by the remote service.
    pub fn encode(&self) -> Result<EncodedMedia, RequestError> {
        match self {
            MediaSource::Base64(data) => {
                let data = base64_payload(data);
                let size = STANDARD
                    .decode(&data)
                    .map_err(|e| RequestError::new(RequestErrorKind::InvalidEncoding(e.to_string())))?
                    .len();
                Ok(EncodedMedia { data, size })
            }
            MediaSource::Binary(bytes) => Ok(EncodedMedia {
                data: STANDARD.encode(bytes),
                size: bytes.len(),
            }),
        }
    }

    /// True if there is no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            MediaSource::Base64(data) => base64_payload(data).is_empty(),
            MediaSource::Binary(bytes) => bytes.is_empty(),
        }
    }
}

/// An image attached to a request, with its MIME type.
///
/// # Examples
///
/// ```
/// use summit_core::{ImagePart, MediaSource};
///
/// let image = ImagePart::new("image/png", MediaSource::Binary(vec![0x89, b'P', b'N', b'G']));
/// assert_eq!(image.mime_type(), "image/png");
///
/// let encoded = image.encode().unwrap();
/// assert_eq!(encoded.data(), "iVBORw==");
/// assert_eq!(*encoded.size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImagePart {
    /// MIME type, e.g. "image/png" or "image/jpeg"
    mime_type: String,
    /// Image content
    source: MediaSource,
}

impl ImagePart {
    /// Creates an image part.
    pub fn new(mime_type: impl Into<String>, source: MediaSource) -> Self {
        Self {
            mime_type: mime_type.into(),
            source,
        }
    }

    /// Checks the MIME type and payload and encodes the image.
    pub fn encode(&self) -> Result<EncodedMedia, RequestError> {
        let mime = self.mime_type.trim();
        if !mime.starts_with("image/") || mime.len() == "image/".len() {
            return Err(RequestError::new(RequestErrorKind::InvalidMimeType(
                self.mime_type.clone(),
            )));
        }
        if self.source.is_empty() {
            return Err(RequestError::new(RequestErrorKind::EmptyImage));
        }
        let encoded = self.source.encode()?;
        if encoded.size == 0 {
            return Err(RequestError::new(RequestErrorKind::EmptyImage));
        }
        Ok(encoded)
    }
}

/// Guess an image MIME type from a file extension.
///
/// Covers the formats the Gemini API accepts for inline images.
pub fn image_mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_source_is_trimmed_and_checked() {
        let source = MediaSource::Base64("  aGVsbG8=\n".to_string());
        assert_eq!(source.encode().unwrap().data(), "aGVsbG8=");
        assert_eq!(*source.encode().unwrap().size(), 5);

        let bad = MediaSource::Base64("not base64!".to_string());
        let err = bad.encode().unwrap_err();
        assert!(matches!(err.kind, RequestErrorKind::InvalidEncoding(_)));
    }

    #[test]
    fn test_encode_rejects_non_image_mime() {
        let part = ImagePart::new("application/pdf", MediaSource::Binary(vec![1, 2, 3]));
        let err = part.encode().unwrap_err();
        assert!(matches!(err.kind, RequestErrorKind::InvalidMimeType(_)));

        let part = ImagePart::new("image/", MediaSource::Binary(vec![1]));
        assert!(part.encode().is_err());
    }

    #[test]
    fn test_encode_rejects_empty_payload() {
        let part = ImagePart::new("image/jpeg", MediaSource::Base64(String::new()));
        let err = part.encode().unwrap_err();
        assert_eq!(err.kind, RequestErrorKind::EmptyImage);
    }

    #[test]
    fn test_data_url_prefix_and_line_breaks_are_accepted() {
        let source = MediaSource::Base64("data:image/png;base64,iVBORw0KGgo=".to_string());
        let encoded = source.encode().unwrap();
        assert_eq!(encoded.data(), "iVBORw0KGgo=");
        assert_eq!(*encoded.size(), 8);

        let wrapped = MediaSource::Base64("aGVsbG8g\r\nd29y\nbGQ=".to_string());
        let encoded = wrapped.encode().unwrap();
        assert_eq!(encoded.data(), "aGVsbG8gd29ybGQ=");
        assert_eq!(*encoded.size(), 11);

        let header_only = ImagePart::new(
            "image/png",
            MediaSource::Base64("data:image/png;base64,".to_string()),
        );
        let err = header_only.encode().unwrap_err();
        assert_eq!(err.kind, RequestErrorKind::EmptyImage);
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(image_mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(image_mime_for_extension("webp"), Some("image/webp"));
        assert_eq!(image_mime_for_extension("txt"), None);
    }
}
