//! Generation requests.

use crate::{EncodedMedia, ImagePart, InputLimits, Mode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use summit_error::{RequestError, RequestErrorKind};

/// One user submission: a mode, the user's text, and an optional image.
///
/// # Examples
///
/// ```
/// use summit_core::{GenerationRequest, InputLimits, Mode};
///
/// let request = GenerationRequest::audit("[Verse 1]\nneon lights");
/// assert_eq!(*request.mode(), Mode::Audit);
/// assert!(request.validate(&InputLimits::default()).is_ok());
///
/// let blank = GenerationRequest::fresh("   ");
/// assert!(blank.validate(&InputLimits::default()).is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct GenerationRequest {
    /// Which mission the panel runs
    mode: Mode,
    /// Concept, draft, or note accompanying an image
    #[builder(default)]
    #[serde(default)]
    text: String,
    /// Image for image mode
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<ImagePart>,
}

impl GenerationRequest {
    /// Returns a builder for a request.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// A fresh-concept request.
    pub fn fresh(text: impl Into<String>) -> Self {
        Self {
            mode: Mode::Fresh,
            text: text.into(),
            image: None,
        }
    }

    /// A draft-audit request.
    pub fn audit(text: impl Into<String>) -> Self {
        Self {
            mode: Mode::Audit,
            text: text.into(),
            image: None,
        }
    }

    /// An image-analysis request with an optional note.
    pub fn from_image(image: ImagePart, note: impl Into<String>) -> Self {
        Self {
            mode: Mode::Image,
            text: note.into(),
            image: Some(image),
        }
    }

    /// The user text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Checks the mode invariants and size limits.
    ///
    /// Text is required for fresh and audit requests, an image is required
    /// for image requests and rejected otherwise. Text length is counted in
    /// characters after trimming; image size in decoded bytes.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), RequestError> {
        self.prepare(limits).map(|_| ())
    }

    /// Validates like [`validate`](Self::validate) and returns the encoded
    /// image, if any, so the payload is decoded only once.
    pub fn prepare(&self, limits: &InputLimits) -> Result<Option<EncodedMedia>, RequestError> {
        let text = self.trimmed_text();

        if self.mode.requires_text() && text.is_empty() {
            return Err(RequestError::new(RequestErrorKind::EmptyText {
                mode: self.mode.to_string(),
            }));
        }

        let length = text.chars().count();
        if length > *limits.max_text_chars() {
            return Err(RequestError::new(RequestErrorKind::TextTooLong {
                length,
                limit: *limits.max_text_chars(),
            }));
        }

        match (&self.image, self.mode.requires_image()) {
            (None, true) => Err(RequestError::new(RequestErrorKind::MissingImage)),
            (Some(_), false) => Err(RequestError::new(RequestErrorKind::UnexpectedImage {
                mode: self.mode.to_string(),
            })),
            (Some(image), true) => {
                let encoded = image.encode()?;
                if *encoded.size() > *limits.max_image_bytes() {
                    return Err(RequestError::new(RequestErrorKind::ImageTooLarge {
                        size: *encoded.size(),
                        limit: *limits.max_image_bytes(),
                    }));
                }
                Ok(Some(encoded))
            }
            (None, false) => Ok(None),
        }
    }
}

impl GenerationRequestBuilder {
    /// Builds the request and checks it against `limits`.
    pub fn build_validated(self, limits: &InputLimits) -> Result<GenerationRequest, RequestError> {
        let request = self
            .build()
            .map_err(|e| RequestError::new(RequestErrorKind::Incomplete(e.to_string())))?;
        request.validate(limits)?;
        Ok(request)
    }
}
