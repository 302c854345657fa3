//! Malformed request errors.

/// Ways a generation request can violate its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// Text is empty or whitespace in a mode that needs it
    #[display("{} mode requires non-empty text", mode)]
    EmptyText {
        /// Mode name
        mode: String,
    },
    /// Image mode without an image
    #[display("image mode requires an image")]
    MissingImage,
    /// An image was attached in a text-only mode
    #[display("{} mode does not accept an image", mode)]
    UnexpectedImage {
        /// Mode name
        mode: String,
    },
    /// Image carries no data
    #[display("image data is empty")]
    EmptyImage,
    /// MIME type missing or not an image type
    #[display("unsupported image MIME type '{}'", _0)]
    InvalidMimeType(String),
    /// Base64 payload does not decode
    #[display("image data is not valid base64: {}", _0)]
    InvalidEncoding(String),
    /// Text exceeds the configured character limit
    #[display("text is {} characters, limit is {}", length, limit)]
    TextTooLong {
        /// Characters supplied
        length: usize,
        /// Configured maximum
        limit: usize,
    },
    /// Image exceeds the configured size limit
    #[display("image is {} bytes, limit is {}", size, limit)]
    ImageTooLarge {
        /// Decoded bytes supplied
        size: usize,
        /// Configured maximum
        limit: usize,
    },
    /// Request could not be assembled from its parts
    #[display("incomplete request: {}", _0)]
    Incomplete(String),
}

/// A generation request that violates its invariants.
///
/// # Examples
///
/// ```
/// use summit_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::MissingImage);
/// assert!(format!("{}", err).starts_with("Malformed Request: image mode requires an image"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Request: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The kind of error that occurred
    pub kind: RequestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RequestError {
    /// Create a new request error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
