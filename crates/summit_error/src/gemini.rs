//! Gemini transport error types.
//!
//! Everything that goes wrong between handing an invocation to the Gemini
//! driver and receiving a decodable `generateContent` body. These errors are
//! surfaced to the caller unchanged; nothing here is retried.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Request could not be sent or the connection dropped
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body was not a valid `generateContent` payload
    ResponseDecode(String),
    /// Invocation cannot be expressed in the Gemini wire format
    UnsupportedInvocation(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::ResponseDecode(msg) => {
                write!(f, "Failed to decode Gemini response: {}", msg)
            }
            GeminiErrorKind::UnsupportedInvocation(msg) => {
                write!(f, "Unsupported invocation for Gemini: {}", msg)
            }
        }
    }
}

impl GeminiErrorKind {
    /// True for authentication and permission failures (401/403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::HttpError {
                status_code: 401 | 403,
                ..
            }
        )
    }

    /// True when the service rejected the call for quota reasons (429).
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::HttpError {
                status_code: 429,
                ..
            }
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use summit_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "Resource has been exhausted".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 429"));
/// assert!(err.kind.is_quota_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
