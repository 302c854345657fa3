//! Error types for the Summit production consultation client.
//!
//! Each concern owns a location-tracked error struct. [`SummitError`] unifies
//! them so the caller-facing API can return a single error type while the
//! original error, with its kind and origin, is kept intact.

mod config;
mod gemini;
mod request;
mod response;

pub use config::{ConfigError, ConfigErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use request::{RequestError, RequestErrorKind};
pub use response::{ResponseParseError, ResponseParseErrorKind};

/// Every error the Summit crates can surface.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum SummitErrorKind {
    /// Configuration or credential problem
    #[display("{}", _0)]
    Config(ConfigError),
    /// Generation request violates its invariants
    #[display("{}", _0)]
    Request(RequestError),
    /// Model transport or API failure
    #[display("{}", _0)]
    Gemini(GeminiError),
    /// Model output missing or not a valid consultation
    #[display("{}", _0)]
    Response(ResponseParseError),
}

/// Top-level error wrapper.
///
/// # Examples
///
/// ```
/// use summit_error::{ResponseParseError, ResponseParseErrorKind, SummitError, SummitErrorKind};
///
/// let err: SummitError = ResponseParseError::new(ResponseParseErrorKind::Empty).into();
/// assert!(matches!(err.kind(), SummitErrorKind::Response(_)));
/// assert!(err.to_string().starts_with("Summit Error: Response Parse Error"));
/// ```
#[derive(Debug, derive_more::Display)]
#[display("Summit Error: {}", _0)]
pub struct SummitError(Box<SummitErrorKind>);

impl SummitError {
    /// Create a new error from a kind.
    pub fn new(kind: SummitErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// The underlying error kind.
    pub fn kind(&self) -> &SummitErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> SummitErrorKind {
        *self.0
    }
}

impl std::error::Error for SummitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            SummitErrorKind::Config(e) => Some(e),
            SummitErrorKind::Request(e) => Some(e),
            SummitErrorKind::Gemini(e) => Some(e),
            SummitErrorKind::Response(e) => Some(e),
        }
    }
}

impl<T> From<T> for SummitError
where
    T: Into<SummitErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result alias used across the Summit crates.
pub type SummitResult<T> = Result<T, SummitError>;
