//! Structured response parse errors.

/// Why model output could not be turned into a consultation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ResponseParseErrorKind {
    /// The model returned no text (declined, filtered, or empty candidate)
    #[display("No response text received from the model")]
    Empty,
    /// Text was not valid JSON or did not match the consultation schema
    #[display("Malformed consultation: {}", _0)]
    Malformed(String),
}

/// Structured response parse error with location tracking.
///
/// # Examples
///
/// ```
/// use summit_error::{ResponseParseError, ResponseParseErrorKind};
///
/// let err = ResponseParseError::new(ResponseParseErrorKind::Empty);
/// assert!(err.is_empty());
/// assert!(format!("{}", err).contains("No response text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Response Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ResponseParseError {
    /// The kind of error that occurred
    pub kind: ResponseParseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ResponseParseError {
    /// Create a new parse error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResponseParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the model produced no text at all.
    pub fn is_empty(&self) -> bool {
        self.kind == ResponseParseErrorKind::Empty
    }

    /// True when text was produced but did not satisfy the schema.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ResponseParseErrorKind::Malformed(_))
    }
}
