//! Configuration error types.

/// Configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// No API credential was supplied in the config file or environment
    #[display("Missing credential: set {} or api_key in the config file", _0)]
    MissingCredential(String),
    /// Config sources could not be read or merged
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// A config value is out of range or otherwise unusable
    #[display("Invalid configuration value for '{}': {}", key, message)]
    InvalidValue {
        /// Config key
        key: String,
        /// What is wrong with it
        message: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use summit_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingCredential("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.is_missing_credential());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when no credential could be found.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self.kind, ConfigErrorKind::MissingCredential(_))
    }
}
