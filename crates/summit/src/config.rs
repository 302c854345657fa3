//! Layered configuration.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file, then
//! `SUMMIT_*` environment variables. The credential is resolved once, at
//! load time, and then travels inside [`SummitConfig`]; nothing downstream
//! reads the environment.

use crate::builder::{DEFAULT_MODEL, DEFAULT_THINKING_BUDGET, InvocationBuilder};
use config::{Config, Environment, File};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use summit_core::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MAX_TEXT_CHARS, InputLimits};
use summit_error::{ConfigError, ConfigErrorKind};
use tracing::{debug, instrument};

/// Environment variables consulted for the API key, in order.
pub const CREDENTIAL_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// File name looked up in the user config directory.
pub const CONFIG_FILE_NAME: &str = "summit.toml";

/// Runtime configuration.
///
/// A `thinking_budget` of 0 omits the reasoning budget from the request.
#[derive(Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct SummitConfig {
    /// API key; resolved from the environment when not set
    #[serde(default)]
    api_key: Option<String>,
    /// Model identifier
    model: String,
    /// API base URL
    base_url: String,
    /// Reasoning budget in tokens
    thinking_budget: u32,
    /// Request Google Search grounding
    grounding: bool,
    /// Maximum characters of user text
    max_text_chars: usize,
    /// Maximum decoded image bytes
    max_image_bytes: usize,
}

impl SummitConfig {
    /// Loads configuration and resolves the credential from the environment.
    ///
    /// With `path`, that file must exist. Without it, `summit.toml` in the
    /// user config directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value is invalid. A
    /// missing credential is not an error here; see [`credential`](Self::credential).
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Some((path.to_path_buf(), true)),
            None => default_config_path().map(|p| (p, false)),
        };

        let config = Self::from_sources(file, Environment::with_prefix("SUMMIT").try_parsing(true))?
            .with_credential_from(|name| std::env::var(name).ok());

        debug!(
            model = %config.model,
            grounding = config.grounding,
            has_credential = config.api_key.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Loads configuration from an explicit file source and environment source.
    pub fn from_sources(
        file: Option<(PathBuf, bool)>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let load_err = |e: config::ConfigError| ConfigError::new(ConfigErrorKind::Load(e.to_string()));

        let mut builder = Config::builder()
            .set_default("model", DEFAULT_MODEL)
            .and_then(|b| b.set_default("base_url", DEFAULT_BASE_URL))
            .and_then(|b| b.set_default("thinking_budget", i64::from(DEFAULT_THINKING_BUDGET)))
            .and_then(|b| b.set_default("grounding", true))
            .and_then(|b| b.set_default("max_text_chars", DEFAULT_MAX_TEXT_CHARS as i64))
            .and_then(|b| b.set_default("max_image_bytes", DEFAULT_MAX_IMAGE_BYTES as i64))
            .map_err(load_err)?;

        if let Some((path, required)) = file {
            builder = builder.add_source(File::from(path).required(required));
        }

        let config: Self = builder
            .add_source(environment)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(load_err)?;

        config.validate()?;
        Ok(config)
    }

    /// Fills in the API key from the first non-empty credential variable if
    /// none was configured.
    pub fn with_credential_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let configured = self
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        if !configured {
            self.api_key = CREDENTIAL_VARS
                .iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.trim().is_empty());
        }
        self
    }

    /// Replaces the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The API key.
    ///
    /// # Errors
    ///
    /// Returns a missing-credential error if none was configured or found.
    pub fn credential(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConfigError::new(ConfigErrorKind::MissingCredential(CREDENTIAL_VARS.join(" or ")))
            })
    }

    /// Input limits from the configured maxima.
    pub fn limits(&self) -> InputLimits {
        InputLimits::new(self.max_text_chars, self.max_image_bytes)
    }

    /// An invocation builder reflecting this configuration.
    pub fn invocation_builder(&self) -> InvocationBuilder {
        InvocationBuilder::new(self.model.clone())
            .with_thinking_budget((self.thinking_budget > 0).then_some(self.thinking_budget))
            .with_grounding(self.grounding)
            .with_limits(self.limits())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| {
            Err(ConfigError::new(ConfigErrorKind::InvalidValue {
                key: key.to_string(),
                message: message.to_string(),
            }))
        };

        if self.model.trim().is_empty() {
            return invalid("model", "must not be empty");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return invalid("base_url", "must be an http(s) URL");
        }
        if self.max_text_chars == 0 {
            return invalid("max_text_chars", "must be greater than zero");
        }
        if self.max_image_bytes == 0 {
            return invalid("max_image_bytes", "must be greater than zero");
        }
        Ok(())
    }
}

impl std::fmt::Debug for SummitConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummitConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("thinking_budget", &self.thinking_budget)
            .field("grounding", &self.grounding)
            .field("max_text_chars", &self.max_text_chars)
            .field("max_image_bytes", &self.max_image_bytes)
            .finish()
    }
}

/// `summit.toml` in the platform config directory, e.g. `~/.config/summit/`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("summit").join(CONFIG_FILE_NAME))
}
