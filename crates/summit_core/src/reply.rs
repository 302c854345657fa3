//! What a model driver hands back.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TokenUsage {
    /// Tokens in the prompt, including inline media
    input_tokens: u64,
    /// Tokens in the visible answer
    output_tokens: u64,
    /// Tokens spent on reasoning
    thinking_tokens: u64,
}

impl TokenUsage {
    /// Creates a usage record.
    pub fn new(input_tokens: u64, output_tokens: u64, thinking_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            thinking_tokens,
        }
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens + self.thinking_tokens
    }
}

/// A web page the model consulted while grounding its answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GroundingSource {
    title: String,
    uri: String,
}

impl GroundingSource {
    /// Creates a source entry.
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Raw model output plus call metadata.
///
/// `text` is `None` when the model produced nothing usable, for example when
/// the prompt was blocked or the candidate was filtered.
///
/// # Examples
///
/// ```
/// use summit_core::ModelReply;
///
/// let reply = ModelReply::builder().text("{}").build().unwrap();
/// assert_eq!(reply.text().as_deref(), Some("{}"));
/// assert!(reply.sources().is_empty());
///
/// let silent = ModelReply::empty();
/// assert!(silent.text().is_none());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned", default)]
pub struct ModelReply {
    /// Concatenated answer text
    #[builder(setter(into, strip_option))]
    text: Option<String>,
    /// Why generation stopped
    #[builder(setter(into, strip_option))]
    finish_reason: Option<String>,
    /// Why the prompt was blocked, if it was
    #[builder(setter(into, strip_option))]
    block_reason: Option<String>,
    /// Token accounting
    #[builder(setter(into, strip_option))]
    usage: Option<TokenUsage>,
    /// Pages consulted for grounding
    sources: Vec<GroundingSource>,
}

impl ModelReply {
    /// Returns a builder for a reply.
    pub fn builder() -> ModelReplyBuilder {
        ModelReplyBuilder::default()
    }

    /// A reply carrying no text.
    pub fn empty() -> Self {
        Self::default()
    }
}
