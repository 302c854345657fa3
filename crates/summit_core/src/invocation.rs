//! The assembled payload handed to the model driver.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One ordered piece of user content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text
    Text(String),
    /// Inline binary data, base64-encoded
    InlineData {
        /// MIME type of the data
        mime_type: String,
        /// Base64 payload
        data: String,
    },
}

impl ContentPart {
    /// The text of a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::InlineData { .. } => None,
        }
    }

    /// True for inline binary parts.
    pub fn is_inline_data(&self) -> bool {
        matches!(self, ContentPart::InlineData { .. })
    }
}

/// A fully assembled model call.
///
/// Carries the system instruction, the ordered user parts, the declared
/// output schema and the directives the model must honour. Built by the
/// request builder and consumed by a `ModelDriver`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ModelInvocation {
    /// Model identifier
    model: String,
    /// Fixed instruction prelude
    system_instruction: String,
    /// User content, in the order the model must see it
    parts: Vec<ContentPart>,
    /// MIME type of the structured output
    #[builder(default = "\"application/json\".to_string()")]
    response_mime_type: String,
    /// Declared output schema
    response_schema: serde_json::Value,
    /// Whether the model should ground its answer with external search
    #[builder(default = "true")]
    grounding: bool,
    /// Reasoning token budget, if the model supports one
    #[builder(default)]
    thinking_budget: Option<u32>,
}

impl ModelInvocation {
    /// Returns a builder for an invocation.
    pub fn builder() -> ModelInvocationBuilder {
        ModelInvocationBuilder::default()
    }

    /// All text parts joined with newlines.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of inline binary parts.
    pub fn inline_data_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_inline_data()).count()
    }
}
