//! Turns a generation request into a model invocation.

use crate::contract::consultation_schema;
use crate::prompts::{SYSTEM_INSTRUCTION, user_prompt};
use derive_getters::Getters;
use summit_core::{ContentPart, GenerationRequest, InputLimits, ModelInvocation};
use summit_error::{RequestError, RequestErrorKind};
use tracing::{debug, instrument};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Default reasoning budget in tokens.
pub const DEFAULT_THINKING_BUDGET: u32 = 32_768;

/// Assembles [`ModelInvocation`]s from [`GenerationRequest`]s.
///
/// The prelude, missions and schema are fixed; what varies per builder is
/// the target model, the reasoning budget, whether grounding is requested,
/// and the input limits enforced before anything leaves the process.
///
/// # Examples
///
/// ```
/// use summit::InvocationBuilder;
/// use summit_core::GenerationRequest;
///
/// let builder = InvocationBuilder::new("gemini-test").with_thinking_budget(None);
/// let invocation = builder.build(&GenerationRequest::fresh("  lo-fi rain  ")).unwrap();
/// assert_eq!(invocation.model(), "gemini-test");
/// assert!(invocation.text().contains("\"lo-fi rain\""));
/// assert!(invocation.thinking_budget().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct InvocationBuilder {
    model: String,
    thinking_budget: Option<u32>,
    grounding: bool,
    limits: InputLimits,
}

impl InvocationBuilder {
    /// Creates a builder for `model` with grounding on, the default reasoning
    /// budget and default limits.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            thinking_budget: Some(DEFAULT_THINKING_BUDGET),
            grounding: true,
            limits: InputLimits::default(),
        }
    }

    /// Sets the reasoning budget; `None` leaves it to the model.
    pub fn with_thinking_budget(mut self, budget: Option<u32>) -> Self {
        self.thinking_budget = budget;
        self
    }

    /// Enables or disables the grounding directive.
    pub fn with_grounding(mut self, grounding: bool) -> Self {
        self.grounding = grounding;
        self
    }

    /// Sets the input limits.
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Builds the invocation for `request`.
    ///
    /// The request is re-validated first. In image mode the image part comes
    /// first and the text part follows it.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the request violates its invariants or
    /// exceeds the limits.
    #[instrument(skip_all, fields(mode = %request.mode(), model = %self.model))]
    pub fn build(&self, request: &GenerationRequest) -> Result<ModelInvocation, RequestError> {
        let encoded = request.prepare(&self.limits)?;

        let mut parts = Vec::with_capacity(2);
        if let (Some(image), Some(encoded)) = (request.image(), encoded) {
            parts.push(ContentPart::InlineData {
                mime_type: image.mime_type().trim().to_string(),
                data: encoded.into_data(),
            });
        }
        parts.push(ContentPart::Text(user_prompt(
            *request.mode(),
            request.trimmed_text(),
        )));

        debug!(
            parts = parts.len(),
            text_chars = request.trimmed_text().chars().count(),
            grounding = self.grounding,
            "Assembled invocation"
        );

        ModelInvocation::builder()
            .model(self.model.clone())
            .system_instruction(SYSTEM_INSTRUCTION)
            .parts(parts)
            .response_mime_type("application/json")
            .response_schema(consultation_schema())
            .grounding(self.grounding)
            .thinking_budget(self.thinking_budget)
            .build()
            .map_err(|e| RequestError::new(RequestErrorKind::Incomplete(e.to_string())))
    }
}

impl Default for InvocationBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
