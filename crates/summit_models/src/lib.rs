//! Model provider integrations for Summit.
//!
//! Each provider lives behind a feature flag and implements
//! [`summit_interface::ModelDriver`].

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, DEFAULT_GEMINI_BASE_URL, GeminiClient, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, PromptFeedback, RequestContent, RequestPart,
    UsageMetadata, from_generate_response, to_generate_request,
};
