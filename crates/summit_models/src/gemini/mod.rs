//! Gemini provider.
//!
//! Speaks the `generateContent` REST endpoint directly: structured output via
//! `responseSchema`, Google Search grounding via the `googleSearch` tool, and
//! inline images as `inlineData` parts.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_GEMINI_BASE_URL, GeminiClient};
pub use conversions::{from_generate_response, to_generate_request};
pub use dto::{
    Candidate, GenerateContentRequest, GenerateContentResponse, GenerationConfig, PromptFeedback,
    RequestContent, RequestPart, UsageMetadata,
};
