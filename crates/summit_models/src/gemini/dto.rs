//! Data transfer objects for the Gemini `generateContent` endpoint.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline binary data in a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the data
    pub mime_type: String,
    /// Base64 payload
    pub data: String,
}

/// One part of a content block.
///
/// Gemini distinguishes part kinds by which key is present, so each variant
/// serializes as a single-key object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    /// `{"text": ...}`
    Text {
        /// Text content
        text: String,
    },
    /// `{"inlineData": {...}}`
    InlineData {
        /// Inline payload
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// A content block in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContent {
    /// Author role; omitted for the system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts
    pub parts: Vec<RequestPart>,
}

/// Reasoning configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Maximum reasoning tokens
    pub thinking_budget: u32,
}

/// Output constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerationConfig {
    /// MIME type of the response, e.g. "application/json"
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Schema the response must conform to
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    /// Reasoning budget
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

impl GenerationConfig {
    /// Creates a new builder for GenerationConfig.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// Marker object enabling Google Search grounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GoogleSearch {}

/// A tool made available to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Google Search grounding
    pub google_search: GoogleSearch,
}

/// Gemini `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn here
    contents: Vec<RequestContent>,
    /// System instruction
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent>,
    /// Output constraints
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    /// Enabled tools
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A part in a response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    /// Text, if this is a text part
    #[serde(default)]
    pub text: Option<String>,
    /// True when the part is a reasoning summary rather than answer text
    #[serde(default)]
    pub thought: Option<bool>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseContent {
    /// Parts of the answer
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    /// Author role, normally "model"
    #[serde(default)]
    pub role: Option<String>,
}

/// A web source in grounding metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebChunk {
    /// Page URI
    #[serde(default)]
    pub uri: Option<String>,
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
}

/// One grounding chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    /// Web source, when the chunk came from search
    #[serde(default)]
    pub web: Option<WebChunk>,
}

/// Grounding metadata attached to a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Sources consulted
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
    /// Queries the model issued
    #[serde(default)]
    pub web_search_queries: Vec<String>,
}

/// A response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Answer content; absent when the candidate was filtered
    #[serde(default)]
    pub content: Option<ResponseContent>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
    /// Grounding metadata
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: Option<u64>,
    /// Tokens across candidates
    #[serde(default)]
    pub candidates_token_count: Option<u64>,
    /// Reasoning tokens
    #[serde(default)]
    pub thoughts_token_count: Option<u64>,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: Option<u64>,
}

/// Gemini `generateContent` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates; empty when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token usage
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    /// Model version that served the call
    #[serde(default)]
    pub model_version: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error details
    pub error: ApiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}
