//! Gemini REST client.

use crate::gemini::conversions;
use crate::gemini::dto::{ApiErrorEnvelope, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::Client;
use summit_core::{ModelInvocation, ModelReply};
use summit_error::{GeminiError, GeminiErrorKind, SummitResult};
use summit_interface::ModelDriver;
use tracing::{debug, error, instrument, warn};

/// Default endpoint for the Gemini REST API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` endpoint.
///
/// The API key is supplied at construction; the client never reads the
/// environment. Each call is a single attempt with no timeout, so a slow
/// reasoning model is waited on until it answers or the connection fails.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client for `model` against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, GeminiError> {
        Self::new_with_url(api_key, model, DEFAULT_GEMINI_BASE_URL)
    }

    /// Creates a client against a custom base URL (proxies, test servers).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_with_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GeminiError> {
        let model = model.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = Client::builder()
            .user_agent(concat!("summit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %model, url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            base_url,
        })
    }

    /// Full URL of the `generateContent` call for `model`.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// The invocation's model, or the client's own when the invocation names none.
    pub fn resolve_model<'a>(&'a self, invocation: &'a ModelInvocation) -> &'a str {
        let model = invocation.model().trim();
        if model.is_empty() { self.model.as_str() } else { model }
    }

    /// Sends the invocation and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-2xx
    /// status, or the body is not a `generateContent` response.
    #[instrument(skip(self, invocation), fields(model = %invocation.model()))]
    pub async fn generate_content(
        &self,
        invocation: &ModelInvocation,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let request = conversions::to_generate_request(invocation)?;
        let url = self.endpoint(self.resolve_model(invocation));

        debug!(
            parts = request.contents().first().map(|c| c.parts.len()).unwrap_or(0),
            tools = request.tools().len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or(body);
            error!(status = %status, error = %message, "Gemini API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode response");
            GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string()))
        })?;

        let search_queries: Vec<&str> = body
            .candidates
            .iter()
            .filter_map(|c| c.grounding_metadata.as_ref())
            .flat_map(|m| m.web_search_queries.iter().map(String::as_str))
            .collect();
        debug!(
            candidates = body.candidates.len(),
            model_version = body.model_version.as_deref().unwrap_or("unknown"),
            search_queries = ?search_queries,
            "Received response"
        );

        Ok(body)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ModelDriver for GeminiClient {
    #[instrument(skip(self, invocation), fields(provider = "gemini", model = %invocation.model()))]
    async fn invoke(&self, invocation: &ModelInvocation) -> SummitResult<ModelReply> {
        let response = self.generate_content(invocation).await?;
        let reply = conversions::from_generate_response(&response);

        if reply.text().is_none() {
            warn!(
                finish_reason = reply.finish_reason().as_deref().unwrap_or("none"),
                block_reason = reply.block_reason().as_deref().unwrap_or("none"),
                "Model returned no text"
            );
        }
        if let Some(usage) = reply.usage() {
            debug!(
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                thinking_tokens = usage.thinking_tokens(),
                "Token usage"
            );
        }

        Ok(reply)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
