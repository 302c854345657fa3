//! Conversions between Summit invocations and the Gemini wire format.

use crate::gemini::dto::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch, InlineData,
    RequestContent, RequestPart, ThinkingConfig, Tool,
};
use summit_core::{ContentPart, GroundingSource, ModelInvocation, ModelReply, TokenUsage};
use summit_error::{GeminiError, GeminiErrorKind};

/// Converts a Summit invocation to a `generateContent` request body.
///
/// User parts keep their order, so an image placed first by the builder is
/// the first part Gemini sees.
pub fn to_generate_request(
    invocation: &ModelInvocation,
) -> Result<GenerateContentRequest, GeminiError> {
    if invocation.parts().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::UnsupportedInvocation(
            "invocation has no content parts".to_string(),
        )));
    }

    let parts = invocation
        .parts()
        .iter()
        .map(|part| match part {
            ContentPart::Text(text) => RequestPart::Text { text: text.clone() },
            ContentPart::InlineData { mime_type, data } => RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                },
            },
        })
        .collect();

    let user_turn = RequestContent {
        role: Some("user".to_string()),
        parts,
    };

    let system_instruction = (!invocation.system_instruction().is_empty()).then(|| {
        RequestContent {
            role: None,
            parts: vec![RequestPart::Text {
                text: invocation.system_instruction().clone(),
            }],
        }
    });

    let generation_config = GenerationConfig::builder()
        .response_mime_type(Some(invocation.response_mime_type().clone()))
        .response_schema(Some(invocation.response_schema().clone()))
        .thinking_config(invocation.thinking_budget().map(|thinking_budget| ThinkingConfig {
            thinking_budget,
        }))
        .build()
        .map_err(|e| {
            GeminiError::new(GeminiErrorKind::UnsupportedInvocation(format!(
                "Failed to build generation config: {}",
                e
            )))
        })?;

    let tools = if *invocation.grounding() {
        vec![Tool {
            google_search: GoogleSearch {},
        }]
    } else {
        Vec::new()
    };

    GenerateContentRequest::builder()
        .contents(vec![user_turn])
        .system_instruction(system_instruction)
        .generation_config(Some(generation_config))
        .tools(tools)
        .build()
        .map_err(|e| {
            GeminiError::new(GeminiErrorKind::UnsupportedInvocation(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Converts a `generateContent` response to a Summit reply.
///
/// Text parts of the first candidate are concatenated; reasoning parts are
/// skipped. No candidate, no content, or only empty text all yield a reply
/// without text.
pub fn from_generate_response(response: &GenerateContentResponse) -> ModelReply {
    let candidate = response.candidates.first();

    let text = candidate
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter(|part| !part.thought.unwrap_or(false))
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .filter(|text| !text.is_empty());

    let sources = candidate
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|metadata| {
            metadata
                .grounding_chunks
                .iter()
                .filter_map(|chunk| chunk.web.as_ref())
                .filter_map(|web| {
                    let uri = web.uri.clone()?;
                    let title = web.title.clone().unwrap_or_else(|| uri.clone());
                    Some(GroundingSource::new(title, uri))
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let usage = response.usage_metadata.as_ref().map(|u| {
        TokenUsage::new(
            u.prompt_token_count.unwrap_or(0),
            u.candidates_token_count.unwrap_or(0),
            u.thoughts_token_count.unwrap_or(0),
        )
    });

    let mut builder = ModelReply::builder().sources(sources);
    if let Some(text) = text {
        builder = builder.text(text);
    }
    if let Some(reason) = candidate.and_then(|c| c.finish_reason.clone()) {
        builder = builder.finish_reason(reason);
    }
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.clone())
    {
        builder = builder.block_reason(reason);
    }
    if let Some(usage) = usage {
        builder = builder.usage(usage);
    }

    // Every field has a default, so building cannot fail.
    builder.build().unwrap_or_default()
}
