//! The structured response contract.
//!
//! [`consultation_schema`] is what the model is told to produce; [`parse`] is
//! what the caller accepts. The two describe the same shape. The parser does
//! not trust the schema to have been honoured: every field is required,
//! types are checked, and the percentages are range-checked.

use serde_json::{Value, json};
use summit_core::{ModelReply, SummitConsultation};
use summit_error::{ResponseParseError, ResponseParseErrorKind};
use tracing::{debug, instrument, warn};

/// Output schema declared on every invocation.
pub fn consultation_schema() -> Value {
    let percentage = |description: &str| {
        json!({
            "type": "INTEGER",
            "description": description,
            "minimum": 0,
            "maximum": 100
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "phase1_diagnostic": {
                "type": "STRING",
                "description": "Detailed critique from the panel (Max Martin, Sia, etc.) grounding real theory into the v5.2 context."
            },
            "phase2_surgery": {
                "type": "ARRAY",
                "description": "A list of specific lyrical improvements.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "original": { "type": "STRING", "description": "The original line or concept." },
                        "polished": { "type": "STRING", "description": "The rewritten line with IPA if needed." },
                        "reasoning": { "type": "STRING", "description": "Why this change was made (syllable count, phonetics, etc)." }
                    },
                    "required": ["original", "polished", "reasoning"]
                }
            },
            "phase3_architecture": {
                "type": "OBJECT",
                "description": "Technical specifications for Suno v5.2.",
                "properties": {
                    "vocalPersona": { "type": "STRING", "description": "Format: [Persona: ..., Gender: ..., Breathiness: ..., Range: ...]" },
                    "mixSettings": { "type": "STRING", "description": "Format: [Studio-Settings: ...]" },
                    "metaTags": { "type": "STRING", "description": "Comma separated meta tags, e.g. [Intro: ...], [Hook: ...]" }
                },
                "required": ["vocalPersona", "mixSettings", "metaTags"]
            },
            "phase4_masterPrompt": {
                "type": "OBJECT",
                "description": "The final executable prompt block.",
                "properties": {
                    "concept": { "type": "STRING" },
                    "stylePrompt": { "type": "STRING" },
                    "exclude": { "type": "STRING" },
                    "weirdness": percentage("Weirdness percentage, 0 to 100."),
                    "styleInfluence": percentage("Style influence percentage, 0 to 100."),
                    "lyrics": { "type": "STRING", "description": "Full lyrics with structural tags and IPA syntax." }
                },
                "required": ["concept", "stylePrompt", "exclude", "weirdness", "styleInfluence", "lyrics"]
            }
        },
        "required": ["phase1_diagnostic", "phase2_surgery", "phase3_architecture", "phase4_masterPrompt"]
    })
}

/// Parses raw model text into a consultation.
///
/// # Errors
///
/// - [`ResponseParseErrorKind::Empty`] when `raw` is absent or blank.
/// - [`ResponseParseErrorKind::Malformed`] when `raw` is not JSON, a field is
///   missing or has the wrong type, or a percentage is outside `0..=100`.
///
/// # Examples
///
/// ```
/// use summit::contract::parse;
///
/// assert!(parse(None).unwrap_err().is_empty());
/// assert!(parse(Some("  ")).unwrap_err().is_empty());
/// assert!(parse(Some("{\"phase1_diagnostic\": \"ok\"}")).unwrap_err().is_malformed());
/// ```
#[instrument(skip_all, fields(len = raw.map(str::len).unwrap_or(0)))]
pub fn parse(raw: Option<&str>) -> Result<SummitConsultation, ResponseParseError> {
    let text = match raw.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!("Model produced no text");
            return Err(ResponseParseError::new(ResponseParseErrorKind::Empty));
        }
    };

    let consultation: SummitConsultation = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Model output does not match the consultation schema");
        ResponseParseError::new(ResponseParseErrorKind::Malformed(e.to_string()))
    })?;

    debug!(
        surgery = consultation.surgery().len(),
        weirdness = consultation.master_prompt().weirdness().value(),
        style_influence = consultation.master_prompt().style_influence().value(),
        "Parsed consultation"
    );

    Ok(consultation)
}

/// Parses the text of a model reply.
pub fn parse_reply(reply: &ModelReply) -> Result<SummitConsultation, ResponseParseError> {
    parse(reply.text().as_deref())
}
