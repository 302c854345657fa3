//! The four-phase production consultation returned by the model.
//!
//! Field names on the wire follow the declared output schema:
//! `phase1_diagnostic`, `phase2_surgery`, `phase3_architecture` and
//! `phase4_masterPrompt`, with camelCase keys inside each phase. Every field
//! is required. Percentages are range-checked during deserialization, so a
//! value that decodes is always a valid consultation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An integer setting in `0..=100`.
///
/// # Examples
///
/// ```
/// use summit_core::Percentage;
///
/// assert_eq!(Percentage::try_from(55).unwrap().value(), 55);
/// assert!(Percentage::try_from(150).is_err());
/// assert!(Percentage::try_from(-1).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "i64", into = "i64")]
#[display("{}%", _0)]
pub struct Percentage(u8);

impl Percentage {
    /// Upper bound, inclusive.
    pub const MAX: u8 = 100;

    /// The numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Percentage {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!("{} is outside 0..=100", value))
        }
    }
}

impl From<Percentage> for i64 {
    fn from(value: Percentage) -> Self {
        i64::from(value.0)
    }
}

/// One line-level rewrite from the lyrical surgery phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SurgeryEdit {
    /// The original line or concept
    original: String,
    /// The rewritten line, with IPA where needed
    polished: String,
    /// Why the change was made
    reasoning: String,
}

impl SurgeryEdit {
    /// Creates an edit.
    pub fn new(
        original: impl Into<String>,
        polished: impl Into<String>,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            polished: polished.into(),
            reasoning: reasoning.into(),
        }
    }
}

/// Technical specification for the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    /// `[Persona: ..., Gender: ..., Breathiness: ..., Range: ...]`
    vocal_persona: String,
    /// `[Studio-Settings: ...]`
    mix_settings: String,
    /// Comma separated meta tags
    meta_tags: String,
}

impl Architecture {
    /// Creates an architecture block.
    pub fn new(
        vocal_persona: impl Into<String>,
        mix_settings: impl Into<String>,
        meta_tags: impl Into<String>,
    ) -> Self {
        Self {
            vocal_persona: vocal_persona.into(),
            mix_settings: mix_settings.into(),
            meta_tags: meta_tags.into(),
        }
    }
}

/// The final executable prompt block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), pattern = "owned")]
pub struct MasterPrompt {
    concept: String,
    style_prompt: String,
    exclude: String,
    weirdness: Percentage,
    style_influence: Percentage,
    /// Full lyrics with structural tags and IPA
    lyrics: String,
}

impl MasterPrompt {
    /// Returns a builder for a master prompt.
    pub fn builder() -> MasterPromptBuilder {
        MasterPromptBuilder::default()
    }
}

/// A complete consultation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SummitConsultation {
    /// Phase 1: the panel's critique
    #[serde(rename = "phase1_diagnostic")]
    diagnostic: String,
    /// Phase 2: line-by-line rewrites, in the order the panel gave them
    #[serde(rename = "phase2_surgery")]
    surgery: Vec<SurgeryEdit>,
    /// Phase 3: persona, mix and meta tags
    #[serde(rename = "phase3_architecture")]
    architecture: Architecture,
    /// Phase 4: the master prompt
    #[serde(rename = "phase4_masterPrompt")]
    master_prompt: MasterPrompt,
}

impl SummitConsultation {
    /// Assembles a consultation from its phases.
    pub fn new(
        diagnostic: impl Into<String>,
        surgery: Vec<SurgeryEdit>,
        architecture: Architecture,
        master_prompt: MasterPrompt,
    ) -> Self {
        Self {
            diagnostic: diagnostic.into(),
            surgery,
            architecture,
            master_prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_percentage_bounds_enforced_by_serde() {
        assert!(serde_json::from_value::<Percentage>(json!(0)).is_ok());
        assert!(serde_json::from_value::<Percentage>(json!(100)).is_ok());
        assert!(serde_json::from_value::<Percentage>(json!(101)).is_err());
        assert!(serde_json::from_value::<Percentage>(json!(-5)).is_err());
        assert!(serde_json::from_value::<Percentage>(json!("50")).is_err());
    }

    #[test]
    fn test_master_prompt_uses_camel_case_keys() {
        let prompt = MasterPrompt::builder()
            .concept("Night drive")
            .style_prompt("synthwave, female vocals")
            .exclude("neon, abyss")
            .weirdness(Percentage::try_from(45).unwrap())
            .style_influence(Percentage::try_from(60).unwrap())
            .lyrics("[Verse 1]")
            .build()
            .unwrap();
        let value = serde_json::to_value(&prompt).unwrap();
        assert_eq!(value["stylePrompt"], "synthwave, female vocals");
        assert_eq!(value["styleInfluence"], 60);
        assert_eq!(value["weirdness"], 45);
    }
}
