//! Plain-text rendering of a consultation for the terminal.

use std::fmt;
use summit_core::{GroundingSource, SummitConsultation};

const RULE: &str = "────────────────────────────────────────────────────────────";

/// A consultation and its grounding sources, displayed as terminal text.
///
/// The master prompt's style, exclude and lyrics blocks are printed bare
/// between markers so they can be pasted into the generator unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ConsultationView<'a> {
    consultation: &'a SummitConsultation,
    sources: &'a [GroundingSource],
}

impl<'a> ConsultationView<'a> {
    /// Creates a view over `consultation` and `sources`.
    pub fn new(consultation: &'a SummitConsultation, sources: &'a [GroundingSource]) -> Self {
        Self {
            consultation,
            sources,
        }
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{RULE}\n{title}\n{RULE}")
}

impl fmt::Display for ConsultationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let consultation = self.consultation;

        heading(f, "PHASE 1 · THE DIAGNOSTIC")?;
        writeln!(f, "{}\n", consultation.diagnostic().trim())?;

        heading(f, "PHASE 2 · LYRICAL SURGERY")?;
        if consultation.surgery().is_empty() {
            writeln!(f, "(no line edits)\n")?;
        }
        for (i, edit) in consultation.surgery().iter().enumerate() {
            writeln!(f, "{}. Original: {}", i + 1, edit.original())?;
            writeln!(f, "   Polished: {}", edit.polished())?;
            writeln!(f, "   Why:      {}\n", edit.reasoning())?;
        }

        let architecture = consultation.architecture();
        heading(f, "PHASE 3 · SUNO ARCHITECTURE")?;
        writeln!(f, "Vocal Persona: {}", architecture.vocal_persona())?;
        writeln!(f, "Mix Settings:  {}", architecture.mix_settings())?;
        writeln!(f, "Meta Tags:     {}\n", architecture.meta_tags())?;

        let prompt = consultation.master_prompt();
        heading(f, "PHASE 4 · THE MASTER PROMPT")?;
        writeln!(f, "Concept: {}\n", prompt.concept())?;
        for (label, body) in [
            ("STYLE", prompt.style_prompt()),
            ("EXCLUDE", prompt.exclude()),
            ("LYRICS", prompt.lyrics()),
        ] {
            writeln!(f, "--- {label} ---\n{}\n--- END {label} ---\n", body.trim_end())?;
        }
        writeln!(
            f,
            "Weirdness: {}   Style Influence: {}",
            prompt.weirdness(),
            prompt.style_influence()
        )?;

        if !self.sources.is_empty() {
            writeln!(f)?;
            heading(f, "GROUNDING SOURCES")?;
            for source in self.sources {
                writeln!(f, "- {} <{}>", source.title(), source.uri())?;
            }
        }
        Ok(())
    }
}

/// Renders the four phases, then any grounding sources.
pub fn render_text(consultation: &SummitConsultation, sources: &[GroundingSource]) -> String {
    ConsultationView::new(consultation, sources).to_string()
}
