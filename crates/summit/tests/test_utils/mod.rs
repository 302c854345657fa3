//! Test utilities for Summit tests.
//!
//! This module provides a scripted model driver and canned model output.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use summit_core::{GroundingSource, ModelInvocation, ModelReply};
use summit_error::{GeminiError, GeminiErrorKind, SummitResult};
use summit_interface::ModelDriver;

/// What the mock driver does when invoked.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with this text
    Text(String),
    /// Reply without text, as a filtered candidate would
    NoText,
    /// Fail with an HTTP error
    HttpError(u16, String),
}

/// Driver that replays a fixed behavior and records what it was sent.
pub struct MockDriver {
    behavior: MockBehavior,
    sources: Vec<GroundingSource>,
    delay: Duration,
    calls: AtomicUsize,
    active: AtomicUsize,
    max_active: AtomicUsize,
    invocations: Mutex<Vec<ModelInvocation>>,
}

impl MockDriver {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            sources: Vec::new(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Text(text.into()))
    }

    pub fn with_sources(mut self, sources: Vec<GroundingSource>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of overlapping `invoke` calls observed.
    pub fn max_concurrent(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }

    pub fn last_invocation(&self) -> Option<ModelInvocation> {
        self.invocations.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    async fn invoke(&self, invocation: &ModelInvocation) -> SummitResult<ModelReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now_active, Ordering::SeqCst);
        self.invocations.lock().unwrap().push(invocation.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.active.fetch_sub(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Text(text) => Ok(ModelReply::builder()
                .text(text.clone())
                .finish_reason("STOP")
                .sources(self.sources.clone())
                .build()
                .unwrap()),
            MockBehavior::NoText => Ok(ModelReply::builder()
                .finish_reason("SAFETY")
                .build()
                .unwrap()),
            MockBehavior::HttpError(status_code, message) => {
                Err(GeminiError::new(GeminiErrorKind::HttpError {
                    status_code: *status_code,
                    message: message.clone(),
                })
                .into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A consultation that satisfies the schema.
pub fn sample_consultation_json() -> Value {
    json!({
        "phase1_diagnostic": "Verse 1 leans on a cliche image; the hook arrives at bar 12.",
        "phase2_surgery": [
            {
                "original": "[Verse 1]",
                "polished": "[Verse 1: Hushed, close-mic]",
                "reasoning": "Tag carries performance direction."
            },
            {
                "original": "neon lights",
                "polished": "sodium glow on [wɛt] asphalt",
                "reasoning": "Removes a forbidden word; IPA pins the vowel."
            },
            {
                "original": "(missing)",
                "polished": "and the night bus hums my name",
                "reasoning": "Completes the couplet at 7 syllables."
            }
        ],
        "phase3_architecture": {
            "vocalPersona": "[Persona: Vera, Gender: Female, Breathiness: 60, Belting-Range: A3-E5]",
            "mixSettings": "[Studio-Settings: Compression: Opto, Stereo-Width: Wide, Tape-Saturation: High]",
            "metaTags": "[Intro: Atmospheric-Swell], [Hook: Anthemic-Layering]"
        },
        "phase4_masterPrompt": {
            "concept": "Night bus confessional",
            "stylePrompt": "Indie pop, wistful, Rhodes lead, breathy female vocal, rain-soaked, tape warmth",
            "exclude": "neon, abyss, echoes, EDM drops",
            "weirdness": 35,
            "styleInfluence": 65,
            "lyrics": "[Verse 1: Hushed, close-mic]\nsodium glow on [wɛt] asphalt\n"
        }
    })
}

pub fn sample_consultation_text() -> String {
    sample_consultation_json().to_string()
}
