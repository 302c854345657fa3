//! Full consultation against the live Gemini API.
//!
//! Run with: cargo test --package summit --features api

#![cfg(feature = "gemini")]

use summit::{Consultant, SummitConfig};
use summit_core::GenerationRequest;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_audit_consultation() {
    let _ = dotenvy::dotenv();
    let config = SummitConfig::load(None).expect("config loads");
    let consultant = Consultant::from_config(&config).expect("credential configured");

    let outcome = consultant
        .consult(&GenerationRequest::audit("[Verse 1]\nneon lights in the abyss"))
        .await
        .expect("consultation");

    let consultation = outcome.consultation();
    assert!(!consultation.diagnostic().is_empty());
    assert!(!consultation.master_prompt().style_prompt().is_empty());
    assert!(consultation.master_prompt().weirdness().value() <= 100);
}
