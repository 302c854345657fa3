//! The caller-facing consultation API.

use crate::builder::InvocationBuilder;
use crate::contract;
use derive_getters::Getters;
use summit_core::{GenerationRequest, GroundingSource, SummitConsultation, TokenUsage};
use summit_error::SummitResult;
use summit_interface::ModelDriver;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

/// A consultation plus what the model reported about producing it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ConsultationOutcome {
    consultation: SummitConsultation,
    sources: Vec<GroundingSource>,
    usage: Option<TokenUsage>,
}

impl ConsultationOutcome {
    /// Discards the metadata.
    pub fn into_consultation(self) -> SummitConsultation {
        self.consultation
    }
}

/// Runs consultations against a model driver.
///
/// At most one model call is in flight per consultant: a second `generate`
/// waits until the first has settled. There is no timeout, no cancellation
/// and no retry; every error is returned to the caller as it occurred.
pub struct Consultant<D> {
    builder: InvocationBuilder,
    driver: D,
    in_flight: Mutex<()>,
}

impl<D: ModelDriver> Consultant<D> {
    /// Creates a consultant.
    pub fn new(builder: InvocationBuilder, driver: D) -> Self {
        Self {
            builder,
            driver,
            in_flight: Mutex::new(()),
        }
    }

    /// The invocation builder in use.
    pub fn builder(&self) -> &InvocationBuilder {
        &self.builder
    }

    /// The model driver in use.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Builds the invocation, calls the model and parses its answer.
    ///
    /// # Errors
    ///
    /// Fails with the first error encountered: a malformed request, a
    /// transport error from the driver, or a response that is empty or does
    /// not satisfy the contract.
    pub async fn generate(&self, request: &GenerationRequest) -> SummitResult<SummitConsultation> {
        self.consult(request)
            .await
            .map(ConsultationOutcome::into_consultation)
    }

    /// Like [`generate`](Self::generate), keeping grounding sources and usage.
    #[instrument(
        skip_all,
        fields(
            mode = %request.mode(),
            provider = self.driver.provider_name(),
            driver_model = self.driver.model_name()
        )
    )]
    pub async fn consult(&self, request: &GenerationRequest) -> SummitResult<ConsultationOutcome> {
        let invocation = self.builder.build(request).inspect_err(|e| {
            error!(error = %e, "Rejected request");
        })?;

        let _guard = self.in_flight.lock().await;
        info!(model = %invocation.model(), "Requesting consultation");

        let reply = self.driver.invoke(&invocation).await.inspect_err(|e| {
            error!(error = %e, "Model call failed");
        })?;

        let consultation = contract::parse_reply(&reply)?;
        debug!(
            sources = reply.sources().len(),
            surgery = consultation.surgery().len(),
            "Consultation complete"
        );

        Ok(ConsultationOutcome {
            consultation,
            sources: reply.sources().clone(),
            usage: *reply.usage(),
        })
    }
}

#[cfg(feature = "gemini")]
impl Consultant<summit_models::GeminiClient> {
    /// Creates a Gemini-backed consultant from configuration.
    ///
    /// # Errors
    ///
    /// Fails with a missing-credential error before any network activity if
    /// no API key is configured, or if the HTTP client cannot be built.
    pub fn from_config(config: &crate::SummitConfig) -> SummitResult<Self> {
        let api_key = config.credential()?;
        let driver =
            summit_models::GeminiClient::new_with_url(api_key, config.model(), config.base_url())?;
        Ok(Self::new(config.invocation_builder(), driver))
    }
}

impl<D> std::fmt::Debug for Consultant<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consultant")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}
