//! Four-phase music production consultations from a generative model.
//!
//! A [`GenerationRequest`] (a concept, a draft to audit, or an image) is
//! assembled into a [`ModelInvocation`] by the [`InvocationBuilder`], executed
//! by a [`ModelDriver`], and the model's structured output is checked against
//! the consultation contract in [`contract`] before it reaches the caller as a
//! [`SummitConsultation`].
//!
//! ```no_run
//! use summit::{Consultant, SummitConfig};
//! use summit_core::GenerationRequest;
//!
//! # async fn run() -> summit_error::SummitResult<()> {
//! let config = SummitConfig::load(None)?;
//! let consultant = Consultant::from_config(&config)?;
//! let consultation = consultant
//!     .generate(&GenerationRequest::fresh("melancholic synthwave about a night bus"))
//!     .await?;
//! println!("{}", consultation.master_prompt().style_prompt());
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod consultant;
pub mod contract;
pub mod prompts;
pub mod render;

pub use builder::{DEFAULT_MODEL, DEFAULT_THINKING_BUDGET, InvocationBuilder};
pub use config::{
    CONFIG_FILE_NAME, CREDENTIAL_VARS, DEFAULT_BASE_URL, SummitConfig, default_config_path,
};
pub use consultant::{ConsultationOutcome, Consultant};

pub use summit_core::{
    GenerationRequest, ImagePart, MediaSource, Mode, ModelInvocation, SummitConsultation,
};
pub use summit_error::{SummitError, SummitErrorKind, SummitResult};
pub use summit_interface::ModelDriver;
