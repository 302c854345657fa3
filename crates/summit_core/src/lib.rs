//! Core data types for the Summit production consultation client.
//!
//! This crate defines what flows through a consultation: the user's
//! [`GenerationRequest`], the [`ModelInvocation`] built from it, the raw
//! [`ModelReply`] from the model, and the parsed [`SummitConsultation`].

mod consultation;
mod invocation;
mod limits;
mod media;
mod mode;
mod reply;
mod request;

pub use consultation::{
    Architecture, MasterPrompt, MasterPromptBuilder, Percentage, SummitConsultation, SurgeryEdit,
};
pub use invocation::{ContentPart, ModelInvocation, ModelInvocationBuilder};
pub use limits::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MAX_TEXT_CHARS, InputLimits};
pub use media::{EncodedMedia, ImagePart, MediaSource, image_mime_for_extension};
pub use mode::Mode;
pub use reply::{GroundingSource, ModelReply, ModelReplyBuilder, TokenUsage};
pub use request::{GenerationRequest, GenerationRequestBuilder};
