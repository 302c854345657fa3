//! The model invocation seam.

use async_trait::async_trait;
use std::sync::Arc;
use summit_core::{ModelInvocation, ModelReply};
use summit_error::SummitResult;

/// An external generative model that can execute an invocation.
///
/// Implementations perform a single attempt: no retry, no caching and no
/// timeout. Transport, quota and authentication failures are returned as
/// errors unchanged. A call that succeeds at the transport level but yields
/// no text returns a [`ModelReply`] whose `text` is `None`; deciding what
/// that means is left to the caller.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Execute the invocation and return the model's reply.
    async fn invoke(&self, invocation: &ModelInvocation) -> SummitResult<ModelReply>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier the driver targets by default.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D> ModelDriver for Arc<D>
where
    D: ModelDriver + ?Sized,
{
    async fn invoke(&self, invocation: &ModelInvocation) -> SummitResult<ModelReply> {
        (**self).invoke(invocation).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
