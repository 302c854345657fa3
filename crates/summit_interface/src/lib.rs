//! Trait definitions for the Summit production consultation client.
//!
//! The consultation core never talks to a network itself. It builds a
//! [`ModelInvocation`] and hands it to a [`ModelDriver`], which performs the
//! remote call and returns whatever text the model produced.

mod driver;

pub use driver::ModelDriver;
pub use summit_core::{ModelInvocation, ModelReply};
