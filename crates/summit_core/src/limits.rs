//! Upper bounds on what a single request may carry.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default maximum number of characters of user text.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 32_000;

/// Default maximum decoded image size (20 MiB, the inline-data ceiling of the
/// Gemini API).
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Size limits applied before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct InputLimits {
    /// Maximum characters of user text (after trimming)
    max_text_chars: usize,
    /// Maximum decoded image bytes
    max_image_bytes: usize,
}

impl InputLimits {
    /// Creates limits with explicit values.
    pub fn new(max_text_chars: usize, max_image_bytes: usize) -> Self {
        Self {
            max_text_chars,
            max_image_bytes,
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_CHARS, DEFAULT_MAX_IMAGE_BYTES)
    }
}
