//! Consultation modes.

use serde::{Deserialize, Serialize};

/// What kind of input the user submitted.
///
/// Each mode selects one fixed mission for the panel. Parsing accepts the
/// names used by the web form as aliases.
///
/// # Examples
///
/// ```
/// use summit_core::Mode;
/// use std::str::FromStr;
///
/// assert_eq!(Mode::from_str("review").unwrap(), Mode::Audit);
/// assert_eq!(Mode::from_str("text").unwrap(), Mode::Fresh);
/// assert!(Mode::from_str("remix").is_err());
/// assert_eq!(Mode::Image.to_string(), "image");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Build a production from a raw concept or genre idea
    #[serde(alias = "text", alias = "concept")]
    #[strum(to_string = "fresh", serialize = "text", serialize = "concept")]
    Fresh,
    /// Audit and rewrite an existing draft
    #[serde(alias = "review")]
    #[strum(to_string = "audit", serialize = "review")]
    Audit,
    /// Translate an uploaded image into a production
    #[strum(to_string = "image")]
    Image,
}

impl Mode {
    /// True when the mode is driven by user text rather than an image.
    pub fn requires_text(&self) -> bool {
        matches!(self, Mode::Fresh | Mode::Audit)
    }

    /// True when the mode carries an image part.
    pub fn requires_image(&self) -> bool {
        matches!(self, Mode::Image)
    }
}
