//! Supported content platforms.

use serde::{Deserialize, Serialize};

/// The four supported content targets.
///
/// # Examples
///
/// ```
/// use lautrec_core::Platform;
///
/// assert_eq!(Platform::Twitter.to_string(), "Twitter");
/// assert_eq!(Platform::GraphicText.to_string(), "Graphic Text");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Platform {
    /// LinkedIn post
    #[strum(to_string = "LinkedIn", serialize = "linkedin")]
    LinkedIn,
    /// Facebook post
    #[strum(to_string = "Facebook", serialize = "facebook")]
    Facebook,
    /// X/Twitter post
    #[strum(to_string = "Twitter", serialize = "twitter")]
    Twitter,
    /// Caption intended to be overlaid on a generated image
    #[strum(to_string = "Graphic Text", serialize = "graphic-text")]
    GraphicText,
}
