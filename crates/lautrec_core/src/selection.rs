//! Per-platform selection flags for a generation request.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// Which platforms a generation request targets.
///
/// # Examples
///
/// ```
/// use lautrec_core::{Platform, PlatformSelection};
///
/// let selection = PlatformSelection {
///     linkedin: true,
///     twitter: true,
///     ..Default::default()
/// };
///
/// assert!(selection.any());
/// assert!(selection.contains(Platform::Twitter));
/// assert!(!selection.contains(Platform::Facebook));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlatformSelection {
    /// Generate a LinkedIn post
    pub linkedin: bool,
    /// Generate a Facebook post
    pub facebook: bool,
    /// Generate an X/Twitter post
    pub twitter: bool,
    /// Generate a graphic caption (and, downstream, an image)
    pub graphic_text: bool,
}

impl PlatformSelection {
    /// Select every platform.
    pub fn all() -> Self {
        Self {
            linkedin: true,
            facebook: true,
            twitter: true,
            graphic_text: true,
        }
    }

    /// Select no platform. Equivalent to `Default::default()`.
    pub fn none() -> Self {
        Self::default()
    }

    /// Select a single platform.
    pub fn only(platform: Platform) -> Self {
        let mut selection = Self::none();
        selection.set(platform, true);
        selection
    }

    /// Set the flag for one platform.
    pub fn set(&mut self, platform: Platform, selected: bool) {
        match platform {
            Platform::LinkedIn => self.linkedin = selected,
            Platform::Facebook => self.facebook = selected,
            Platform::Twitter => self.twitter = selected,
            Platform::GraphicText => self.graphic_text = selected,
        }
    }

    /// Whether the flag for `platform` is set.
    pub fn contains(&self, platform: Platform) -> bool {
        match platform {
            Platform::LinkedIn => self.linkedin,
            Platform::Facebook => self.facebook,
            Platform::Twitter => self.twitter,
            Platform::GraphicText => self.graphic_text,
        }
    }

    /// Whether at least one platform is selected.
    pub fn any(&self) -> bool {
        self.linkedin || self.facebook || self.twitter || self.graphic_text
    }

    /// The selected platforms, in declaration order.
    pub fn platforms(&self) -> Vec<Platform> {
        use strum::IntoEnumIterator;
        Platform::iter().filter(|p| self.contains(*p)).collect()
    }
}

impl FromIterator<Platform> for PlatformSelection {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        let mut selection = Self::none();
        for platform in iter {
            selection.set(platform, true);
        }
        selection
    }
}
