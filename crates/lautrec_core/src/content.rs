//! The generated content model.
//!
//! Field names follow the upstream JSON schema (camelCase), so the whole
//! structure deserializes directly from the provider's structured response.
//! Each top-level field is present only if the corresponding platform was
//! selected and the provider returned it; absence means "not requested / not
//! generated", not an error.

use crate::{Platform, PlatformSelection};
use serde::{Deserialize, Serialize};

/// A generated LinkedIn post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedinPost {
    /// Post body
    pub copy: String,
}

/// A generated Facebook post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookPost {
    /// Post body
    pub copy: String,
    /// Hashtags, in presentation order
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// A generated X/Twitter post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterPost {
    /// Post body
    pub copy: String,
    /// Hashtags, in presentation order
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// A short caption intended to be overlaid on a generated image.
///
/// `image_url` stays `None` until the image stage completes; `Some` is the
/// signal to switch from text-only to image+caption presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicText {
    /// Caption text
    pub text: String,
    /// Displayable image reference, merged in by the image stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One generation cycle's output, replaced wholesale on each new request and
/// partially mutated once when the image result arrives.
///
/// # Examples
///
/// ```
/// use lautrec_core::GeneratedContent;
///
/// let json = r#"{
///     "linkedinPost": { "copy": "Big news." },
///     "graphicText": { "text": "Launch day" }
/// }"#;
/// let content: GeneratedContent = serde_json::from_str(json).unwrap();
/// assert_eq!(content.graphic_caption(), Some("Launch day"));
/// assert!(content.facebook_post.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// LinkedIn post, if requested and generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_post: Option<LinkedinPost>,
    /// Facebook post, if requested and generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_post: Option<FacebookPost>,
    /// X/Twitter post, if requested and generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_post: Option<TwitterPost>,
    /// Graphic caption, if requested and generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic_text: Option<GraphicText>,
}

impl GeneratedContent {
    /// The non-empty graphic caption, if one was generated.
    pub fn graphic_caption(&self) -> Option<&str> {
        self.graphic_text
            .as_ref()
            .map(|g| g.text.trim())
            .filter(|text| !text.is_empty())
    }

    /// Merge an image reference into the graphic caption.
    ///
    /// Returns `false` without touching anything when no graphic caption is
    /// present, so a late-arriving image cannot corrupt a result that no
    /// longer carries one.
    pub fn attach_image_url(&mut self, url: impl Into<String>) -> bool {
        match self.graphic_text.as_mut() {
            Some(graphic) => {
                graphic.image_url = Some(url.into());
                true
            }
            None => false,
        }
    }

    /// Drop fields for platforms the selection did not request.
    pub fn retain_selected(&mut self, selection: &PlatformSelection) {
        if !selection.contains(Platform::LinkedIn) {
            self.linkedin_post = None;
        }
        if !selection.contains(Platform::Facebook) {
            self.facebook_post = None;
        }
        if !selection.contains(Platform::Twitter) {
            self.twitter_post = None;
        }
        if !selection.contains(Platform::GraphicText) {
            self.graphic_text = None;
        }
    }

    /// Whether no platform field is populated.
    pub fn is_empty(&self) -> bool {
        self.linkedin_post.is_none()
            && self.facebook_post.is_none()
            && self.twitter_post.is_none()
            && self.graphic_text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with_caption(text: &str) -> GeneratedContent {
        GeneratedContent {
            graphic_text: Some(GraphicText {
                text: text.to_string(),
                image_url: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "twitterPost": { "copy": "short", "hashtags": ["#launch"] },
            "graphicText": { "text": "Launch day" }
        }"#;
        let content: GeneratedContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.twitter_post.as_ref().unwrap().hashtags, ["#launch"]);
        assert!(content.graphic_text.as_ref().unwrap().image_url.is_none());
    }

    #[test]
    fn whitespace_caption_is_not_a_caption() {
        assert_eq!(content_with_caption("  \n").graphic_caption(), None);
        assert_eq!(content_with_caption("Go!").graphic_caption(), Some("Go!"));
    }

    #[test]
    fn attach_image_url_is_a_noop_without_graphic_text() {
        let mut content = GeneratedContent::default();
        assert!(!content.attach_image_url("data:image/png;base64,AAAA"));
        assert!(content.is_empty());
    }

    #[test]
    fn attach_image_url_sets_the_reference() {
        let mut content = content_with_caption("Launch day");
        assert!(content.attach_image_url("data:image/png;base64,AAAA"));
        assert_eq!(
            content.graphic_text.unwrap().image_url.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn retain_selected_prunes_unrequested_fields() {
        let mut content = GeneratedContent {
            linkedin_post: Some(LinkedinPost {
                copy: "pro".to_string(),
            }),
            twitter_post: Some(TwitterPost {
                copy: "short".to_string(),
                hashtags: vec![],
            }),
            ..Default::default()
        };
        content.retain_selected(&PlatformSelection::only(Platform::LinkedIn));
        assert!(content.linkedin_post.is_some());
        assert!(content.twitter_post.is_none());
    }
}
