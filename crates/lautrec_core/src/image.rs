//! Image data returned by the paint stage.

use serde::{Deserialize, Serialize};

/// Binary image payload with its MIME type.
///
/// Mirrors what image-generation endpoints return: raw bytes plus an
/// optional content type. [`to_data_url`](Self::to_data_url) renders it as a
/// displayable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// MIME type of the image, e.g. "image/png"
    pub mime: Option<String>,
    /// Binary image data
    pub data: Vec<u8>,
}

impl ImageData {
    /// Create image data from raw bytes.
    pub fn new(mime: Option<String>, data: Vec<u8>) -> Self {
        Self { mime, data }
    }

    /// Render the image as a `data:` URL suitable for direct display.
    ///
    /// Falls back to "image/png" when no MIME type was reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use lautrec_core::ImageData;
    ///
    /// let image = ImageData::new(Some("image/jpeg".to_string()), vec![0xff, 0xd8]);
    /// assert!(image.to_data_url().starts_with("data:image/jpeg;base64,"));
    /// ```
    pub fn to_data_url(&self) -> String {
        use base64::Engine as _;

        let mime = self.mime.as_deref().unwrap_or("image/png");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", mime, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_defaults_to_png() {
        let image = ImageData::new(None, vec![1, 2, 3]);
        assert!(image.to_data_url().starts_with("data:image/png;base64,"));
    }
}
