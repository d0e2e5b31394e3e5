//! Imagen-backed image generation.
//!
//! The painter calls the Imagen predict endpoint directly over REST; the
//! gemini-rust wrapper does not cover image generation.

use crate::config::PainterConfig;
use async_trait::async_trait;
use base64::Engine as _;
use lautrec_core::ImageData;
use lautrec_error::{
    GeminiError, GeminiErrorKind, HttpError, ImageError, ImageErrorKind, LautrecResult,
};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::instrument;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Request body for the Imagen predict endpoint.
#[derive(Debug, Clone, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Clone, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
}

/// Response body from the Imagen predict endpoint.
#[derive(Debug, Clone, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
    #[serde(default)]
    mime_type: Option<String>,
}

/// Client for generating promotional images from graphic captions.
///
/// # Example
///
/// ```no_run
/// use lautrec_interface::ImagePainter;
/// use lautrec_models::GeminiPainter;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let painter = GeminiPainter::new()?;
/// let image = painter.paint("Launch day").await?;
/// println!("{} bytes", image.data.len());
/// # Ok(())
/// # }
/// ```
pub struct GeminiPainter {
    http: reqwest::Client,
    api_key: String,
    model_name: String,
    sample_count: u32,
}

impl std::fmt::Debug for GeminiPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiPainter")
            .field("model_name", &self.model_name)
            .field("sample_count", &self.sample_count)
            .finish_non_exhaustive()
    }
}

impl GeminiPainter {
    /// Create a painter with configuration loaded from `lautrec.toml`.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_painter_new")]
    pub fn new() -> LautrecResult<Self> {
        let config = crate::LautrecConfig::load()?;
        Self::with_config(&config.painter)
    }

    /// Create a painter from explicit settings.
    #[instrument(name = "gemini_painter_with_config", skip(config))]
    pub fn with_config(config: &PainterConfig) -> LautrecResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model_name: config.model.clone(),
            sample_count: config.sample_count,
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/models/{}:predict", BASE_URL, self.model_name)
    }
}

#[async_trait]
impl lautrec_interface::ImagePainter for GeminiPainter {
    #[instrument(name = "gemini_paint", skip(self), fields(model = %self.model_name))]
    async fn paint(&self, caption: &str) -> LautrecResult<ImageData> {
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: format!(
                    "A vibrant, professional social media graphic featuring the text: \"{}\"",
                    caption
                ),
            }],
            parameters: PredictParameters {
                sample_count: self.sample_count,
            },
        };

        let response = self
            .http
            .post(self.predict_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let prediction = parsed
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| ImageError::new(ImageErrorKind::NoImageReturned))?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(prediction.bytes_base64_encoded.as_bytes())
            .map_err(|e| ImageError::new(ImageErrorKind::Base64Decode(e.to_string())))?;

        tracing::debug!(bytes = data.len(), "Painted image");

        Ok(ImageData::new(prediction.mime_type, data))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
