//! Gemini-backed text composition.
//!
//! The composer asks the model for a single JSON object keyed per selected
//! platform, then extracts and deserializes that object into
//! [`GeneratedContent`]. Fields the brief did not select are pruned even if
//! the model volunteers them.

use crate::config::ComposerConfig;
use crate::extraction::{extract_json, parse_json};
use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use lautrec_core::{GeneratedContent, GenerationBrief, Platform};
use lautrec_error::{
    ComposeError, ComposeErrorKind, GeminiError, GeminiErrorKind, LautrecResult,
};
use std::env;
use tracing::instrument;

/// Client for generating platform-tailored post copy via Gemini.
///
/// # Example
///
/// ```no_run
/// use lautrec_core::{GenerationBrief, PlatformSelection};
/// use lautrec_interface::ContentComposer;
/// use lautrec_models::GeminiComposer;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let composer = GeminiComposer::new()?;
/// let brief = GenerationBrief::new(
///     "Company X launches new product",
///     PlatformSelection::all(),
/// );
/// let content = composer.compose(&brief).await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiComposer {
    client: Gemini,
    model_name: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl std::fmt::Debug for GeminiComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiComposer")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiComposer {
    /// Create a composer with configuration loaded from `lautrec.toml`.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_composer_new")]
    pub fn new() -> LautrecResult<Self> {
        let config = crate::LautrecConfig::load()?;
        Self::with_config(&config.composer)
    }

    /// Create a composer from explicit settings.
    #[instrument(name = "gemini_composer_with_config", skip(config))]
    pub fn with_config(config: &ComposerConfig) -> LautrecResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let model_enum = Self::model_name_to_enum(&config.model);
        let client = Gemini::with_model(&api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            model_name: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Uses Model::Custom for unrecognized model names, adding the "models/"
    /// prefix the Gemini API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Build the system prompt demanding JSON-only output with exactly the
    /// keys for the selected platforms.
    fn system_prompt(brief: &GenerationBrief) -> String {
        let mut prompt = String::from(
            "You are a social media marketing expert. Based on the text excerpt \
             provided by the user, generate tailored social media content.\n\
             Respond with ONLY a single valid JSON object, no prose and no \
             markdown fences, containing exactly these keys:\n",
        );
        for platform in brief.platforms.platforms() {
            prompt.push_str(Self::field_instruction(platform));
            prompt.push('\n');
        }
        prompt.push_str("Do not include keys for any other platform.");
        prompt
    }

    fn field_instruction(platform: Platform) -> &'static str {
        match platform {
            Platform::LinkedIn => {
                "- \"linkedinPost\": {\"copy\": string} - professional, insightful tone"
            }
            Platform::Facebook => {
                "- \"facebookPost\": {\"copy\": string, \"hashtags\": [string]} - engaging and shareable"
            }
            Platform::Twitter => {
                "- \"twitterPost\": {\"copy\": string, \"hashtags\": [string]} - concise, under 280 characters"
            }
            Platform::GraphicText => {
                "- \"graphicText\": {\"text\": string} - a punchy caption of at most ten words for a promotional graphic"
            }
        }
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError with
    /// HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl lautrec_interface::ContentComposer for GeminiComposer {
    #[instrument(name = "gemini_compose", skip(self, brief), fields(model = %self.model_name))]
    async fn compose(&self, brief: &GenerationBrief) -> LautrecResult<GeneratedContent> {
        let mut builder = self
            .client
            .generate_content()
            .with_system_prompt(&Self::system_prompt(brief))
            .with_user_message(&brief.excerpt);

        if let Some(temperature) = self.temperature {
            builder = builder.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_output_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(ComposeError::new(ComposeErrorKind::EmptyResponse).into());
        }

        let json = extract_json(&text)?;
        let mut content: GeneratedContent = parse_json(&json)?;
        content.retain_selected(&brief.platforms);

        tracing::debug!(
            linkedin = content.linkedin_post.is_some(),
            facebook = content.facebook_post.is_some(),
            twitter = content.twitter_post.is_some(),
            graphic = content.graphic_text.is_some(),
            "Composed content"
        );

        Ok(content)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lautrec_core::PlatformSelection;

    #[test]
    fn system_prompt_lists_only_selected_platforms() {
        let brief = GenerationBrief::new(
            "launch",
            PlatformSelection {
                linkedin: true,
                graphic_text: true,
                ..Default::default()
            },
        );
        let prompt = GeminiComposer::system_prompt(&brief);
        assert!(prompt.contains("linkedinPost"));
        assert!(prompt.contains("graphicText"));
        assert!(!prompt.contains("facebookPost"));
        assert!(!prompt.contains("twitterPost"));
    }

    #[test]
    fn status_code_extraction() {
        let msg = "bad response from server; code 503; description: overloaded";
        assert_eq!(GeminiComposer::extract_status_code(msg), Some(503));
        assert_eq!(GeminiComposer::extract_status_code("no code here"), None);
    }

    #[test]
    fn custom_model_names_gain_prefix() {
        match GeminiComposer::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
    }
}
