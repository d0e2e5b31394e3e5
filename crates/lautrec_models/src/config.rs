//! Configuration structures for provider settings.
//!
//! This module provides TOML-based configuration for the composer and
//! painter models. The configuration system supports:
//! - Bundled defaults (include_str! from lautrec.toml)
//! - User overrides (./lautrec.toml or ~/.config/lautrec/lautrec.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use lautrec_error::{ConfigError, LautrecResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Bundled default configuration, compiled into the binary.
const DEFAULT_CONFIG: &str = include_str!("../lautrec.toml");

/// Settings for the text-generation model.
///
/// ```toml
/// [composer]
/// model = "gemini-2.5-flash"
/// temperature = 0.7
/// max_output_tokens = 2048
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComposerConfig {
    /// Model identifier for post copy generation
    pub model: String,
    /// Sampling temperature (0.0 to 1.0)
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

/// Settings for the image-generation model.
///
/// ```toml
/// [painter]
/// model = "imagen-3.0-generate-002"
/// sample_count = 1
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PainterConfig {
    /// Model identifier for image generation
    pub model: String,
    /// Number of image candidates to request
    #[serde(default = "default_sample_count")]
    pub sample_count: u32,
}

fn default_sample_count() -> u32 {
    1
}

/// Top-level Lautrec provider configuration.
///
/// # Examples
///
/// ```
/// use lautrec_models::LautrecConfig;
///
/// let config = LautrecConfig::default();
/// assert!(!config.composer.model.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LautrecConfig {
    /// Text-generation settings
    pub composer: ComposerConfig,
    /// Image-generation settings
    pub painter: PainterConfig,
}

impl Default for LautrecConfig {
    /// The bundled defaults. Panics only if the bundled TOML is malformed,
    /// which a unit test guards against.
    fn default() -> Self {
        toml_from_bundled().expect("bundled lautrec.toml is valid")
    }
}

fn toml_from_bundled() -> LautrecResult<LautrecConfig> {
    let config = Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::new(e.to_string()))?;
    config
        .try_deserialize()
        .map_err(|e| ConfigError::new(e.to_string()).into())
}

impl LautrecConfig {
    /// Load configuration, merging bundled defaults with user overrides.
    ///
    /// Sources, in increasing precedence:
    /// 1. Bundled defaults
    /// 2. `~/.config/lautrec/lautrec.toml`
    /// 3. `./lautrec.toml`
    pub fn load() -> LautrecResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            debug!(path = %path.display(), "Merging user-level configuration");
            builder = builder.add_source(File::from(path));
        }

        let local = PathBuf::from("lautrec.toml");
        if local.exists() {
            debug!("Merging ./lautrec.toml");
            builder = builder.add_source(File::from(local));
        }

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }

    /// The user-level configuration path, if a config directory exists.
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lautrec").join("lautrec.toml"))
    }
}
