//! Configuration for telugu-bot
//!
//! Loaded from a TOML file; every section and field has a default so a
//! partial (or missing) file is fine. Secrets never live in the file: the
//! generator API key is read from the environment variable named by
//! `generator.api_key_env`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "telugu-bot.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to write config file {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Generation collaborator (Gemini)
    pub generator: GeneratorConfig,

    /// Chat-mode resolution
    pub chat: ChatConfig,

    /// Translate-mode behaviour
    pub translate: TranslateConfig,

    /// Optional instruction dataset
    pub dataset: DatasetConfig,

    /// Terminal presentation
    pub ui: UiConfig,
}

impl BotConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })
    }

    /// Load from `path` if given, else from `telugu-bot.toml` when present,
    /// else fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    tracing::debug!("using {}", local.display());
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Disable to run fully offline (tasks then report a configuration error)
    pub enabled: bool,

    /// Model name, e.g. "gemini-1.5-pro-latest"
    pub model: String,

    /// REST base URL
    pub base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-1.5-pro-latest".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GENAI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Chat-mode settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// JSON file `{ "phrase": ["reply", ...] }` replacing the built-in table
    pub phrases_file: Option<PathBuf>,

    /// Ask the generator when no table matches
    pub generative_fallback: bool,

    /// Greeting/identity keyword tier; unset means "on when a dataset is loaded"
    pub keyword_categories: Option<bool>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { phrases_file: None, generative_fallback: true, keyword_categories: None }
    }
}

/// Translate-mode settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Answer a handful of common greetings from a fixed table
    pub quick_phrases: bool,
}

/// Dataset settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Local JSON or JSON Lines file
    pub path: Option<PathBuf>,

    /// Remote JSON or JSON Lines file, downloaded once into the cache
    pub url: Option<String>,

    /// Cache directory; defaults to the user cache dir
    pub cache_dir: Option<PathBuf>,
}

/// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay between revealed words, in milliseconds
    pub typing_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { typing_delay_ms: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = BotConfig::default();
        assert_eq!(config.generator.api_key_env, "GENAI_API_KEY");
        assert_eq!(config.generator.model, "gemini-1.5-pro-latest");
        assert!(config.chat.generative_fallback);
        assert!(!config.translate.quick_phrases);
        assert_eq!(config.dataset, DatasetConfig::default());
        assert!(config.dataset.path.is_none() && config.dataset.url.is_none());
        assert_eq!(config.ui.typing_delay_ms, 50);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bot.toml");
        std::fs::write(
            &path,
            "[chat]\ngenerative_fallback = false\n\n[dataset]\npath = \"records.jsonl\"\n",
        )
        .unwrap();

        let config = BotConfig::from_file(&path).unwrap();
        assert!(!config.chat.generative_fallback);
        assert_eq!(config.dataset.path, Some(PathBuf::from("records.jsonl")));
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bot.toml");

        let mut config = BotConfig::default();
        config.ui.typing_delay_ms = 0;
        config.chat.keyword_categories = Some(true);
        config.save(&path).unwrap();

        assert_eq!(BotConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[chat\n").unwrap();

        let err = BotConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
