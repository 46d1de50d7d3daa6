use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the Bioscope application.
///
/// Loaded from `~/.bioscope/config.toml` by default. Each section covers
/// one subsystem; missing sections and fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BioscopeConfig {
    pub general: GeneralConfig,
    pub corpus: CorpusConfig,
    pub graph: GraphConfig,
    pub summarize: SummarizeConfig,
    pub server: ServerConfig,
}

impl BioscopeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BioscopeConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// API server port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

/// Corpus input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the publications JSON file (document id -> record).
    pub path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: "data/publications.json".to_string(),
        }
    }
}

/// Knowledge-graph view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Default cap on the number of publications shown in a graph view.
    pub default_max_publications: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_max_publications: 50,
        }
    }
}

/// Summarization collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeConfig {
    /// Base URL of the generative-language API.
    pub api_base: String,
    /// API key. `BIOSCOPE_API_KEY` in the environment takes precedence.
    pub api_key: String,
    /// Model identifier passed to the API.
    pub model: String,
    /// Per-IP request limit for the summarize endpoint (60-second window).
    pub prompt_limit: u32,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            prompt_limit: 10,
        }
    }
}

impl SummarizeConfig {
    /// Resolve the API key, preferring the environment over the config file.
    pub fn resolved_api_key(&self) -> String {
        std::env::var("BIOSCOPE_API_KEY").unwrap_or_else(|_| self.api_key.clone())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allowed CORS origin for the browser frontend. `*` allows any origin.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}
