// Configuration loading and parsing (config/hoopcast.toml, credentials.toml).
//
// Every field carries a default, so the service starts with no config files
// at all: the store and model paths fall back to the conventional filenames
// in the working directory, and the chat client comes up disabled unless a
// key is found in credentials.toml or the ANTHROPIC_API_KEY environment
// variable (the environment wins).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(skip)]
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV store of per-team season stats, relative to the working directory.
    pub stats_csv: String,
    /// Serialized regression model.
    pub model: String,
    /// Minimum games played for a usable mid-season snapshot.
    pub games_threshold: u32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            stats_csv: "season.csv".to_string(),
            model: "model.json".to_string(),
            games_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 200,
            temperature: 0.3,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CredentialsConfig {
    pub anthropic_api_key: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/hoopcast.toml` and (optionally)
/// `config/credentials.toml`, both relative to `base_dir`. Missing files are
/// not errors; malformed files are.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    // --- hoopcast.toml (optional) ---
    let config_path = config_dir.join("hoopcast.toml");
    let mut config: Config = match std::fs::read_to_string(&config_path) {
        Ok(text) => toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: config_path.clone(),
            source: e,
        })?,
        Err(_) => Config::default(),
    };

    // --- credentials.toml (optional) ---
    let credentials_path = config_dir.join("credentials.toml");
    if let Ok(text) = std::fs::read_to_string(&credentials_path) {
        config.credentials = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: credentials_path.clone(),
            source: e,
        })?;
    }

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory and applies the ANTHROPIC_API_KEY environment override.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = load_config_from(&cwd)?;
    if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
        if !key.is_empty() {
            config.credentials.anthropic_api_key = Some(key);
        }
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError {
            field: "server.port".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.data.games_threshold == 0 {
        return Err(ConfigError::ValidationError {
            field: "data.games_threshold".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.llm.max_tokens == 0 {
        return Err(ConfigError::ValidationError {
            field: "llm.max_tokens".into(),
            message: "must be greater than 0".into(),
        });
    }

    let temp = config.llm.temperature;
    if !(0.0..=1.0).contains(&temp) {
        return Err(ConfigError::ValidationError {
            field: "llm.temperature".into(),
            message: format!("must be between 0.0 and 1.0 inclusive, got {temp}"),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
