//! Configuration management
//!
//! This module handles loading and parsing configuration for the Alumna service.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::models::Style;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Poetic description generator limits
    #[serde(default)]
    pub poetry: PoetryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origin (the photo album front-end)
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Poetic description configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoetryConfig {
    /// Number of styles returned when a request does not ask for a count
    #[serde(default = "default_style_count")]
    pub default_style_count: usize,
    /// Upper bound on styles per request
    #[serde(default = "default_max_style_count")]
    pub max_style_count: usize,
    /// Longest accepted caption, in characters
    #[serde(default = "default_max_caption_chars")]
    pub max_caption_chars: usize,
    /// Most tags accepted per request
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

impl Default for PoetryConfig {
    fn default() -> Self {
        Self {
            default_style_count: default_style_count(),
            max_style_count: default_max_style_count(),
            max_caption_chars: default_max_caption_chars(),
            max_tags: default_max_tags(),
        }
    }
}

fn default_style_count() -> usize {
    3
}

fn default_max_style_count() -> usize {
    Style::ALL.len()
}

fn default_max_caption_chars() -> usize {
    200
}

fn default_max_tags() -> usize {
    20
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - ALUMNA_SERVER_HOST
    /// - ALUMNA_SERVER_PORT
    /// - ALUMNA_SERVER_CORS_ORIGIN
    /// - ALUMNA_POETRY_DEFAULT_STYLE_COUNT
    /// - ALUMNA_POETRY_MAX_STYLE_COUNT
    /// - ALUMNA_POETRY_MAX_CAPTION_CHARS
    /// - ALUMNA_POETRY_MAX_TAGS
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let poetry = &self.poetry;
        if poetry.max_style_count == 0 {
            return Err(ConfigError::ValidationError(
                "poetry.max_style_count must be at least 1".to_string(),
            ));
        }
        if poetry.max_style_count > Style::ALL.len() {
            return Err(ConfigError::ValidationError(format!(
                "poetry.max_style_count must not exceed {}",
                Style::ALL.len()
            )));
        }
        if poetry.default_style_count == 0 || poetry.default_style_count > poetry.max_style_count {
            return Err(ConfigError::ValidationError(format!(
                "poetry.default_style_count must be between 1 and {}",
                poetry.max_style_count
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ALUMNA_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse::<u16>("ALUMNA_SERVER_PORT") {
            self.server.port = port;
        }
        if let Ok(cors_origin) = std::env::var("ALUMNA_SERVER_CORS_ORIGIN") {
            self.server.cors_origin = cors_origin;
        }

        if let Some(count) = env_parse::<usize>("ALUMNA_POETRY_DEFAULT_STYLE_COUNT") {
            self.poetry.default_style_count = count;
        }
        if let Some(count) = env_parse::<usize>("ALUMNA_POETRY_MAX_STYLE_COUNT") {
            self.poetry.max_style_count = count;
        }
        if let Some(chars) = env_parse::<usize>("ALUMNA_POETRY_MAX_CAPTION_CHARS") {
            self.poetry.max_caption_chars = chars;
        }
        if let Some(tags) = env_parse::<usize>("ALUMNA_POETRY_MAX_TAGS") {
            self.poetry.max_tags = tags;
        }
    }
}

/// Read and parse an environment variable, ignoring invalid values
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const MISSING_CONFIG: &str = "nonexistent_alumna_config.yml";

    const ENV_KEYS: [&str; 7] = [
        "ALUMNA_SERVER_HOST",
        "ALUMNA_SERVER_PORT",
        "ALUMNA_SERVER_CORS_ORIGIN",
        "ALUMNA_POETRY_DEFAULT_STYLE_COUNT",
        "ALUMNA_POETRY_MAX_STYLE_COUNT",
        "ALUMNA_POETRY_MAX_CAPTION_CHARS",
        "ALUMNA_POETRY_MAX_TAGS",
    ];

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        super::CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let path = Path::new(MISSING_CONFIG);
        let config = Config::load(path).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origin, "http://localhost:3000");
        assert_eq!(config.poetry.default_style_count, 3);
        assert_eq!(config.poetry.max_style_count, 5);
        assert_eq!(config.poetry.max_caption_chars, 200);
        assert_eq!(config.poetry.max_tags, 20);
    }

    #[test]
    fn test_load_empty_file_returns_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "   \n").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.poetry.default_style_count, 3);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "poetry:\n  max_tags: 5\n").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.poetry.max_tags, 5);
        assert_eq!(config.poetry.max_caption_chars, 200);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
server:
  host: "127.0.0.1"
  port: 9000
  cors_origin: "https://alumni.example.org"
poetry:
  default_style_count: 2
  max_style_count: 4
  max_caption_chars: 80
  max_tags: 8
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.cors_origin, "https://alumni.example.org");
        assert_eq!(config.poetry.default_style_count, 2);
        assert_eq!(config.poetry.max_style_count, 4);
        assert_eq!(config.poetry.max_caption_chars, 80);
        assert_eq!(config.poetry.max_tags, 8);
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "server:\n  port: not_a_number\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_load_malformed_yaml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "server:\n  host: [invalid yaml").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_default_above_max_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "poetry:\n  default_style_count: 4\n  max_style_count: 2\n").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_max_style_count_beyond_catalogue_is_rejected() {
        let mut config = Config::default();
        config.poetry.max_style_count = Style::ALL.len() + 1;
        assert!(config.validate().is_err());

        config.poetry.max_style_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_override_server_config() {
        let _guard = lock_env();
        clear_env();

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "server:\n  host: \"0.0.0.0\"\n  port: 8080\n").unwrap();

        std::env::set_var("ALUMNA_SERVER_HOST", "192.168.1.1");
        std::env::set_var("ALUMNA_SERVER_PORT", "4000");
        std::env::set_var("ALUMNA_SERVER_CORS_ORIGIN", "https://alumni.example.org");

        let config = Config::load_with_env(file.path()).unwrap();

        assert_eq!(config.server.host, "192.168.1.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.cors_origin, "https://alumni.example.org");

        clear_env();
    }

    #[test]
    fn test_env_override_poetry_config() {
        let _guard = lock_env();
        clear_env();

        std::env::set_var("ALUMNA_POETRY_DEFAULT_STYLE_COUNT", "1");
        std::env::set_var("ALUMNA_POETRY_MAX_STYLE_COUNT", "2");
        std::env::set_var("ALUMNA_POETRY_MAX_CAPTION_CHARS", "50");
        std::env::set_var("ALUMNA_POETRY_MAX_TAGS", "3");

        let config = Config::load_with_env(Path::new(MISSING_CONFIG)).unwrap();

        assert_eq!(config.poetry.default_style_count, 1);
        assert_eq!(config.poetry.max_style_count, 2);
        assert_eq!(config.poetry.max_caption_chars, 50);
        assert_eq!(config.poetry.max_tags, 3);

        clear_env();
    }

    #[test]
    fn test_env_override_ignores_invalid_values() {
        let _guard = lock_env();
        clear_env();

        std::env::set_var("ALUMNA_SERVER_PORT", "not_a_port");
        std::env::set_var("ALUMNA_POETRY_MAX_TAGS", "-3");

        let config = Config::load_with_env(Path::new(MISSING_CONFIG)).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.poetry.max_tags, 20);

        clear_env();
    }

    #[test]
    fn test_env_override_is_validated() {
        let _guard = lock_env();
        clear_env();

        std::env::set_var("ALUMNA_POETRY_MAX_STYLE_COUNT", "0");

        let result = Config::load_with_env(Path::new(MISSING_CONFIG));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        clear_env();
    }
}
