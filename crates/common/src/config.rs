use crate::error::SummoraError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summora application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key
    pub gemini_api_key: String,

    /// Gemini API base URL
    pub gemini_base_url: String,

    /// Summarization model identifier
    pub summary_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Static UI directory
    pub static_dir: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            summary_model: "gemini-3-flash-preview".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            static_dir: PathBuf::from("./static"),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SummoraError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            // API_KEY is accepted as a fallback name
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .unwrap_or_default(),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or(defaults.gemini_base_url),
            summary_model: std::env::var("SUMMARY_MODEL").unwrap_or(defaults.summary_model),
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            static_dir: Self::get_env_path("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SummoraError> {
        if self.gemini_api_key.is_empty() {
            return Err(SummoraError::config(
                "GEMINI_API_KEY is not set. Export it or add it to .env",
            ));
        }

        if !self.gemini_base_url.starts_with("http://")
            && !self.gemini_base_url.starts_with("https://")
        {
            return Err(SummoraError::config(
                "Gemini base URL must start with http:// or https://",
            ));
        }

        if self.summary_model.is_empty() {
            return Err(SummoraError::config("Summary model cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(SummoraError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.summary_model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());

        let config = AppConfig {
            gemini_api_key: "test-key".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = AppConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_base_url: "ftp://example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
