//! Configuration management for Prospect
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/prospect/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{ProspectError, Result};

/// Main configuration for Prospect
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gemini API configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Browser configuration
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Profile scraping configuration
    #[serde(default)]
    pub scrape: ScrapeConfig,
    /// Company-research configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Whether to show debug output
    #[serde(default)]
    pub debug: bool,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key. Sourced from GEMINI_API_KEY; never stored in source.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model used for message generation
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Browser session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run with a visible window (required for the login step)
    pub headed: bool,
    /// User-agent string applied to every new page via CDP override
    pub user_agent: String,
}

/// Retry policy for per-page operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts per address, including the first
    pub max_attempts: usize,
    /// Fixed wait between attempts, in milliseconds
    pub backoff_ms: u64,
}

impl RetryPolicy {
    /// Backoff interval as a Duration
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

/// Profile scraping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Settle delay after navigation before markup is read, in milliseconds.
    /// Client-side rendering has no completion signal we can rely on, so
    /// the page is assumed mostly rendered after this fixed wait.
    pub settle_ms: u64,
    /// Retry policy for profile fetches
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl ScrapeConfig {
    /// Settle delay as a Duration
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Company-research configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Role keywords queried per company
    pub roles: Vec<String>,
    /// Settle delay for search-result pages, in milliseconds
    pub settle_ms: u64,
    /// Retry policy for search-result fetches
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl SearchConfig {
    /// Settle delay as a Duration
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            model: env::var("PROSPECT_GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            timeout_secs: 60,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headed: env::var("PROSPECT_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_ms: 2000,
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            settle_ms: 5000,
            retry: RetryPolicy::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            roles: ["CEO", "CTO", "CMO", "COO", "Founder", "VP"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            settle_ms: 3000,
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prospect")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from_file().unwrap_or_default();

        // The API key always comes from the environment when present,
        // even with a config file on disk.
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            config.gemini.api_key = Some(key);
        }

        config
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(ProspectError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ProspectError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ProspectError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| ProspectError::config(format!("Failed to create config dir: {}", e)))?;
        }

        // The key never lands on disk.
        let mut on_disk = self.clone();
        on_disk.gemini.api_key = None;

        let content = toml::to_string_pretty(&on_disk)
            .map_err(|e| ProspectError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| ProspectError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let mut config = Config::default();
        config.gemini.api_key = None;
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::from("# Error generating config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scrape.retry.max_attempts, 3);
        assert_eq!(config.scrape.settle_ms, 5000);
        assert_eq!(config.search.settle_ms, 3000);
        assert_eq!(
            config.search.roles,
            vec!["CEO", "CTO", "CMO", "COO", "Founder", "VP"]
        );
        assert!(config.browser.user_agent.contains("Chrome/120"));
        // No doubled spaces survive the multi-line literal
        assert!(!config.browser.user_agent.contains("  "));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("settle_ms"));
        assert!(toml_str.contains("max_attempts"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.scrape.retry.max_attempts, 3);
    }

    #[test]
    fn test_durations() {
        let scrape = ScrapeConfig {
            settle_ms: 250,
            retry: RetryPolicy {
                max_attempts: 2,
                backoff_ms: 10,
            },
        };
        assert_eq!(scrape.settle(), Duration::from_millis(250));
        assert_eq!(scrape.retry.backoff(), Duration::from_millis(10));
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("prospect"));
    }
}
