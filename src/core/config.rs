//! Configuration management for WebSnap
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/websnap/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{Result, WebSnapError};

/// Main configuration for WebSnap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Browser binary configuration
    pub browser: BrowserConfig,
    /// Capture defaults
    pub capture: CaptureConfig,
    /// Batch capture configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Browser binary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Explicit path to a Chrome/Chromium binary. When unset, well-known
    /// binary names are probed from PATH.
    pub binary: Option<String>,
    /// Extra arguments appended to every Chrome invocation
    #[serde(default)]
    pub extra_args: Vec<String>,
    /// Whether to run a pre-flight HTTP reachability check before launching
    /// the browser
    pub preflight: bool,
}

/// Default settings for individual captures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Capture the full page height instead of the viewport
    pub full_page: bool,
    /// Overall time budget per capture in ms
    pub timeout_ms: u64,
    /// Extra settle time after load before capturing, in ms
    pub wait_ms: u64,
    /// Whether to show debug output
    pub debug: bool,
}

/// Batch capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum captures in flight at once
    pub concurrency: usize,
    /// Keep going when an individual URL fails
    pub continue_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: BrowserConfig::default(),
            capture: CaptureConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            binary: env::var("WEBSNAP_CHROME").ok(),
            extra_args: Vec::new(),
            preflight: env::var("WEBSNAP_PREFLIGHT")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            full_page: false,
            timeout_ms: env::var("WEBSNAP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            wait_ms: 0,
            debug: env::var("WEBSNAP_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: env::var("WEBSNAP_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            continue_on_error: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("websnap")
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

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(WebSnapError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| WebSnapError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| WebSnapError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| WebSnapError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| WebSnapError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| WebSnapError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Delete the config file
    pub fn delete_config() -> Result<()> {
        let config_path = Self::config_file();
        if config_path.exists() {
            fs::remove_file(&config_path)
                .map_err(|e| WebSnapError::config(format!("Failed to delete config: {}", e)))?;
        }
        Ok(())
    }

    /// Per-capture time budget as a Duration
    pub fn capture_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.capture.timeout_ms)
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.capture.width, 1280);
        assert_eq!(config.capture.height, 800);
        assert!(!config.capture.full_page);
        assert_eq!(config.batch.concurrency, 4);
        assert!(config.batch.continue_on_error);
    }

    #[test]
    fn test_capture_timeout() {
        let mut config = Config::default();
        config.capture.timeout_ms = 5000;
        assert_eq!(config.capture_timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("timeout_ms"));
        assert!(toml_str.contains("concurrency"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.capture.timeout_ms, config.capture.timeout_ms);
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("websnap"));
    }
}
